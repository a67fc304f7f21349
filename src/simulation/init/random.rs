/// Random number generator (xorshift32)
#[inline]
pub(crate) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform float in `[lo, hi)`
pub(crate) fn random_range(state: &mut u32, lo: f32, hi: f32) -> f32 {
    // Top 24 bits fit the f32 mantissa exactly.
    let t = (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32;
    lo + t * (hi - lo)
}
