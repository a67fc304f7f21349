//! 2D linear algebra used by the solver.
//!
//! Everything here is a plain `Copy` value type. Two of the operations are
//! partial: [`Vec2::normalize`] on a zero vector and [`Mat22::invert`] on a
//! singular matrix. Both are checked with `debug_assert!` only, callers on the
//! hot path guarantee the precondition.

mod mat22;
mod vec2;

pub use mat22::Mat22;
pub use vec2::Vec2;

/// Cross product of two vectors, i.e. the z component of `(a, 0) x (b, 0)`.
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// `(v, 0) x (0, 0, s)`
#[inline]
pub fn cross_vs(v: Vec2, s: f32) -> Vec2 {
    Vec2::new(s * v.y, -s * v.x)
}

/// `(0, 0, s) x (v, 0)`; the velocity of a point at lever arm `v` under spin `s`.
#[inline]
pub fn cross_sv(s: f32, v: Vec2) -> Vec2 {
    Vec2::new(-s * v.y, s * v.x)
}

/// Sign with zero mapped to `+1`, so a tie never produces a zero axis.
#[inline]
pub fn sign(x: f32) -> f32 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}
