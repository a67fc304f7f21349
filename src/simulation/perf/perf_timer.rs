/// Milliseconds on the host clock: `Date.now()` in the browser, `Instant` natively.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Lap timer for the step stages. Each lap covers the time since the
/// previous lap (or since start).
#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    origin_ms: f64,
    lap_start_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        let now = now_ms();
        PerfTimer { origin_ms: now, lap_start_ms: now }
    }

    /// Time since the last lap; starts the next one.
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let now = now_ms();
        let lap = now - self.lap_start_ms;
        self.lap_start_ms = now;
        lap
    }

    pub(crate) fn total_ms(&self) -> f64 {
        now_ms() - self.origin_ms
    }
}
