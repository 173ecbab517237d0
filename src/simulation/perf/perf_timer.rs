#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn now() -> Stamp {
    js_sys::Date::now()
}

#[cfg(target_arch = "wasm32")]
fn ms_since(start: Stamp) -> f64 {
    js_sys::Date::now() - start
}

#[cfg(not(target_arch = "wasm32"))]
fn now() -> Stamp {
    std::time::Instant::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn ms_since(start: Stamp) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Stopwatch for the step phases. A timer started while perf metrics are
/// off never reads the clock and always reports 0 ms.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    start: Option<Stamp>,
}

impl PerfTimer {
    pub(crate) fn start_if(enabled: bool) -> Self {
        Self { start: enabled.then(now) }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        self.start.map_or(0.0, ms_since)
    }

    /// Run `phase`, adding its duration to `slot` when metrics are on
    #[inline]
    pub(crate) fn accumulate<T>(enabled: bool, slot: &mut f64, phase: impl FnOnce() -> T) -> T {
        let timer = Self::start_if(enabled);
        let out = phase();
        if enabled {
            *slot += timer.elapsed_ms();
        }
        out
    }
}
