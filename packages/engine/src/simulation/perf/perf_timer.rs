/// Host monotonic-ish clock in ms, only used for profiling numbers.
#[inline]
fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::sync::OnceLock;
        use std::time::Instant;

        static ORIGIN: OnceLock<Instant> = OnceLock::new();
        ORIGIN.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
    }
}

/// Run `f` and report how long it took in ms
pub(crate) fn timed<R>(f: impl FnOnce() -> R) -> (R, f64) {
    let start = now_ms();
    let out = f();
    (out, (now_ms() - start).max(0.0))
}
