//! Timed UI transitions ("Saved!" badges, delayed navigation).

/// Resolve after `ms` milliseconds in the browser; immediately elsewhere.
#[allow(clippy::unused_async)]
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}
