use std::time::Duration;

/// How long the update view shows its success banner before leaving.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Platform sleep: browser timers on WASM, tokio natively.
async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Run `action` once `duration` has elapsed.
pub async fn run_after(duration: Duration, action: impl FnOnce()) {
    sleep(duration).await;
    action();
}
