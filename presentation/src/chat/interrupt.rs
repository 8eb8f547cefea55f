use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Cancels a token when Ctrl-C arrives, for as long as the guard lives
pub struct CtrlCGuard {
    token: CancellationToken,
    watcher: JoinHandle<()>,
}

impl CtrlCGuard {
    /// Must be called from within a tokio runtime.
    pub fn new() -> Self {
        let token = CancellationToken::new();
        let watcher = {
            let token = token.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    token.cancel();
                }
            })
        };
        Self { token, watcher }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

impl Default for CtrlCGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CtrlCGuard {
    fn drop(&mut self) {
        self.watcher.abort();
    }
}
