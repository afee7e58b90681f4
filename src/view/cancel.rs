//! Cancellation signal shared between a mounted view and its requests
//!
//! Built on a `watch` channel: the source flips the value to `true` once and
//! every token cloned before or after that observes it.

use tokio::sync::watch;

/// Owning side, held by the controller for the lifetime of one mount
#[derive(Debug)]
pub struct CancelSource {
    sender: watch::Sender<bool>,
}

/// Observing side, carried by each in-flight request
#[derive(Debug, Clone)]
pub struct CancelToken {
    receiver: watch::Receiver<bool>,
}

impl CancelSource {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self { sender }
    }

    pub fn token(&self) -> CancelToken {
        CancelToken {
            receiver: self.sender.subscribe(),
        }
    }

    /// Signal cancellation; idempotent
    pub fn cancel(&self) {
        // send 在没有 receiver 时会失败，send_replace 总是写入
        self.sender.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }
}

impl Default for CancelSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Resolves once the source is cancelled or dropped
    pub async fn cancelled(&mut self) {
        let _ = self.receiver.wait_for(|cancelled| *cancelled).await;
    }
}
