//! Stop request shared between the poll loop and the signal listener.

use std::future::Future;
use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct Shutdown {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    /// Becomes requested once `trigger` resolves to `true`. A `false` trigger
    /// never requests shutdown. Must be called inside a tokio runtime.
    pub fn watch<F>(trigger: F) -> Self
    where
        F: Future<Output = bool> + Send + 'static,
    {
        let (tx, rx) = watch::channel(false);
        tokio::spawn(async move {
            if trigger.await {
                let _ = tx.send(true);
            }
        });
        Self { rx }
    }

    /// Listen for Ctrl+C. The handler is installed before this returns, so an
    /// interrupt during the first batch is caught instead of killing the process.
    pub async fn ctrl_c() -> Self {
        let mut signal = Box::pin(tokio::signal::ctrl_c());
        let early = tokio::select! {
            biased;
            res = &mut signal => Some(res),
            () = std::future::ready(()) => None,
        };
        match early {
            Some(res) => Self::watch(std::future::ready(interrupted(res))),
            None => Self::watch(async move { interrupted(signal.await) }),
        }
    }

    pub fn is_requested(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once shutdown is requested; pending forever otherwise.
    pub async fn requested(&mut self) {
        if self.rx.wait_for(|stop| *stop).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

fn interrupted(res: std::io::Result<()>) -> bool {
    match res {
        Ok(()) => {
            tracing::info!("received Ctrl+C, finishing current batch");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "cannot listen for Ctrl+C");
            false
        }
    }
}
