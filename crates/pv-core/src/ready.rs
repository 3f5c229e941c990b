//! Container-ready signaling
//!
//! The section layouts are built from fetch responses, and some renders
//! depend on an earlier response having landed (the CSV sample gallery
//! needs the controls, the global image analysis needs the stats layout).
//! Rather than sleeping for a fixed delay and hoping, the producer flips a
//! `ReadySignal` and dependents await it.

use tokio::sync::watch;

/// Producer side: flipped once when the container exists.
#[derive(Debug, Clone)]
pub struct ReadySignal {
    tx: watch::Sender<bool>,
}

/// Consumer side: awaitable, clonable, observes the transition at most once.
#[derive(Debug, Clone)]
pub struct Readiness {
    rx: watch::Receiver<bool>,
}

impl ReadySignal {
    pub fn new() -> (ReadySignal, Readiness) {
        let (tx, rx) = watch::channel(false);
        (ReadySignal { tx }, Readiness { rx })
    }

    /// Mark the container ready. Idempotent.
    pub fn notify(&self) {
        // send only fails when every receiver is gone, which just means
        // nobody is waiting anymore.
        let _ = self.tx.send(true);
    }

    pub fn is_ready(&self) -> bool {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> Readiness {
        Readiness {
            rx: self.tx.subscribe(),
        }
    }
}

impl Readiness {
    /// Wait until the producer signals readiness.
    ///
    /// Returns `false` if the producer was dropped without ever signaling,
    /// in which case the dependent render should be abandoned.
    pub async fn wait(&mut self) -> bool {
        loop {
            if *self.rx.borrow() {
                return true;
            }
            if self.rx.changed().await.is_err() {
                return *self.rx.borrow();
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        *self.rx.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscriber_observes_the_transition() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        rt.block_on(async {
            let (signal, mut readiness) = ReadySignal::new();
            assert!(!readiness.is_ready());

            let waiter = tokio::spawn(async move { readiness.wait().await });
            signal.notify();
            assert!(waiter.await.unwrap());
        });
    }

    #[test]
    fn late_subscriber_sees_readiness_immediately() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        rt.block_on(async {
            let (signal, _readiness) = ReadySignal::new();
            signal.notify();

            let mut late = signal.subscribe();
            assert!(late.is_ready());
            assert!(late.wait().await);
        });
    }

    #[test]
    fn dropped_producer_unblocks_waiters() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        rt.block_on(async {
            let (signal, mut readiness) = ReadySignal::new();
            drop(signal);
            assert!(!readiness.wait().await);
        });
    }

    #[test]
    fn notify_is_idempotent() {
        let (signal, readiness) = ReadySignal::new();
        signal.notify();
        signal.notify();
        assert!(signal.is_ready());
        assert!(readiness.is_ready());
    }
}
