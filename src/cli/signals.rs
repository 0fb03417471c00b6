//! Process signal wiring for the scan binary.
//!
//! - SIGINT / SIGTERM cancel the running scan through its [`CancellationToken`](crate::CancellationToken).
//! - SIGUSR1 raises the scan's [`ProgressFlag`](crate::ProgressFlag).
//!
//! Handlers only flip atomics; the scan observes them cooperatively. On
//! non-Unix platforms nothing is installed and the deadline is the only
//! cancellation source.

use crate::ScanSignals;
use std::io;

#[cfg(unix)]
mod imp {
    use super::ScanSignals;
    use signal_hook::SigId;
    use signal_hook::consts::{SIGINT, SIGTERM, SIGUSR1};
    use signal_hook::iterator::{Handle, Signals};
    use std::io;
    use std::thread::JoinHandle;

    pub struct SignalGuard {
        handle: Handle,
        watcher: Option<JoinHandle<()>>,
        progress_id: SigId,
    }

    pub fn install(signals: &ScanSignals) -> io::Result<SignalGuard> {
        let progress_id = signal_hook::flag::register(SIGUSR1, signals.progress.shared())?;

        let mut termination = Signals::new([SIGINT, SIGTERM]).inspect_err(|_| {
            signal_hook::low_level::unregister(progress_id);
        })?;
        let handle = termination.handle();
        let cancel = signals.cancel.clone();

        let watcher = std::thread::Builder::new()
            .name("signal-watcher".to_string())
            .spawn(move || {
                for signal in termination.forever() {
                    let name = if signal == SIGINT { "SIGINT" } else { "SIGTERM" };
                    log::warn!("Signal {name} received, terminating...");
                    cancel.cancel();
                }
            })?;

        Ok(SignalGuard {
            handle,
            watcher: Some(watcher),
            progress_id,
        })
    }

    impl SignalGuard {
        pub fn close(mut self) {
            self.shutdown();
        }

        fn shutdown(&mut self) {
            self.handle.close();
            signal_hook::low_level::unregister(self.progress_id);
            if let Some(watcher) = self.watcher.take() {
                if watcher.join().is_err() {
                    log::error!("Signal watcher thread panicked");
                }
            }
        }
    }

    impl Drop for SignalGuard {
        fn drop(&mut self) {
            if self.watcher.is_some() {
                self.shutdown();
            }
        }
    }
}

#[cfg(not(unix))]
mod imp {
    use super::ScanSignals;
    use std::io;

    pub struct SignalGuard;

    pub fn install(_signals: &ScanSignals) -> io::Result<SignalGuard> {
        log::debug!("Signal handling unavailable on this platform; relying on the deadline");
        Ok(SignalGuard)
    }

    impl SignalGuard {
        pub fn close(self) {}
    }
}

pub use imp::SignalGuard;

/// Route termination and progress signals into `signals` until the guard is closed.
pub fn install(signals: &ScanSignals) -> io::Result<SignalGuard> {
    imp::install(signals)
}
