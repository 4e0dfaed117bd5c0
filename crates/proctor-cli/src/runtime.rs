//! Async runtime for the `proctor` binary.

use anyhow::Result;
use std::future::Future;

/// Drive `fut` to completion on a fresh multi-thread runtime.
///
/// Teardown does not wait for the blocking pool. An OS query that outlived
/// its probe timeout is abandoned with the process instead of holding the
/// exit after the report has been printed.
pub fn block_on<F: Future>(fut: F) -> Result<F::Output> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let output = rt.block_on(fut);
    rt.shutdown_background();

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use proctor_core::{
        DeviceSource, DisplayInfo, HostSnapshot, Platform, ProviderResult, UsbDevice,
    };
    use proctor_engine::Engine;
    use std::sync::mpsc::{self, Receiver};
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    /// Display enumeration parks a blocking-pool thread until released.
    struct Wedged {
        gate: Arc<Mutex<Receiver<()>>>,
    }

    #[async_trait]
    impl DeviceSource for Wedged {
        async fn list_displays(&self) -> ProviderResult<DisplayInfo> {
            let gate = Arc::clone(&self.gate);
            let _ = tokio::task::spawn_blocking(move || {
                let _ = gate.lock().map(|rx| rx.recv());
            })
            .await;
            Ok(DisplayInfo::new(1))
        }

        async fn list_usb_devices(&self) -> ProviderResult<Vec<UsbDevice>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn stuck_blocking_query_does_not_hold_teardown() {
        let (release, rx) = mpsc::channel::<()>();
        let devices = Wedged {
            gate: Arc::new(Mutex::new(rx)),
        };
        let engine = Engine::builder(
            Arc::new(HostSnapshot::empty(Platform::Linux)),
            Arc::new(devices),
        )
        .probe_timeout(Duration::from_millis(100))
        .build();

        let started = Instant::now();
        let verdict = block_on(async move { engine.check_displays().await }).unwrap();

        assert!(verdict.is_failure());
        assert_eq!(
            verdict.error.as_deref(),
            Some("display list query timed out after 100 ms")
        );
        assert!(started.elapsed() < Duration::from_secs(5));

        // Still parked: teardown returned without joining it
        drop(release);
    }

    #[test]
    fn returns_the_future_output() {
        assert_eq!(block_on(async { 21 * 2 }).unwrap(), 42);
    }
}
