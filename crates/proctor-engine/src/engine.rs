//! Check engine and scan aggregator.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use proctor_core::{
    CheckName, CheckVerdict, DeviceSource, Platform, ProcessSource, ProviderError,
    ProviderResult, ScanReport,
};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::checks;

/// Default bound on each snapshot query
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs integrity checks against injected snapshot providers.
///
/// Cheap to clone; clones share providers and catalog. Holds no mutable
/// state, so repeated checks over an unchanged host give identical verdicts.
#[derive(Clone)]
pub struct Engine {
    inner: Arc<EngineInner>,
}

struct EngineInner {
    processes: Arc<dyn ProcessSource>,
    devices: Arc<dyn DeviceSource>,
    catalog: Catalog,
    platform: Platform,
    probe_timeout: Duration,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("platform", &self.inner.platform)
            .field("signatures", &self.inner.catalog.len())
            .field("probe_timeout", &self.inner.probe_timeout)
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Engine with the built-in catalog, current platform and default timeout.
    #[must_use]
    pub fn new(processes: Arc<dyn ProcessSource>, devices: Arc<dyn DeviceSource>) -> Self {
        EngineBuilder::new(processes, devices).build()
    }

    /// Builder for custom configuration.
    #[must_use]
    pub fn builder(
        processes: Arc<dyn ProcessSource>,
        devices: Arc<dyn DeviceSource>,
    ) -> EngineBuilder {
        EngineBuilder::new(processes, devices)
    }

    /// Builder over one source that provides everything, such as a
    /// recorded snapshot or the live host probe.
    #[must_use]
    pub fn builder_for<S>(source: S) -> EngineBuilder
    where
        S: ProcessSource + DeviceSource + 'static,
    {
        let source = Arc::new(source);
        EngineBuilder::new(source.clone(), source)
    }

    /// Platform used to gate catalog entries.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.inner.platform
    }

    /// The signature catalog in use.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Bound applied to each snapshot query.
    #[must_use]
    pub fn probe_timeout(&self) -> Duration {
        self.inner.probe_timeout
    }

    /// Await a provider query, giving up after the probe timeout.
    async fn query<T, F>(&self, query: &'static str, fut: F) -> ProviderResult<T>
    where
        F: Future<Output = ProviderResult<T>>,
    {
        let bound = self.inner.probe_timeout;
        tokio::time::timeout(bound, fut)
            .await
            .unwrap_or_else(|_| {
                Err(ProviderError::Timeout {
                    query,
                    after_ms: u64::try_from(bound.as_millis()).unwrap_or(u64::MAX),
                })
            })
    }

    /// Fold a provider result into a verdict; errors become warnings.
    fn settle<T>(
        check: CheckName,
        data: ProviderResult<T>,
        evaluate: impl FnOnce(T) -> CheckVerdict,
    ) -> CheckVerdict {
        match data {
            Ok(data) => {
                let verdict = evaluate(data);
                debug!(%check, severity = %verdict.severity, "check finished");
                verdict
            }
            Err(e) => {
                warn!(%check, error = %e, "check could not run");
                CheckVerdict::failed(check, &e)
            }
        }
    }

    /// More than one display attached is a violation.
    pub async fn check_displays(&self) -> CheckVerdict {
        let data = self
            .query("display list", self.inner.devices.list_displays())
            .await;
        Self::settle(CheckName::Display, data, checks::display::evaluate)
    }

    /// Known sharing / remote-access / capture software running.
    pub async fn check_screen_sharing(&self) -> CheckVerdict {
        let data = self
            .query("process list", self.inner.processes.list_processes())
            .await;
        Self::settle(CheckName::ScreenSharing, data, |processes| {
            checks::screen_sharing::evaluate(&processes, &self.inner.catalog, self.inner.platform)
        })
    }

    /// More than one keyboard-like USB device attached is a violation.
    pub async fn check_keyboards(&self) -> CheckVerdict {
        let data = self
            .query("usb device list", self.inner.devices.list_usb_devices())
            .await;
        Self::settle(CheckName::Keyboard, data, |devices| {
            checks::keyboard::evaluate(&devices)
        })
    }

    /// The disallowed assistant application running.
    pub async fn check_disallowed_process(&self) -> CheckVerdict {
        let data = self
            .query("process list", self.inner.processes.list_processes())
            .await;
        Self::settle(CheckName::DisallowedProcess, data, |processes| {
            checks::disallowed::evaluate(&processes)
        })
    }

    /// Run a single check by name.
    pub async fn run_check(&self, check: CheckName) -> CheckVerdict {
        match check {
            CheckName::Display => self.check_displays().await,
            CheckName::ScreenSharing => self.check_screen_sharing().await,
            CheckName::Keyboard => self.check_keyboards().await,
            CheckName::DisallowedProcess => self.check_disallowed_process().await,
        }
    }

    /// Run a check on its own task so a panic cannot take the scan down.
    async fn run_isolated(&self, check: CheckName) -> CheckVerdict {
        let engine = self.clone();
        match tokio::spawn(async move { engine.run_check(check).await }).await {
            Ok(verdict) => verdict,
            Err(e) => {
                warn!(%check, error = %e, "check task died");
                CheckVerdict::failed(check, &ProviderError::Aborted(e.to_string()))
            }
        }
    }

    /// Run all four checks concurrently and assemble the report.
    ///
    /// Never fails: a check that cannot run reports a warning verdict and
    /// the others still complete.
    pub async fn run_all_checks(&self) -> ScanReport {
        let (display, screen_sharing, keyboard, disallowed_process) = tokio::join!(
            self.run_isolated(CheckName::Display),
            self.run_isolated(CheckName::ScreenSharing),
            self.run_isolated(CheckName::Keyboard),
            self.run_isolated(CheckName::DisallowedProcess),
        );

        let report = ScanReport::new(
            self.inner.platform,
            display,
            screen_sharing,
            keyboard,
            disallowed_process,
        );

        info!(
            overall = %report.overall(),
            flagged = report.flagged().count(),
            failed = report.failures().count(),
            "scan complete"
        );
        report
    }
}

/// Builder for configuring an [`Engine`]
pub struct EngineBuilder {
    processes: Arc<dyn ProcessSource>,
    devices: Arc<dyn DeviceSource>,
    catalog: Catalog,
    platform: Platform,
    probe_timeout: Duration,
}

impl EngineBuilder {
    /// Create a builder over the given providers
    #[must_use]
    pub fn new(processes: Arc<dyn ProcessSource>, devices: Arc<dyn DeviceSource>) -> Self {
        Self {
            processes,
            devices,
            catalog: Catalog::builtin(),
            platform: Platform::current(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    /// Replace the signature catalog
    #[must_use]
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Gate catalog entries as if running on `platform`
    #[must_use]
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Set the bound on each snapshot query
    #[must_use]
    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Build the engine
    #[must_use]
    pub fn build(self) -> Engine {
        Engine {
            inner: Arc::new(EngineInner {
                processes: self.processes,
                devices: self.devices,
                catalog: self.catalog,
                platform: self.platform,
                probe_timeout: self.probe_timeout,
            }),
        }
    }
}
