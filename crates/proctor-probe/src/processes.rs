//! Process discovery via `/proc` filesystem.

use proctor_core::{ProcessRecord, ProviderResult};

/// Discover all running processes.
///
/// Processes that vanish or deny access mid-enumeration are skipped; only a
/// failure to list `/proc` itself is an error.
///
/// # Errors
///
/// Returns `ProviderError::PermissionDenied` or `ProviderError::Enumeration`
/// if `/proc` cannot be read, and `ProviderError::Unsupported` off Linux.
pub fn discover_processes() -> ProviderResult<Vec<ProcessRecord>> {
    imp::discover_processes()
}

#[cfg(target_os = "linux")]
mod imp {
    use procfs::ProcError;
    use proctor_core::{ProcessRecord, ProviderError, ProviderResult};
    use tracing::debug;

    pub fn discover_processes() -> ProviderResult<Vec<ProcessRecord>> {
        let all_procs = procfs::process::all_processes().map_err(classify)?;

        let mut processes = Vec::new();
        for entry in all_procs {
            let proc = match entry {
                Ok(p) => p,
                Err(e) => {
                    debug!(error = %e, "skipping inaccessible process");
                    continue;
                }
            };

            match collect_process_record(&proc) {
                Ok(record) => processes.push(record),
                Err(e) => debug!(pid = proc.pid(), error = %e, "skipping process"),
            }
        }

        debug!(count = processes.len(), "enumerated processes");
        Ok(processes)
    }

    fn collect_process_record(proc: &procfs::process::Process) -> Result<ProcessRecord, ProcError> {
        let stat = proc.stat()?;

        // Kernel threads and zombies have no command line
        let command_line = proc.cmdline().unwrap_or_default().join(" ");

        Ok(ProcessRecord::new(stat.pid, stat.comm, command_line))
    }

    fn classify(err: ProcError) -> ProviderError {
        match err {
            ProcError::PermissionDenied(path) => ProviderError::PermissionDenied(
                path.map_or_else(|| "/proc".to_string(), |p| p.display().to_string()),
            ),
            other => ProviderError::Enumeration(other.to_string()),
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod imp {
    use proctor_core::{Platform, ProcessRecord, ProviderError, ProviderResult};

    pub fn discover_processes() -> ProviderResult<Vec<ProcessRecord>> {
        Err(ProviderError::Unsupported {
            what: "process",
            platform: Platform::current(),
        })
    }
}
