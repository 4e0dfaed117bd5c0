use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const BUSY_HOST: &str = r#"{
  "captured_at": "2026-03-02T09:30:00Z",
  "platform": "linux",
  "processes": [
    { "pid": 1, "name": "systemd", "command_line": "/sbin/init" },
    { "pid": 812, "name": "zoom", "command_line": "/opt/zoom/zoom" },
    { "pid": 901, "name": "Interview_Coder", "command_line": "/opt/ic/interview_coder --overlay" }
  ],
  "displays": { "count": 2 },
  "usb_devices": [
    { "name": "USB Keyboard", "vendor_id": "046d", "product_id": "c31c" }
  ]
}"#;

const QUIET_HOST: &str = r#"{
  "captured_at": "2026-03-02T09:30:00Z",
  "platform": "linux",
  "processes": [
    { "pid": 1, "name": "systemd", "command_line": "/sbin/init" }
  ],
  "displays": { "count": 1 },
  "usb_devices": [
    { "name": "USB Keyboard" }
  ]
}"#;

const PARTIAL_HOST: &str = r#"{
  "captured_at": "2026-03-02T09:30:00Z",
  "platform": "linux",
  "processes": [],
  "displays": { "count": 1 }
}"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn snapshot(&self, name: &str, body: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("proctor").unwrap();
        cmd.env("PROCTOR_CONFIG", self.config_path())
            .env_remove("RUST_LOG")
            .arg("--no-color");
        cmd
    }
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn scan_busy_snapshot_reports_violation() {
    let fx = Fixture::new();
    let snap = fx.snapshot("busy.json", BUSY_HOST);

    fx.cmd()
        .args(["scan", "--snapshot", arg(&snap)])
        .assert()
        .success()
        .stdout(contains("Multiple displays detected"))
        .stdout(contains("Screen sharing detected"))
        .stdout(contains("Interview Coder detected"))
        .stdout(contains("pid 901: Interview_Coder"))
        .stdout(contains("Overall: VIOLATION"));
}

#[test]
fn scan_quiet_snapshot_passes() {
    let fx = Fixture::new();
    let snap = fx.snapshot("quiet.json", QUIET_HOST);

    fx.cmd()
        .args(["scan", "--snapshot", arg(&snap), "--fail-on", "warning"])
        .assert()
        .success()
        .stdout(contains("Overall: PASSED"))
        .stdout(contains("Error checking").not());
}

#[test]
fn fail_on_violation_sets_exit_status() {
    let fx = Fixture::new();
    let snap = fx.snapshot("busy.json", BUSY_HOST);

    fx.cmd()
        .args(["scan", "--snapshot", arg(&snap), "--fail-on", "violation"])
        .assert()
        .failure()
        .stderr(contains("threshold"));
}

#[test]
fn missing_section_is_an_error_verdict_not_a_crash() {
    let fx = Fixture::new();
    let snap = fx.snapshot("partial.json", PARTIAL_HOST);

    fx.cmd()
        .args(["scan", "--snapshot", arg(&snap)])
        .assert()
        .success()
        .stdout(contains("Error checking"))
        .stdout(contains("1 check(s) could not run"))
        .stdout(contains("Overall: NEEDS REVIEW"));
}

#[test]
fn json_scan_is_machine_readable() {
    let fx = Fixture::new();
    let snap = fx.snapshot("busy.json", BUSY_HOST);

    let output = fx
        .cmd()
        .args(["-o", "json", "scan", "--snapshot", arg(&snap)])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["platform"], "linux");
    assert_eq!(report["display"]["severity"], "violation");
    assert_eq!(report["keyboard"]["passed"], true);
    assert_eq!(report["screen-sharing"]["check"], "screen-sharing");
    assert_eq!(report["disallowed-process"]["severity"], "violation");
}

#[test]
fn single_check_csv() {
    let fx = Fixture::new();
    let snap = fx.snapshot("busy.json", BUSY_HOST);

    fx.cmd()
        .args(["-o", "csv", "check", "disallowed-process", "--snapshot", arg(&snap)])
        .assert()
        .success()
        .stdout(contains("check,passed,severity"))
        .stdout(contains("disallowed-process,false,violation"));
}

#[test]
fn catalog_filters_by_platform() {
    let fx = Fixture::new();

    fx.cmd()
        .args(["catalog", "--platform", "macos"])
        .assert()
        .success()
        .stdout(contains("Zoom"))
        .stdout(contains("screencapture"));

    fx.cmd()
        .args(["catalog", "--platform", "linux"])
        .assert()
        .success()
        .stdout(contains("Zoom"))
        .stdout(contains("screencapture").not());
}

#[test]
fn config_signatures_extend_catalog() {
    let fx = Fixture::new();
    std::fs::write(
        fx.config_path(),
        "[[signatures]]\nlabel = \"Parsec\"\ntokens = [\"parsecd\"]\n",
    )
    .unwrap();

    fx.cmd()
        .args(["catalog", "--platform", "linux"])
        .assert()
        .success()
        .stdout(contains("Parsec"));
}

#[test]
fn config_init_then_path() {
    let fx = Fixture::new();

    fx.cmd().args(["config", "init"]).assert().success();
    assert!(fx.config_path().exists());

    fx.cmd()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(contains("--force"));

    fx.cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(contains("config.toml"));
}

#[test]
fn unreadable_snapshot_fails_cleanly() {
    let fx = Fixture::new();
    let snap = fx.snapshot("broken.json", "{ not json");

    fx.cmd()
        .args(["scan", "--snapshot", arg(&snap)])
        .assert()
        .failure();
}

#[cfg(target_os = "linux")]
#[test]
fn snapshot_round_trips_through_scan() {
    let fx = Fixture::new();
    let sysfs = fx.dir.path().join("sys");
    let connector = sysfs.join("class").join("drm").join("card0-eDP-1");
    std::fs::create_dir_all(&connector).unwrap();
    std::fs::write(connector.join("status"), "connected\n").unwrap();
    std::fs::write(fx.config_path(), format!("sysfs_root = {:?}\n", arg(&sysfs))).unwrap();

    let snap = fx.dir.path().join("captured.json");
    fx.cmd()
        .args(["snapshot", "--timeout", "5", "--out", arg(&snap)])
        .assert()
        .success()
        .stderr(contains("Snapshot written"));

    let output = fx
        .cmd()
        .args(["-o", "json", "check", "display", "--snapshot", arg(&snap)])
        .output()
        .unwrap();
    assert!(output.status.success());

    let verdict: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(verdict["passed"], true);
    assert_eq!(verdict["findings"]["display_count"], 1);
}
