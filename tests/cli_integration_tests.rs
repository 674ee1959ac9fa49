//! CLI Integration Tests for main.rs
//!
//! Runs the real binary against temporary fixture directories and checks
//! the console contract: phase markers, six series of three lines each, and
//! a non-zero exit with no report on the first fatal error.

use assert_cmd::Command;
use predicates::prelude::*;
use vuln_codec_bench::Format;

mod common;
use common::{shipped_fixtures, FixtureDir};

const ENV_KEYS: [&str; 5] = [
    "VULN_BENCH_ITERATIONS",
    "VULN_BENCH_FIXTURES",
    "VULN_BENCH_WARMUP",
    "VULN_BENCH_UNIT",
    "RUST_LOG",
];

/// Binary with a clean `VULN_BENCH_*` environment
fn bench() -> Command {
    let mut cmd = Command::cargo_bin("vuln-codec-bench").unwrap();
    for key in ENV_KEYS {
        cmd.env_remove(key);
    }
    cmd
}

/// Values of the report line starting with `prefix`
fn series_values(stdout: &str, prefix: &str) -> Vec<u64> {
    let line = stdout
        .lines()
        .find(|line| line.starts_with(prefix))
        .unwrap_or_else(|| panic!("no line starting with {prefix:?} in:\n{stdout}"));
    line.split_once(": ")
        .map(|(_, list)| list)
        .unwrap_or("")
        .split(", ")
        .filter(|v| !v.is_empty())
        .map(|v| v.parse().expect("non-integer timing"))
        .collect()
}

/// **What is tested:** A full run over the shipped fixtures
/// **Why it is tested:** This is the program's primary use case and output contract
/// **Test conditions:** `--iterations 4` with the shipped fixture directory
/// **Expectations:** Markers in order, 18 series lines, FIN last, exit code 0
#[test]
fn test_full_run_output_layout() {
    let output = bench()
        .args(["--iterations", "4", "--fixtures"])
        .arg(shipped_fixtures())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.first(), Some(&"Warm up"));
    assert_eq!(lines.get(1), Some(&"Start"));
    assert_eq!(lines.last(), Some(&"FIN"));
    assert_eq!(lines.len(), 2 + 18 + 1);

    let expected_order = [
        "JSON (annotated)",
        "YAML (annotated)",
        "XML (annotated)",
        "JSON (unannotated)",
        "YAML (unannotated)",
        "XML (unannotated)",
    ];
    for (i, name) in expected_order.iter().enumerate() {
        let base = 2 + i * 3;
        assert!(lines[base].starts_with(&format!("{name} unmarshal (ms): ")));
        assert!(lines[base + 1].starts_with(&format!("{name} marshal (ms): ")));
        assert!(lines[base + 2].starts_with(&format!("{name} total (ms): ")));
    }
}

/// **What is tested:** Series length and the combined column
/// **Why it is tested:** Each series must have one value per iteration and totals must add up
/// **Test conditions:** `--iterations 5 --unit us` so values are rarely zero
/// **Expectations:** 5 values per line and total == unmarshal + marshal elementwise
#[test]
fn test_series_lengths_and_totals() {
    let output = bench()
        .args(["-n", "5", "--unit", "us", "--no-warmup", "-f"])
        .arg(shipped_fixtures())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    for format in ["JSON", "YAML", "XML"] {
        for variant in ["annotated", "unannotated"] {
            let name = format!("{format} ({variant})");
            let unmarshal = series_values(&stdout, &format!("{name} unmarshal (us)"));
            let marshal = series_values(&stdout, &format!("{name} marshal (us)"));
            let total = series_values(&stdout, &format!("{name} total (us)"));

            assert_eq!(unmarshal.len(), 5, "{name}");
            assert_eq!(marshal.len(), 5, "{name}");
            assert_eq!(total.len(), 5, "{name}");
            for i in 0..5 {
                assert_eq!(total[i], unmarshal[i] + marshal[i], "{name} sample {i}");
            }
        }
    }
}

#[test]
fn test_no_warmup_skips_marker() {
    bench()
        .args(["-n", "1", "--no-warmup", "-f"])
        .arg(shipped_fixtures())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Start\n"))
        .stdout(predicate::str::contains("Warm up").not());
}

/// **What is tested:** Per-call diagnostics on stderr
/// **Why it is tested:** Operators follow progress through the log stream, not stdout
/// **Test conditions:** Two iterations at default verbosity
/// **Expectations:** stderr names the phases, adapters, whole-millisecond elapsed
/// values and per-iteration progress; `-q` silences them
#[test]
fn test_diagnostics_go_to_stderr() {
    bench()
        .args(["-n", "2", "-f"])
        .arg(shipped_fixtures())
        .assert()
        .success()
        .stderr(predicate::str::contains("unmarshal"))
        .stderr(predicate::str::contains("XML (unannotated)"))
        .stderr(predicate::str::is_match(r"(?m)elapsed_ms=\d+$").unwrap())
        .stderr(predicate::str::contains("iteration=1"))
        .stderr(predicate::str::contains("iteration=2"))
        .stderr(predicate::str::contains("iteration complete"));

    bench()
        .args(["-n", "1", "-q", "-f"])
        .arg(shipped_fixtures())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

/// **What is tested:** Environment configuration layer
/// **Why it is tested:** VULN_BENCH_* values must apply when no flag overrides them
/// **Test conditions:** Iterations, fixture dir and unit supplied only via environment
/// **Expectations:** Two values per series reported in microseconds
#[test]
fn test_environment_configuration() {
    let output = bench()
        .env("VULN_BENCH_ITERATIONS", "2")
        .env("VULN_BENCH_FIXTURES", shipped_fixtures())
        .env("VULN_BENCH_UNIT", "us")
        .env("VULN_BENCH_WARMUP", "off")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Start\n"));
    assert_eq!(
        series_values(&stdout, "YAML (annotated) marshal (us)").len(),
        2
    );
}

#[test]
fn test_cli_overrides_environment() {
    let output = bench()
        .env("VULN_BENCH_ITERATIONS", "2")
        .args(["--iterations", "3", "--fixtures"])
        .arg(shipped_fixtures())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        series_values(&stdout, "JSON (unannotated) total (ms)").len(),
        3
    );
}

/// **What is tested:** Mismatched XML closing tag
/// **Why it is tested:** Malformed input must abort before any series is reported
/// **Test conditions:** Shipped JSON/YAML with a broken XML fixture
/// **Expectations:** Non-zero exit, XML decode error on stderr, no series or FIN on stdout
#[test]
fn test_mismatched_xml_tag_is_fatal() {
    let dir = FixtureDir::builder()
        .with_shipped()
        .with_fixture(
            Format::Xml,
            "<debian_vulns><packages><package>openssl</pkg></packages></debian_vulns>",
        )
        .build()
        .unwrap();

    bench()
        .args(["-n", "2", "-f"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("XML decode failed"))
        .stdout(predicate::str::contains("unmarshal").not())
        .stdout(predicate::str::contains("FIN").not());
}

#[test]
fn test_truncated_fixture_is_fatal() {
    for format in Format::ALL {
        let dir = FixtureDir::builder()
            .with_shipped()
            .with_truncated(format, 120)
            .build()
            .unwrap();

        bench()
            .args(["-n", "1", "--no-warmup", "-f"])
            .arg(dir.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains(format!("{format} decode failed")))
            .stdout(predicate::str::contains("total").not());
    }
}

#[test]
fn test_missing_fixture_is_fatal() {
    let dir = FixtureDir::builder()
        .with_shipped()
        .without(Format::Yaml)
        .build()
        .unwrap();

    bench()
        .arg("-f")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("debian_vulns.yaml"))
        .stdout(predicate::str::is_empty());
}

/// **What is tested:** Invalid configuration values
/// **Why it is tested:** Bad settings must be rejected before any work is done
/// **Test conditions:** Zero iterations via CLI, unknown unit via CLI, bad env boolean
/// **Expectations:** Non-zero exit, message naming the setting, empty stdout
#[test]
fn test_invalid_configuration_is_rejected() {
    bench()
        .args(["--iterations", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--iterations"))
        .stdout(predicate::str::is_empty());

    bench()
        .args(["--unit", "hours"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--unit"));

    bench()
        .env("VULN_BENCH_WARMUP", "maybe")
        .assert()
        .failure()
        .stderr(predicate::str::contains("VULN_BENCH_WARMUP"));
}
