use assert_cmd::Command;
use predicates::prelude::*;

fn lintdoc() -> Command {
    assert_cmd::cargo::cargo_bin_cmd!("lintdoc")
}

const FIXTURE_RECORDS: &str = "tests/fixtures/bugpatterns.txt";
const FIXTURE_EXAMPLES: &str = "tests/fixtures/examples";
const FIXTURE_EXPLANATIONS: &str = "tests/fixtures/explanations";

fn generate_args(output_dir: &std::path::Path) -> Vec<String> {
    vec![
        "generate".to_string(),
        FIXTURE_RECORDS.to_string(),
        "--output-dir".to_string(),
        output_dir.to_str().unwrap().to_string(),
        "--examples-dir".to_string(),
        FIXTURE_EXAMPLES.to_string(),
        "--explanations-dir".to_string(),
        FIXTURE_EXPLANATIONS.to_string(),
    ]
}

// ── generate ─────────────────────────────────────────────────────────────────

#[test]
fn generate_renders_fixture_records() {
    let dir = tempfile::tempdir().unwrap();

    lintdoc()
        .args(generate_args(dir.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS"))
        .stdout(predicate::str::contains("2 rendered, 0 failed"));

    let page = std::fs::read_to_string(dir.path().join("DeadStore.md")).unwrap();
    let golden =
        std::fs::read_to_string("tests/fixtures/goldens/DeadStore_plain_gfm.md").unwrap();
    assert_eq!(page, golden);
    assert!(dir.path().join("EmptyCatch.md").exists());
}

#[test]
fn generate_with_front_matter_and_pygments_matches_golden() {
    let dir = tempfile::tempdir().unwrap();

    let mut args = generate_args(dir.path());
    args.push("--front-matter".to_string());
    args.push("--pygments".to_string());

    lintdoc().args(args).assert().success();

    let page = std::fs::read_to_string(dir.path().join("DeadStore.md")).unwrap();
    let golden =
        std::fs::read_to_string("tests/fixtures/goldens/DeadStore_frontmatter_pygments.md")
            .unwrap();
    assert_eq!(page, golden);
}

#[test]
fn generate_sidecar_record_uses_sidecar_text() {
    let dir = tempfile::tempdir().unwrap();

    lintdoc().args(generate_args(dir.path())).assert().success();

    let page = std::fs::read_to_string(dir.path().join("EmptyCatch.md")).unwrap();
    assert!(page.contains("Swallowing an exception without logging or rethrowing"));
}

#[test]
fn generate_missing_example_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("wiki");

    lintdoc()
        .args([
            "generate",
            FIXTURE_RECORDS,
            "--output-dir",
            out_dir.to_str().unwrap(),
            // Wrong tree: no example file can be found under it.
            "--examples-dir",
            FIXTURE_EXPLANATIONS,
            "--explanations-dir",
            FIXTURE_EXPLANATIONS,
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAIL"));
}

#[test]
fn generate_fail_fast_stops_at_first_failure() {
    let dir = tempfile::tempdir().unwrap();
    let records = dir.path().join("bugpatterns.txt");
    let out_dir = dir.path().join("wiki");

    // First record is malformed; the second is the valid fixture line.
    let fixture = std::fs::read_to_string(FIXTURE_RECORDS).unwrap();
    std::fs::write(&records, format!("broken line\n{fixture}")).unwrap();

    let mut args = vec![
        "generate".to_string(),
        records.to_str().unwrap().to_string(),
        "--output-dir".to_string(),
        out_dir.to_str().unwrap().to_string(),
        "--examples-dir".to_string(),
        FIXTURE_EXAMPLES.to_string(),
        "--explanations-dir".to_string(),
        FIXTURE_EXPLANATIONS.to_string(),
        "--fail-fast".to_string(),
    ];
    lintdoc().args(&args).assert().code(1);
    assert!(!out_dir.join("DeadStore.md").exists());

    // Without --fail-fast the remaining records still render.
    args.pop();
    lintdoc().args(&args).assert().code(1);
    assert!(out_dir.join("DeadStore.md").exists());
}

#[test]
fn generate_json_format() {
    let dir = tempfile::tempdir().unwrap();

    let mut args = generate_args(dir.path());
    args.push("--format".to_string());
    args.push("json".to_string());

    let output = lintdoc().args(args).output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    assert!(parsed["passed"].as_bool().unwrap());
    assert_eq!(parsed["rendered"], 2);
}

#[test]
fn generate_report_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let report_file = dir.path().join("report.json");

    let mut args = generate_args(&dir.path().join("wiki"));
    args.push("--format".to_string());
    args.push("json".to_string());
    args.push("--output".to_string());
    args.push(report_file.to_str().unwrap().to_string());

    lintdoc().args(args).assert().success();

    let content = std::fs::read_to_string(&report_file).unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&content).expect("Report file should contain valid JSON");
    assert!(parsed["passed"].as_bool().unwrap());
}

#[test]
fn generate_nonexistent_records_exits_2() {
    lintdoc()
        .args(["generate", "tests/fixtures/does-not-exist.txt"])
        .assert()
        .code(2);
}

#[test]
fn generate_rejects_sarif_format() {
    // SARIF is only meaningful for check findings.
    lintdoc()
        .args(["generate", FIXTURE_RECORDS, "--format", "sarif"])
        .assert()
        .code(2);
}

// ── check ────────────────────────────────────────────────────────────────────

#[test]
fn check_fixture_records_passes() {
    lintdoc()
        .args([
            "check",
            FIXTURE_RECORDS,
            "--examples-dir",
            FIXTURE_EXAMPLES,
            "--explanations-dir",
            FIXTURE_EXPLANATIONS,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS"));
}

#[test]
fn check_missing_sources_exits_1() {
    let dir = tempfile::tempdir().unwrap();

    lintdoc()
        .args([
            "check",
            FIXTURE_RECORDS,
            "--examples-dir",
            dir.path().to_str().unwrap(),
            "--explanations-dir",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("sources/missing-example"));
}

#[test]
fn check_sarif_format() {
    let dir = tempfile::tempdir().unwrap();

    let output = lintdoc()
        .args([
            "check",
            FIXTURE_RECORDS,
            "--examples-dir",
            dir.path().to_str().unwrap(),
            "--explanations-dir",
            dir.path().to_str().unwrap(),
            "--format",
            "sarif",
        ])
        .output()
        .unwrap();

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should produce valid SARIF JSON");
    assert_eq!(parsed["version"], "2.1.0");
    assert_eq!(parsed["runs"][0]["tool"]["driver"]["name"], "lintdoc");
}

#[test]
fn check_strict_fails_on_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let explanations = dir.path().join("explanations");
    std::fs::create_dir_all(&explanations).unwrap();
    // Unreferenced sidecar: a warning, not an error.
    std::fs::write(explanations.join("Unused.md"), "orphan\n").unwrap();
    std::fs::write(
        explanations.join("EmptyCatch.md"),
        "Swallowing an exception hides failures.\n",
    )
    .unwrap();

    let args = [
        "check",
        FIXTURE_RECORDS,
        "--examples-dir",
        FIXTURE_EXAMPLES,
        "--explanations-dir",
        explanations.to_str().unwrap(),
    ];

    lintdoc().args(args).assert().success();
    lintdoc()
        .args(args.iter().chain(["--strict"].iter()))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("sources/orphan-sidecar"));
}

// ── preview ──────────────────────────────────────────────────────────────────

#[test]
fn preview_prints_page_to_stdout() {
    let golden =
        std::fs::read_to_string("tests/fixtures/goldens/DeadStore_plain_gfm.md").unwrap();

    lintdoc()
        .args([
            "preview",
            FIXTURE_RECORDS,
            "DeadStore",
            "--examples-dir",
            FIXTURE_EXAMPLES,
            "--explanations-dir",
            FIXTURE_EXPLANATIONS,
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff(golden));
}

#[test]
fn preview_unknown_short_name_exits_2() {
    lintdoc()
        .args([
            "preview",
            FIXTURE_RECORDS,
            "NoSuchPattern",
            "--examples-dir",
            FIXTURE_EXAMPLES,
            "--explanations-dir",
            FIXTURE_EXPLANATIONS,
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown short name"));
}

// ── config file ──────────────────────────────────────────────────────────────

#[test]
fn config_file_sets_render_options() {
    let dir = tempfile::tempdir().unwrap();
    let config_file = dir.path().join("lintdoc.toml");
    let out_dir = dir.path().join("wiki");
    std::fs::write(
        &config_file,
        format!(
            "[dirs]\noutput = {out:?}\nexamples = \"tests/fixtures/examples\"\n\
             explanations = \"tests/fixtures/explanations\"\n\n\
             [render]\nfront_matter = true\npygments = true\n",
            out = out_dir.to_str().unwrap(),
        ),
    )
    .unwrap();

    lintdoc()
        .args([
            "generate",
            FIXTURE_RECORDS,
            "--config",
            config_file.to_str().unwrap(),
        ])
        .assert()
        .success();

    let page = std::fs::read_to_string(out_dir.join("DeadStore.md")).unwrap();
    let golden =
        std::fs::read_to_string("tests/fixtures/goldens/DeadStore_frontmatter_pygments.md")
            .unwrap();
    assert_eq!(page, golden);
}

#[test]
fn missing_config_file_exits_2() {
    lintdoc()
        .args([
            "generate",
            FIXTURE_RECORDS,
            "--config",
            "tests/fixtures/no-such-config.toml",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}
