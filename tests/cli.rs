use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn sample_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("docs")
        .join("samples")
        .join(name)
}

/// Runs the binary from an empty directory so no local `bitsy.toml` is picked up.
fn bitsy_in(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("bitsy");
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn convert_to_json_by_default() {
    let dir = TempDir::new().unwrap();
    bitsy_in(&dir)
        .arg("convert")
        .arg(sample_path("kitchensink.bitsy"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"title\": \"Tea Time\"")
                .and(predicate::str::contains("\"rgb(0,82,204)\"")),
        );
}

#[test]
fn convert_to_treeviz() {
    let dir = TempDir::new().unwrap();
    bitsy_in(&dir)
        .arg("convert")
        .arg(sample_path("kitchensink.bitsy"))
        .arg("--to")
        .arg("treeviz")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("⧉ Tea Time")
                .and(predicate::str::contains("room: 1 - garden"))
                .and(predicate::str::contains("row:").not()),
        );
}

#[test]
fn convert_to_treeviz_with_frames() {
    let dir = TempDir::new().unwrap();
    bitsy_in(&dir)
        .arg("convert")
        .arg(sample_path("drawables.bitsy"))
        .args(["--to", "treeviz", "--show-frames"])
        .assert()
        .success()
        .stdout(predicate::str::contains("row: ########"));
}

#[test]
fn convert_json_back_to_bitsy() {
    let dir = TempDir::new().unwrap();
    let source = sample_path("drawables.bitsy");
    let json = dir.path().join("drawables.json");

    let output = bitsy_in(&dir)
        .arg("convert")
        .arg(&source)
        .args(["--to", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    fs::write(&json, &output.stdout).unwrap();

    bitsy_in(&dir)
        .arg("convert")
        .arg(&json)
        .args(["--to", "bitsy"])
        .assert()
        .success()
        .stdout(fs::read_to_string(source).unwrap());
}

#[test]
fn convert_reads_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[convert]\ndefault_format = \"yaml\"\n").unwrap();

    bitsy_in(&dir)
        .arg("convert")
        .arg(sample_path("palette.bitsy"))
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("title: My Game"));
}

#[test]
fn convert_reads_local_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("bitsy.toml"),
        "[convert]\ndefault_format = \"treeviz\"\n",
    )
    .unwrap();

    bitsy_in(&dir)
        .arg("convert")
        .arg(sample_path("palette.bitsy"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("⧉ My Game"));
}

#[test]
fn convert_unknown_format_fails() {
    let dir = TempDir::new().unwrap();
    bitsy_in(&dir)
        .arg("convert")
        .arg(sample_path("palette.bitsy"))
        .args(["--to", "xml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("format 'xml' not found"));
}

#[test]
fn check_valid_document() {
    let dir = TempDir::new().unwrap();
    bitsy_in(&dir)
        .arg("check")
        .arg(sample_path("kitchensink.bitsy"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ok (2 palettes, 2 rooms, 2 tiles, 2 sprites, 2 items, 3 dialogs, 1 variables)",
        ));
}

#[test]
fn check_truncated_document() {
    let dir = TempDir::new().unwrap();
    bitsy_in(&dir)
        .arg("check")
        .arg(sample_path("truncated-room.bitsy"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 19"));
}

#[test]
fn check_missing_file() {
    let dir = TempDir::new().unwrap();
    bitsy_in(&dir)
        .args(["check", "missing.bitsy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file"));
}

#[test]
fn list_formats() {
    let dir = TempDir::new().unwrap();
    bitsy_in(&dir)
        .arg("list-formats")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("bitsy")
                .and(predicate::str::contains("json"))
                .and(predicate::str::contains("yaml"))
                .and(predicate::str::contains("[read/write]"))
                .and(predicate::str::contains("[write]"))
                .and(predicate::str::contains("(.yaml, .yml)")),
        );
}

#[test]
fn convert_reads_yml_by_extension() {
    let dir = TempDir::new().unwrap();
    let yml = dir.path().join("palette.yml");
    let output = bitsy_in(&dir)
        .arg("convert")
        .arg(sample_path("palette.bitsy"))
        .args(["--to", "yaml"])
        .output()
        .unwrap();
    assert!(output.status.success());
    fs::write(&yml, &output.stdout).unwrap();

    bitsy_in(&dir)
        .arg("convert")
        .arg(&yml)
        .args(["--to", "bitsy"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("My Game\n\nPAL 0\n"));
}

#[test]
fn convert_flag_beats_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("bitsy.toml"),
        "[convert]\ndefault_format = \"xml\"\n",
    )
    .unwrap();

    bitsy_in(&dir)
        .arg("convert")
        .arg(sample_path("palette.bitsy"))
        .args(["--to", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title: My Game"));
}

#[test]
fn convert_rejects_write_only_input_format_in_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("bitsy.toml"),
        "[convert]\ninput_format = \"treeviz\"\n",
    )
    .unwrap();

    bitsy_in(&dir)
        .arg("convert")
        .arg(sample_path("palette.bitsy"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("format 'treeviz' cannot be read"));
}
