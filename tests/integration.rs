// Integration testing is done by invoking the CLI as a subprocess.
use predicates::prelude::*;
use std::fs;

fn cli() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("session-scaffold").unwrap()
}

#[test]
fn creates_session_plugin() {
    let tmp = tempfile::tempdir().unwrap();
    let destination = tmp.path().join("n8n-nodes-session");

    cli()
        .arg(&destination)
        .assert()
        .success()
        .stdout(predicate::str::contains("SessionApi.credentials.ts"))
        .stdout(predicate::str::contains("Project files created successfully!"));

    for file in [
        "credentials/SessionApi.credentials.ts",
        "nodes/SessionTrigger/SessionTrigger.node.ts",
        "nodes/SessionTrigger/session.svg",
        "nodes/Session/Session.node.ts",
        "nodes/Session/session.svg",
        "package.json",
    ] {
        assert!(destination.join(file).is_file(), "missing {file}");
    }

    let svg = fs::read_to_string(destination.join("nodes/Session/session.svg")).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn defaults_to_project_name_in_working_directory() {
    let tmp = tempfile::tempdir().unwrap();

    cli()
        .current_dir(tmp.path())
        .args(["--project-name", "n8n-nodes-acme"])
        .assert()
        .success();

    let manifest = fs::read_to_string(tmp.path().join("n8n-nodes-acme/package.json")).unwrap();
    assert!(manifest.contains("\"name\": \"n8n-nodes-acme\""));
}

#[test]
fn rerun_produces_identical_output() {
    let tmp = tempfile::tempdir().unwrap();
    let destination = tmp.path().join("out");
    let node = destination.join("nodes/Session/Session.node.ts");

    cli().arg(&destination).assert().success();
    let first = fs::read(&node).unwrap();
    cli().arg(&destination).assert().success();
    let second = fs::read(&node).unwrap();

    assert_eq!(first, second);
}

#[test]
fn flags_reach_the_credential() {
    let tmp = tempfile::tempdir().unwrap();
    let destination = tmp.path().join("out");

    cli()
        .arg(&destination)
        .args(["--docs-url", "https://example.com/session"])
        .args(["--base-url", "http://session:9000"])
        .assert()
        .success();

    let credential =
        fs::read_to_string(destination.join("credentials/SessionApi.credentials.ts")).unwrap();
    assert!(credential.contains("https://example.com/session"));
    assert!(credential.contains("http://session:9000"));
    assert!(credential.contains("'X-API-Key': '={{$credentials.apiKey}}'"));
}

#[test]
fn dry_run_previews_without_writing() {
    let tmp = tempfile::tempdir().unwrap();
    let destination = tmp.path().join("out");

    cli()
        .arg(&destination)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Preview"))
        .stdout(predicate::str::contains("Session.node.ts"));

    assert!(!destination.exists());
}

#[test]
fn unwritable_destination_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, "plain file").unwrap();

    cli()
        .arg(blocker.join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("creating a directory"));
}

#[test]
fn duplicate_template_targets_need_overwrite() {
    let tmp = tempfile::tempdir().unwrap();
    let templates = tmp.path().join("templates");
    fs::create_dir_all(&templates).unwrap();
    fs::write(templates.join("a.txt"), "plain").unwrap();
    fs::write(templates.join("a.txt.tera"), "{{ project_name }}").unwrap();
    let destination = tmp.path().join("out");

    cli()
        .arg(&destination)
        .arg("--template-dir")
        .arg(&templates)
        .assert()
        .failure()
        .stderr(predicate::str::contains("more than once"));

    cli()
        .arg(&destination)
        .arg("--template-dir")
        .arg(&templates)
        .arg("--overwrite")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(destination.join("a.txt")).unwrap(),
        "n8n-nodes-session"
    );
}

#[test]
fn broken_config_is_reported() {
    let tmp = tempfile::tempdir().unwrap();
    let config = tmp.path().join("scaffold.toml");
    fs::write(&config, "project_name = [").unwrap();

    cli()
        .arg(tmp.path().join("out"))
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to parse toml file"));
}

#[test]
fn config_template_dir_is_relative_to_config_file() {
    let tmp = tempfile::tempdir().unwrap();
    let config_dir = tmp.path().join("cfg");
    let work = tmp.path().join("work");
    fs::create_dir_all(config_dir.join("tpl")).unwrap();
    fs::create_dir_all(&work).unwrap();
    fs::write(config_dir.join("tpl/hello.txt"), "hello from cfg\n").unwrap();
    fs::write(config_dir.join("scaffold.toml"), "template_dir = \"./tpl\"\n").unwrap();

    cli()
        .current_dir(&work)
        .arg("out")
        .arg("--config")
        .arg(config_dir.join("scaffold.toml"))
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(work.join("out/hello.txt")).unwrap(),
        "hello from cfg"
    );
}

#[test]
fn template_dir_flag_is_relative_to_working_directory() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("tpl")).unwrap();
    fs::write(tmp.path().join("tpl/hello.txt"), "hello from cwd").unwrap();

    cli()
        .current_dir(tmp.path())
        .args(["out", "--template-dir", "tpl"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(tmp.path().join("out/hello.txt")).unwrap(),
        "hello from cwd"
    );
}
