//! E2E tests for `spider watch`

mod common;

use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use common::*;

#[test]
fn watch_produces_json_start_event_and_builds() {
    let env = TestEnv::with_config(IMAGES_CONFIG);
    env.write("assets/images/logo.png", "png");

    let mut child = Command::new(env!("CARGO_BIN_EXE_spider"))
        .arg("watch")
        .arg("--json")
        .current_dir(env.root())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start spider watch");

    thread::sleep(Duration::from_millis(800));

    let _ = child.kill();
    let output = child.wait_with_output().expect("Failed to get output");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("\"watch_started\""), "Got: {stdout}");
    assert!(stdout.contains("\"build_complete\""), "Got: {stdout}");
    assert!(stdout.contains("\"command\":\"watch\""), "Got: {stdout}");
    assert!(env.exists("lib/resources/images.dart"));
}

#[test]
fn watch_without_config_exits_nonzero() {
    let env = TestEnv::new();

    let result = env.run(&["watch"]);
    assert!(!result.success);
    assert!(result.stderr.contains("spider.yaml"), "{}", result.stderr);
}
