use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;
use std::collections::HashSet;

fn cmd() -> Command {
    Command::cargo_bin("phrase-gen").unwrap()
}

fn setup(tmp: &TempDir) -> String {
    let file = tmp.child("words.txt");
    file.write_str("red\nblue\ngreen\n").unwrap();
    file.path().to_str().unwrap().to_string()
}

fn generate(tmp: &TempDir, words: &str, n: &str) -> Vec<String> {
    let output = cmd()
        .args(["generate", "-n", n, "--custom", words, "--state", "used.json", "--on-exhausted", "silent"])
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

fn remaining(tmp: &TempDir, words: &str) -> String {
    let output = cmd()
        .args(["remaining", "--custom", words, "--state", "used.json"])
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn state_keeps_phrases_unique_across_runs() {
    let tmp = TempDir::new().unwrap();
    let words = setup(&tmp);

    let first = generate(&tmp, &words, "4");
    let second = generate(&tmp, &words, "4");
    assert_eq!(first.len(), 4);
    // Only 3 * 2 = 6 phrases exist.
    assert_eq!(second.len(), 2);

    let all: HashSet<&String> = first.iter().chain(second.iter()).collect();
    assert_eq!(all.len(), 6);

    let state = std::fs::read_to_string(tmp.path().join("used.json")).unwrap();
    let val: serde_json::Value = serde_json::from_str(&state).unwrap();
    assert_eq!(val["used"].as_array().unwrap().len(), 6);
}

#[test]
fn remaining_tracks_state() {
    let tmp = TempDir::new().unwrap();
    let words = setup(&tmp);

    assert_eq!(remaining(&tmp, &words), "6");
    generate(&tmp, &words, "2");
    assert_eq!(remaining(&tmp, &words), "4");
}

#[test]
fn reset_restores_capacity() {
    let tmp = TempDir::new().unwrap();
    let words = setup(&tmp);

    generate(&tmp, &words, "6");
    assert_eq!(remaining(&tmp, &words), "0");

    cmd()
        .args(["reset", "--state", "used.json"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("6 phrases cleared"));

    assert_eq!(remaining(&tmp, &words), "6");
    assert_eq!(generate(&tmp, &words, "1").len(), 1);
}

#[test]
fn corrupt_state_file_fails() {
    let tmp = TempDir::new().unwrap();
    let words = setup(&tmp);
    tmp.child("used.json").write_str("not json").unwrap();

    cmd()
        .args(["generate", "--custom", &words, "--state", "used.json"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn concurrent_runs_share_one_state_file() {
    let tmp = TempDir::new().unwrap();
    let words = setup(&tmp);

    let dir = tmp.path().to_path_buf();
    let threads: Vec<_> = (0..4)
        .map(|_| {
            let d = dir.clone();
            let w = words.clone();
            std::thread::spawn(move || {
                let output = Command::cargo_bin("phrase-gen")
                    .unwrap()
                    .args(["generate", "-n", "2", "--custom", &w, "--state", "used.json", "--on-exhausted", "silent"])
                    .current_dir(&d)
                    .output()
                    .unwrap();
                assert!(output.status.success());
                String::from_utf8_lossy(&output.stdout)
                    .lines()
                    .map(str::to_string)
                    .collect::<Vec<String>>()
            })
        })
        .collect();

    let mut all = Vec::new();
    for t in threads {
        all.extend(t.join().unwrap());
    }

    // 8 requests against 6 possible phrases: every phrase exactly once.
    let unique: HashSet<&String> = all.iter().collect();
    assert_eq!(all.len(), 6);
    assert_eq!(unique.len(), 6);
    assert_eq!(remaining(&tmp, &words), "0");
    assert!(!tmp.path().join("used.json.lock").exists());
}
