use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("phrase-gen").unwrap()
}

#[test]
fn count_defaults_to_adjective_noun() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .arg("count")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("2304\n");
}

#[test]
fn count_self_pairing_rule() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .args(["count", "--type", "noun-noun"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("2256\n");
}

#[test]
fn count_three_words_multiplies_by_nouns() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .args(["count", "--type", "verb-noun", "--words", "3"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(format!("{}\n", 48 * 48 * 48));
}

#[test]
fn count_custom_list_ignores_duplicates() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.child("words.txt");
    file.write_str("red\nblue\nred\n\ngreen\n").unwrap();

    cmd()
        .args(["count", "--custom", file.path().to_str().unwrap()])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn types_lists_every_rule() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .arg("types")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("adjective-noun"))
        .stdout(predicate::str::contains("adverb-adjective"))
        .stdout(predicate::str::contains("custom-custom"));
}
