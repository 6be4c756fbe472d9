#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rb() -> Command {
    cargo_bin_cmd!("rinkboard")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rinkboard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB without touching the user's config file
pub fn init_db(db_path: &str) {
    rb().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Init + three teams + one tournament with a finished group A:
///
/// - 1 Vojvodina (home club), 2 Partizan, 3 Crvena zvezda
/// - Vojvodina 3:1 Partizan, Partizan 2:2 Crvena zvezda, Crvena zvezda 0:4 Vojvodina
pub fn init_db_with_group(db_path: &str) {
    init_db(db_path);

    rb().args(["--db", db_path, "team", "add", "Vojvodina", "--home"])
        .assert()
        .success();
    rb().args(["--db", db_path, "team", "add", "Partizan"])
        .assert()
        .success();
    rb().args(["--db", db_path, "team", "add", "Crvena zvezda"])
        .assert()
        .success();

    rb().args(["--db", db_path, "tournament", "add", "Zimski kup"])
        .assert()
        .success();

    for (home, away, score) in [("1", "2", "3:1"), ("2", "3", "2:2"), ("3", "1", "0:4")] {
        rb().args([
            "--db",
            db_path,
            "match",
            "add",
            "--tournament",
            "1",
            "--home",
            home,
            "--away",
            away,
            "--group",
            "A",
            "--score",
            score,
        ])
        .assert()
        .success();
    }
}

/// Fake home directory holding `.rinkboard/rinkboard.conf` with the given YAML
pub fn temp_home(name: &str, conf_yaml: &str) -> PathBuf {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_home", name));
    fs::remove_dir_all(&home).ok();
    let conf_dir = home.join(".rinkboard");
    fs::create_dir_all(&conf_dir).expect("create config dir");
    fs::write(conf_dir.join("rinkboard.conf"), conf_yaml).expect("write config");
    home
}
