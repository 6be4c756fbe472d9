use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, init_db_with_group, rb, setup_test_db, temp_home, temp_out};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    rb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    rb().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"));
}

#[test]
fn test_standings_table_is_ordered() {
    let db_path = setup_test_db("cli_standings_table");
    init_db_with_group(&db_path);

    let output = rb()
        .args(["--db", &db_path, "standings", "--tournament", "1"])
        .output()
        .expect("run standings");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Group A"));

    // Vojvodina 6 pts, Partizan 1 pt (GD -2), Crvena zvezda 1 pt (GD -4)
    let voj = stdout.find("Vojvodina ★").expect("home club row");
    let par = stdout.find("Partizan").expect("Partizan row");
    let czv = stdout.find("Crvena zvezda").expect("Crvena zvezda row");
    assert!(voj < par && par < czv, "unexpected order:\n{stdout}");
    assert!(stdout.contains("+6"));
}

#[test]
fn test_standings_csv_export_to_file() {
    let db_path = setup_test_db("cli_standings_csv");
    let out = temp_out("cli_standings_csv", "csv");
    init_db_with_group(&db_path);

    rb().args([
        "--db",
        &db_path,
        "standings",
        "--tournament",
        "1",
        "--format",
        "csv",
        "--file",
        &out,
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let csv = fs::read_to_string(&out).expect("read csv");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some(
            "group,position,team_id,team,home_club,played,won,drawn,lost,goals_for,goals_against,goal_difference,points"
        )
    );
    assert_eq!(lines.next(), Some("A,1,1,Vojvodina,true,2,2,0,0,7,1,6,6"));
    assert_eq!(lines.count(), 2);

    // existing file is kept without --force
    rb().args([
        "--db",
        &db_path,
        "standings",
        "--tournament",
        "1",
        "--format",
        "csv",
        "--file",
        &out,
    ])
    .assert()
    .failure()
    .stderr(contains("already exists"));
}

#[test]
fn test_standings_json_to_stdout() {
    let db_path = setup_test_db("cli_standings_json");
    init_db_with_group(&db_path);

    rb().args(["--db", &db_path, "standings", "--tournament", "1", "--format", "json"])
        .assert()
        .success()
        .stdout(contains("\"group\": \"A\""))
        .stdout(contains("\"points\": 6"));
}

#[test]
fn test_match_result_completes_a_scheduled_match() {
    let db_path = setup_test_db("cli_match_result");
    init_db_with_group(&db_path);

    rb().args([
        "--db",
        &db_path,
        "match",
        "add",
        "--tournament",
        "1",
        "--home",
        "2",
        "--away",
        "1",
        "--stage",
        "playoff",
        "--at",
        "2024-02-10T18:00",
    ])
    .assert()
    .success()
    .stdout(contains("-:-"));

    rb().args(["--db", &db_path, "match", "result", "4", "1:1", "--shootout-winner", "2"])
        .assert()
        .success();

    rb().args(["--db", &db_path, "bracket", "--tournament", "1"])
        .assert()
        .success()
        .stdout(contains("Partizan (SO)"));
}

#[test]
fn test_match_needs_two_different_teams() {
    let db_path = setup_test_db("cli_match_same_team");
    init_db_with_group(&db_path);

    rb().args([
        "--db",
        &db_path,
        "match",
        "add",
        "--tournament",
        "1",
        "--home",
        "2",
        "--away",
        "2",
    ])
    .assert()
    .failure()
    .stderr(contains("two different teams"));
}

#[test]
fn test_unknown_tournament_fails() {
    let db_path = setup_test_db("cli_unknown_tournament");
    init_db(&db_path);

    rb().args(["--db", &db_path, "standings", "--tournament", "42"])
        .assert()
        .failure()
        .stderr(contains("Tournament not found: 42"));
}

#[test]
fn test_game_slugs_are_unique() {
    let db_path = setup_test_db("cli_game_slugs");
    init_db(&db_path);

    let add = |db: &str| {
        rb().args([
            "--db",
            db,
            "game",
            "add",
            "--opponent",
            "Партизан",
            "--tournament",
            "Zimski kup",
            "--at",
            "2024-01-20T18:30",
        ])
        .assert()
        .success()
    };

    add(&db_path).stdout(contains("[2024-01-20-partizan-zimski-kup-group]"));
    add(&db_path).stdout(contains("[2024-01-20-partizan-zimski-kup-group-2]"));
}

#[test]
fn test_explicit_duplicate_slug_fails() {
    let db_path = setup_test_db("cli_duplicate_slug");
    init_db(&db_path);

    rb().args(["--db", &db_path, "tournament", "add", "Zimski kup", "--slug", "kup"])
        .assert()
        .success();

    rb().args(["--db", &db_path, "tournament", "add", "Letnji kup", "--slug", "kup"])
        .assert()
        .failure()
        .stderr(contains("already taken"));

    rb().args(["--db", &db_path, "tournament", "list"])
        .assert()
        .success()
        .stdout(contains("Zimski kup"))
        .stdout(contains("Letnji kup").not());
}

#[test]
fn test_training_add_and_stats() {
    let db_path = setup_test_db("cli_training");
    let log = temp_out("cli_training_log", "json");
    init_db(&db_path);

    fs::write(
        &log,
        r#"[
            {"team_a": [7, 8], "team_b": [9], "score_a": 2, "score_b": 0,
             "goals": [{"team": "A", "scorer_id": 7, "assist_id": 8},
                       {"team": "A", "scorer_id": 7}]},
            "junk"
        ]"#,
    )
    .expect("write training log");

    rb().args([
        "--db",
        &db_path,
        "training",
        "add",
        "--title",
        "Utorak led",
        "--at",
        "2024-01-16T20:00",
        "--file",
        &log,
    ])
    .assert()
    .success()
    .stdout(contains("2024-01-16-utorak-led"))
    .stdout(contains("1 of 2 entries"));

    rb().args(["--db", &db_path, "training", "stats"])
        .assert()
        .success()
        .stdout(contains("Pts"));
}

#[test]
fn test_time_conversions() {
    rb().args(["time", "to-utc", "2024-06-15T18:30"])
        .assert()
        .success()
        .stdout(contains("2024-06-15T16:30:00Z"));

    rb().args(["time", "to-utc", "2024-03-31T02:30"])
        .assert()
        .success()
        .stdout(contains("2024-03-31T01:30:00Z"));

    rb().args(["time", "to-utc", "2024-02-30T10:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date/time"));

    rb().args(["time", "show", "2024-06-15T16:30:00Z", "--format", "time"])
        .assert()
        .success()
        .stdout(contains("18:30"));

    rb().args(["time", "to-utc", "--", "-262143-01-01T00:30"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Invalid date/time"));

    rb().args(["time", "show", "2024-06-15T16:30:00Z", "--pattern", "%Q"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Invalid display pattern"));
}

#[test]
fn test_slug_and_login_commands() {
    rb().args(["slug", "Црвена", "звезда"])
        .assert()
        .success()
        .stdout(contains("crvena-zvezda"));

    rb().args(["login", "Marko.P"])
        .assert()
        .success()
        .stdout(contains("marko.p@"));

    rb().args(["login", "x"])
        .assert()
        .failure()
        .stderr(contains("Invalid login"));
}

#[test]
fn test_login_batch_is_rate_limited() {
    let db_path = setup_test_db("login_rate_limit");
    let home = temp_home(
        "login_rate_limit",
        &format!(
            "database: {}\nauth_email_domain: members.hkclub.rs\nrate_limit_max: 2\nrate_limit_window_secs: 60\n",
            db_path
        ),
    );

    rb().env("HOME", &home)
        .args(["login", "marko.p", "ana_s"])
        .assert()
        .success()
        .stdout(contains("marko.p@members.hkclub.rs"))
        .stdout(contains("ana_s@members.hkclub.rs"));

    rb().env("HOME", &home)
        .args(["login", "marko.p", "ana_s", "ivan-k"])
        .assert()
        .failure()
        .stdout(contains("ana_s@members.hkclub.rs"))
        .stdout(contains("ivan-k").not())
        .stderr(contains("Rate limit reached for members.hkclub.rs"));
}
