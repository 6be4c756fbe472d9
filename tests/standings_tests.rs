use rinkboard::core::standings::{
    bracket_progress, compute_group_standings, compute_standings, tournament_standings,
};
use rinkboard::export::standings_rows;
use rinkboard::models::{Match, MatchStage, Team};

fn teams() -> Vec<Team> {
    vec![
        Team::home_club(1, "Vojvodina"),
        Team::new(2, "Partizan"),
        Team::new(3, "Crvena zvezda"),
    ]
}

#[test]
fn test_win_and_loss_counted_for_both_sides() {
    let rows = compute_standings(&teams(), &[Match::completed(1, 1, 2, 3, 1)]);

    let voj = rows.iter().find(|r| r.team_id == 1).unwrap();
    assert_eq!((voj.played, voj.won, voj.drawn, voj.lost), (1, 1, 0, 0));
    assert_eq!((voj.goals_for, voj.goals_against), (3, 1));
    assert_eq!(voj.points(), 3);
    assert!(voj.is_home_club);

    let par = rows.iter().find(|r| r.team_id == 2).unwrap();
    assert_eq!((par.played, par.won, par.drawn, par.lost), (1, 0, 0, 1));
    assert_eq!(par.goal_difference(), -2);
    assert_eq!(par.points(), 0);
}

#[test]
fn test_draw_gives_one_point_each_even_with_shootout_winner() {
    let m = Match::completed(1, 1, 2, 2, 2).with_shootout_winner(2);
    let rows = compute_standings(&teams(), &[m]);

    for id in [1, 2] {
        let r = rows.iter().find(|r| r.team_id == id).unwrap();
        assert_eq!(r.drawn, 1);
        assert_eq!(r.points(), 1);
    }
}

#[test]
fn test_scheduled_matches_are_ignored() {
    let rows = compute_standings(&teams(), &[Match::scheduled(1, 1, 2)]);
    assert!(rows.iter().all(|r| r.played == 0 && r.points() == 0));
}

#[test]
fn test_unknown_team_match_is_skipped() {
    let rows = compute_standings(&teams(), &[Match::completed(1, 1, 99, 5, 0)]);
    assert!(rows.iter().all(|r| r.played == 0));
}

#[test]
fn test_empty_team_list_gives_empty_standings() {
    assert!(compute_standings(&[], &[Match::completed(1, 1, 2, 1, 0)]).is_empty());
}

#[test]
fn test_ordering_points_then_goal_difference_then_goals_for() {
    let teams = vec![
        Team::new(1, "A"),
        Team::new(2, "B"),
        Team::new(3, "C"),
        Team::new(4, "D"),
    ];
    let matches = vec![
        // B and C both win once; C by more
        Match::completed(1, 2, 1, 1, 0),
        Match::completed(2, 3, 4, 5, 0),
        // D draws A high, A draws nothing else
        Match::completed(3, 4, 1, 3, 3),
    ];

    let rows = compute_standings(&teams, &matches);
    let order: Vec<i64> = rows.iter().map(|r| r.team_id).collect();

    // C: 3 pts +5, B: 3 pts +1, A: 1 pt -1 (3 GF), D: 1 pt -5
    assert_eq!(order, vec![3, 2, 1, 4]);
}

#[test]
fn test_full_tie_keeps_input_order() {
    let teams = vec![Team::new(7, "Seven"), Team::new(3, "Three")];
    let rows = compute_standings(&teams, &[Match::completed(1, 7, 3, 1, 1)]);
    assert_eq!(rows[0].team_id, 7);
    assert_eq!(rows[1].team_id, 3);

    let reversed = vec![Team::new(3, "Three"), Team::new(7, "Seven")];
    let rows = compute_standings(&reversed, &[Match::completed(1, 7, 3, 1, 1)]);
    assert_eq!(rows[0].team_id, 3);
}

#[test]
fn test_group_standings_only_use_that_group() {
    let matches = vec![
        Match::completed(1, 1, 2, 1, 0).in_group("A"),
        Match::completed(2, 3, 1, 4, 0).in_group("B"),
        Match::completed(3, 1, 2, 9, 0).with_stage(MatchStage::Playoff),
    ];

    let a = compute_group_standings(&teams(), &matches, "A");
    assert_eq!(a.len(), 2);
    assert_eq!(a[0].team_id, 1);
    assert_eq!(a[0].goals_for, 1);
}

#[test]
fn test_tournament_standings_one_table_per_group() {
    let matches = vec![
        Match::completed(1, 1, 2, 1, 0).in_group("A"),
        Match::completed(2, 3, 1, 4, 0).in_group("B"),
    ];

    let groups = tournament_standings(&teams(), &matches, None);
    let names: Vec<Option<String>> = groups.iter().map(|g| g.group.clone()).collect();
    assert_eq!(names, vec![Some("A".to_string()), Some("B".to_string())]);

    let rows = standings_rows(&groups);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].group, "A");
    assert_eq!(rows[0].position, 1);
    assert_eq!(rows[0].points, 3);
}

#[test]
fn test_tournament_without_groups_is_one_league_table() {
    let matches = vec![Match::completed(1, 1, 2, 1, 0), Match::completed(2, 2, 3, 2, 0)];
    let groups = tournament_standings(&teams(), &matches, None);
    assert_eq!(groups.len(), 1);
    assert!(groups[0].group.is_none());
    assert_eq!(groups[0].rows.len(), 3);
}

#[test]
fn test_serialized_row_carries_derived_values() {
    let rows = compute_standings(&teams(), &[Match::completed(1, 1, 2, 3, 1)]);
    let json = serde_json::to_value(&rows[0]).unwrap();
    assert_eq!(json["points"], 3);
    assert_eq!(json["goal_difference"], 2);
}

#[test]
fn test_bracket_winner_and_shootout() {
    let matches = vec![
        Match::completed(10, 1, 2, 2, 2)
            .with_stage(MatchStage::Playoff)
            .with_shootout_winner(2),
        Match::completed(11, 3, 1, 1, 4).with_stage(MatchStage::Playoff),
        Match::scheduled(12, 2, 3).with_stage(MatchStage::Playoff),
        Match::completed(13, 1, 3, 5, 0).in_group("A"),
    ];

    let entries = bracket_progress(&teams(), &matches);
    assert_eq!(entries.len(), 3);

    let so = entries.iter().find(|e| e.match_id == 10).unwrap();
    assert_eq!(so.winner_id, Some(2));
    assert!(so.decided_by_shootout);
    assert_eq!(so.winner_name(), Some("Partizan"));

    let regular = entries.iter().find(|e| e.match_id == 11).unwrap();
    assert_eq!(regular.winner_id, Some(1));
    assert!(!regular.decided_by_shootout);

    let open = entries.iter().find(|e| e.match_id == 12).unwrap();
    assert_eq!(open.winner_id, None);
}

#[test]
fn test_bracket_ordered_by_start_then_undated() {
    use chrono::{TimeZone, Utc};

    let early = Utc.with_ymd_and_hms(2024, 3, 1, 17, 0, 0).unwrap();
    let late = Utc.with_ymd_and_hms(2024, 3, 2, 17, 0, 0).unwrap();

    let matches = vec![
        Match::scheduled(1, 1, 2).with_stage(MatchStage::Playoff),
        Match::scheduled(2, 1, 3).with_stage(MatchStage::Playoff).with_start(late),
        Match::scheduled(3, 2, 3).with_stage(MatchStage::Playoff).with_start(early),
    ];

    let ids: Vec<i64> = bracket_progress(&teams(), &matches)
        .iter()
        .map(|e| e.match_id)
        .collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[test]
fn test_six_points_first_then_tied_threes_by_goal_difference() {
    let teams = vec![Team::new(1, "A"), Team::new(2, "B"), Team::new(3, "C")];
    let matches = vec![
        Match::completed(1, 3, 1, 2, 1),
        Match::completed(2, 3, 2, 1, 0),
        Match::completed(3, 1, 2, 4, 0),
        Match::completed(4, 2, 1, 1, 0),
    ];

    let rows = compute_standings(&teams, &matches);
    let pts: Vec<i64> = rows.iter().map(|r| r.points()).collect();
    let ids: Vec<i64> = rows.iter().map(|r| r.team_id).collect();

    assert_eq!(pts, vec![6, 3, 3]);
    // A: +4 -1 -1 = +2, B: -1 -4 +1 = -4
    assert_eq!(ids, vec![3, 1, 2]);
}
