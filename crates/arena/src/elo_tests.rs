use super::*;

fn games(results: &[GameResult]) -> MatchResult {
    let mut m = MatchResult::new();
    for (i, &result) in results.iter().enumerate() {
        m.record(GameRecord {
            engine1_red: i % 2 == 0,
            result,
            turns: 40,
        });
    }
    m
}

#[test]
fn test_equal_ratings_expect_half() {
    let table = RatingTable::new();
    let expected = table.expected_score("easy", "hard");
    assert!((expected - 0.5).abs() < 0.001);
}

#[test]
fn test_single_win_moves_sixteen_points() {
    let mut table = RatingTable::new();
    let change = table.update_game("hard", "easy", GameResult::Win);
    assert!((change - 16.0).abs() < 1e-9);
    assert!((table.rating("hard") - 1516.0).abs() < 1e-9);
    assert!((table.rating("easy") - 1484.0).abs() < 1e-9);
}

#[test]
fn test_match_update_is_zero_sum() {
    let mut table = RatingTable::new();
    let result = games(&[GameResult::Win, GameResult::Win, GameResult::Draw, GameResult::Loss]);
    table.update_match("medium", "easy", &result);

    let total = table.rating("medium") + table.rating("easy");
    assert!((total - 2.0 * DEFAULT_ELO).abs() < 1e-9);
    assert!(table.rating("medium") > DEFAULT_ELO);
    assert_eq!(table.games_played["easy"], 4);

    let record = &table.history[0];
    assert_eq!((record.wins, record.losses, record.draws), (2, 1, 1));
    assert!((table.rating("medium") - DEFAULT_ELO - record.elo_change).abs() < 1e-9);
}

#[test]
fn test_per_game_updates_shrink_as_gap_grows() {
    let mut table = RatingTable::new();
    let first = table.update_game("hard", "random", GameResult::Win);
    let second = table.update_game("hard", "random", GameResult::Win);
    assert!(second < first);
}

#[test]
fn test_leaderboard_order() {
    let mut table = RatingTable::new();
    table.update_game("hard", "easy", GameResult::Win);
    table.update_game("medium", "easy", GameResult::Win);
    let board = table.leaderboard();
    assert_eq!(board.last().unwrap().0, "easy");
    assert!(table.render_leaderboard().contains("hard"));
}

#[test]
fn test_match_score() {
    let result = games(&[GameResult::Win, GameResult::Draw]);
    assert!((result.score() - 0.75).abs() < 1e-9);
    assert_eq!(MatchResult::new().score(), 0.5);
}

#[test]
fn test_self_play_leaves_rating_alone() {
    let mut table = RatingTable::new();
    let result = games(&[GameResult::Win, GameResult::Loss, GameResult::Win]);
    table.update_match("hard", "hard", &result);

    assert_eq!(table.rating("hard"), DEFAULT_ELO);
    assert_eq!(table.games_played["hard"], 3);
    assert_eq!(table.history[0].elo_change, 0.0);
    assert_eq!(table.leaderboard().len(), 1);
}
