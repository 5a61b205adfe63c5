use super::*;

#[test]
fn test_parse_names() {
    assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
    assert_eq!(" Medium ".parse::<Difficulty>(), Ok(Difficulty::Medium));
    assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
    assert_eq!(
        "expert".parse::<Difficulty>(),
        Err(UnknownDifficulty("expert".to_string()))
    );
}

#[test]
fn test_display_round_trips() {
    for d in Difficulty::ALL {
        assert_eq!(d.to_string().parse::<Difficulty>(), Ok(d));
    }
}

#[test]
fn test_serde_lowercase() {
    assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
    let d: Difficulty = serde_json::from_str("\"easy\"").unwrap();
    assert_eq!(d, Difficulty::Easy);
}

#[test]
fn test_profiles_get_stronger() {
    assert!(Difficulty::Easy.depth() < Difficulty::Medium.depth());
    assert!(Difficulty::Medium.depth() < Difficulty::Hard.depth());
    assert!(Difficulty::Easy.eval_noise() > 0);
    assert_eq!(Difficulty::Medium.eval_noise(), 0);
    assert!(Difficulty::Hard.root_heuristics());
    assert!(!Difficulty::Medium.root_heuristics());
}
