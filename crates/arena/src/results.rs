//! Arena results storage and reporting

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::elo::MatchResult;
use crate::error::{read, write, ArenaResult};

/// Everything one arena run produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaResults {
    pub name: String,
    pub participants: Vec<String>,
    pub matches: Vec<MatchEntry>,
    pub games_per_match: u32,
    pub max_turns: u32,
    pub seed: Option<u64>,
}

/// A single match entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

impl ArenaResults {
    pub fn new(name: &str, participants: Vec<String>, games_per_match: u32, max_turns: u32) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            games_per_match,
            max_turns,
            seed: None,
        }
    }

    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    pub fn save(&self, path: &Path) -> ArenaResult<()> {
        write(path, &serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> ArenaResult<Self> {
        Ok(serde_json::from_str(&read(path)?)?)
    }

    /// Win/loss/draw table for every match played
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Arena: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {} games/match, {} turn cap\n\n",
            self.games_per_match, self.max_turns
        ));

        report.push_str(&format!(
            "{:<16} vs {:<16} {:>5}-{:<5}-{:<5} {:>6}\n",
            "Engine 1", "Engine 2", "W", "L", "D", "Score"
        ));
        report.push_str(&"-".repeat(64));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<16} vs {:<16} {:>5}-{:<5}-{:<5} {:>5.1}%\n",
                entry.engine1,
                entry.engine2,
                entry.result.wins,
                entry.result.losses,
                entry.result.draws,
                entry.result.score() * 100.0
            ));
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elo::{GameRecord, GameResult};

    fn sample() -> ArenaResults {
        let mut result = MatchResult::new();
        result.record(GameRecord {
            engine1_red: true,
            result: GameResult::Win,
            turns: 31,
        });
        let mut results = ArenaResults::new("ladder", vec!["hard".into(), "easy".into()], 1, 200);
        results.add_match("hard", "easy", result);
        results
    }

    #[test]
    fn test_report_lists_matches() {
        let report = sample().generate_report();
        assert!(report.contains("=== Arena: ladder ==="));
        assert!(report.contains("hard"));
        assert!(report.contains("100.0%"));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("arena_results_{}.json", std::process::id()));
        let results = sample();
        results.save(&path).unwrap();
        let loaded = ArenaResults::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, results);
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let path = Path::new("/nonexistent/arena/results.json");
        let err = ArenaResults::load(path).unwrap_err();
        assert!(err.to_string().contains("results.json"));
    }
}
