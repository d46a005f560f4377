//! Leaderboard module - the top scores list
//!
//! Keeps at most [`LEADERBOARD_CAPACITY`] entries, highest score first.
//! Sorting is stable, so among equal scores the older entry stays ahead.

use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::LEADERBOARD_CAPACITY;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<ScoreEntry>", into = "Vec<ScoreEntry>"))]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a leaderboard from arbitrary entries, sorting and truncating them
    pub fn from_entries(entries: Vec<ScoreEntry>) -> Self {
        let mut board = Self { entries };
        board.normalize();
        board
    }

    /// Record a result stamped with the current time
    pub fn add(&mut self, name: impl Into<String>, score: u32) {
        self.add_at(name, score, Utc::now());
    }

    /// Record a result with an explicit timestamp
    pub fn add_at(&mut self, name: impl Into<String>, score: u32, timestamp: DateTime<Utc>) {
        self.entries.push(ScoreEntry {
            name: name.into(),
            score,
            timestamp,
        });
        self.normalize();
    }

    /// Whether `score` would make it onto the board right now
    pub fn qualifies(&self, score: u32) -> bool {
        self.entries.len() < LEADERBOARD_CAPACITY
            || self.entries.last().is_some_and(|last| score > last.score)
    }

    /// Entries, highest score first
    pub fn top(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(LEADERBOARD_CAPACITY);
    }
}

/// Puts each game on a leaderboard at most once
///
/// The host calls [`ScoreRecorder::record`] whenever a game may have ended
/// (game over, quitting) and [`ScoreRecorder::begin`] whenever a different
/// game takes over (restart, load). A restored game only counts if it scored
/// after it was restored; its earlier points belong to the game that was saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreRecorder {
    /// Score the current game had when it was taken over
    baseline: u32,
    done: bool,
}

impl ScoreRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a game that already has `score` points (0 when fresh)
    pub fn begin(&mut self, score: u32) {
        self.baseline = score;
        self.done = false;
    }

    /// Whether the current game has been considered for the board already
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Offer the current game's `score`. Returns true if `board` changed.
    ///
    /// Scores of 0, scores no higher than the baseline and repeated calls for
    /// the same game are ignored. A game that does not qualify still counts as
    /// recorded.
    pub fn record(&mut self, board: &mut Leaderboard, name: &str, score: u32) -> bool {
        if self.done || score == 0 || score <= self.baseline {
            return false;
        }
        self.done = true;
        if !board.qualifies(score) {
            return false;
        }
        board.add(name, score);
        true
    }
}

impl From<Vec<ScoreEntry>> for Leaderboard {
    fn from(entries: Vec<ScoreEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<Leaderboard> for Vec<ScoreEntry> {
    fn from(board: Leaderboard) -> Self {
        board.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_entries_sorted_descending() {
        let mut board = Leaderboard::new();
        board.add_at("ann", 300, at(1));
        board.add_at("bob", 900, at(2));
        board.add_at("cid", 500, at(3));

        let scores: Vec<u32> = board.top().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![900, 500, 300]);
    }

    #[test]
    fn test_truncates_to_ten() {
        let mut board = Leaderboard::new();
        for i in 0..15u32 {
            board.add_at(format!("p{i}"), i * 100, at(i as i64));
        }
        assert_eq!(board.len(), 10);
        assert_eq!(board.top()[0].score, 1400);
        assert_eq!(board.top()[9].score, 500);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut board = Leaderboard::new();
        board.add_at("first", 100, at(1));
        board.add_at("second", 100, at(2));
        board.add_at("third", 100, at(3));

        let names: Vec<&str> = board.top().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_tie_at_the_cutoff_is_dropped() {
        let mut board = Leaderboard::new();
        for i in 0..10 {
            board.add_at(format!("p{i}"), 100, at(i));
        }
        assert!(!board.qualifies(100));
        board.add_at("late", 100, at(99));
        assert!(board.top().iter().all(|e| e.name != "late"));
    }

    #[test]
    fn test_qualifies() {
        let mut board = Leaderboard::new();
        assert!(board.qualifies(0));
        for i in 1..=10 {
            board.add_at("x", i * 10, at(i as i64));
        }
        assert!(!board.qualifies(10));
        assert!(board.qualifies(11));
    }

    #[test]
    fn test_recorder_records_each_game_once() {
        let mut board = Leaderboard::new();
        let mut recorder = ScoreRecorder::new();

        assert!(recorder.record(&mut board, "ann", 300));
        assert!(!recorder.record(&mut board, "ann", 300));
        assert!(recorder.is_done());

        recorder.begin(0);
        assert!(!recorder.is_done());
        assert!(recorder.record(&mut board, "ann", 100));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_recorder_skips_zero() {
        let mut board = Leaderboard::new();
        let mut recorder = ScoreRecorder::new();
        assert!(!recorder.record(&mut board, "ann", 0));
        assert!(!recorder.is_done());
        assert!(board.is_empty());
    }

    #[test]
    fn test_recorder_ignores_points_from_before_a_load() {
        let mut board = Leaderboard::new();
        let mut recorder = ScoreRecorder::new();
        recorder.begin(500);
        assert!(!recorder.record(&mut board, "ann", 500));
        assert!(recorder.record(&mut board, "ann", 600));
        assert_eq!(board.top()[0].score, 600);
    }

    #[test]
    fn test_recorder_marks_non_qualifying_games_done() {
        let mut board = Leaderboard::new();
        for i in 1..=10 {
            board.add_at("x", i * 1000, at(i as i64));
        }
        let mut recorder = ScoreRecorder::new();
        assert!(!recorder.record(&mut board, "ann", 10));
        assert!(recorder.is_done());
        assert_eq!(board.len(), 10);
    }

    #[test]
    fn test_from_entries_normalizes() {
        let entries = (0..12)
            .map(|i| ScoreEntry {
                name: format!("p{i}"),
                score: i,
                timestamp: at(i as i64),
            })
            .collect();
        let board = Leaderboard::from_entries(entries);
        assert_eq!(board.len(), 10);
        assert_eq!(board.top()[0].name, "p11");
    }
}
