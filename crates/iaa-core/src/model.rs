//! Core data model types for iaa.
//!
//! An annotator's workbook becomes an [`AnnotatorScores`]: team name to
//! [`TeamScores`], and each team's question id to a binary [`Score`]. Both
//! maps are ordered so every report iterates teams and questions in a
//! deterministic order.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A binary pass/fail judgement for one (annotator, team, question).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Score {
    Fail,
    Pass,
}

impl Score {
    /// Map an integer onto the score domain. Anything but 0 or 1 is rejected.
    pub fn from_int(value: i64) -> Option<Self> {
        match value {
            0 => Some(Score::Fail),
            1 => Some(Score::Pass),
            _ => None,
        }
    }

    /// The score as 0 or 1.
    pub fn value(self) -> u8 {
        match self {
            Score::Fail => 0,
            Score::Pass => 1,
        }
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.value())
    }

    pub fn is_pass(self) -> bool {
        self == Score::Pass
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.value()
    }
}

impl TryFrom<u8> for Score {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Score::from_int(i64::from(value)).ok_or_else(|| format!("score out of range: {value}"))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Scores one annotator gave a single team, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamScores {
    scores: BTreeMap<String, Score>,
}

impl TeamScores {
    pub fn new(scores: BTreeMap<String, Score>) -> Self {
        Self { scores }
    }

    pub fn get(&self, qid: &str) -> Option<Score> {
        self.scores.get(qid).copied()
    }

    pub fn contains(&self, qid: &str) -> bool {
        self.scores.contains_key(qid)
    }

    /// Iterate `(qid, score)` in question id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Score)> {
        self.scores.iter().map(|(qid, score)| (qid.as_str(), *score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Number of questions scored 1.
    pub fn passed(&self) -> usize {
        self.scores.values().filter(|s| s.is_pass()).count()
    }
}

/// Later entries for the same qid replace earlier ones.
impl FromIterator<(String, Score)> for TeamScores {
    fn from_iter<I: IntoIterator<Item = (String, Score)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// Every team one annotator scored, keyed by team (sheet) name.
///
/// Teams whose sheets had no evaluated rows are present with empty
/// [`TeamScores`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatorScores {
    teams: BTreeMap<String, TeamScores>,
}

impl AnnotatorScores {
    pub fn new(teams: BTreeMap<String, TeamScores>) -> Self {
        Self { teams }
    }

    pub fn team(&self, name: &str) -> Option<&TeamScores> {
        self.teams.get(name)
    }

    /// Iterate teams in name order.
    pub fn teams(&self) -> btree_map::Iter<'_, String, TeamScores> {
        self.teams.iter()
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Total number of recorded (team, qid) scores.
    pub fn scored_cells(&self) -> usize {
        self.teams.values().map(TeamScores::len).sum()
    }

    /// Every recorded score, in team then qid order.
    pub fn all_scores(&self) -> impl Iterator<Item = Score> + '_ {
        self.teams
            .values()
            .flat_map(|team| team.iter().map(|(_, score)| score))
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl FromIterator<(String, TeamScores)> for AnnotatorScores {
    fn from_iter<I: IntoIterator<Item = (String, TeamScores)>>(iter: I) -> Self {
        Self {
            teams: iter.into_iter().collect(),
        }
    }
}

/// One annotator's scores along with how to refer to them in reports.
#[derive(Debug, Clone)]
pub struct Annotator {
    /// Display label (e.g. the annotator's initials).
    pub label: String,
    /// Where the scores were read from.
    pub source: String,
    pub scores: AnnotatorScores,
}

impl Annotator {
    pub fn new(
        label: impl Into<String>,
        source: impl Into<String>,
        scores: AnnotatorScores,
    ) -> Self {
        Self {
            label: label.into(),
            source: source.into(),
            scores,
        }
    }
}
