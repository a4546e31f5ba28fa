//! Agreement and descriptive statistics.
//!
//! Cohen's kappa runs on aligned pairs. The descriptive aggregates run on
//! each annotator's own scores, independent of what the other annotator
//! covered. Empty inputs give 0.0 rather than dividing by zero, except for
//! kappa, whose undefined cases come back as NaN.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::align::{split, ScorePair};
use crate::error::StatsError;
use crate::model::{AnnotatorScores, Score};

/// Cohen's kappa for two rating series.
///
/// kappa = 1 - (1 - p_o) / (1 - p_e)
///
/// where p_o is the observed agreement and p_e the agreement expected from
/// each rater's label frequencies, over the labels seen in either series.
/// When p_e is 1 (both raters used one and the same label throughout) the
/// coefficient is undefined and NaN is returned. Empty series also give NaN.
pub fn cohen_kappa<T: Ord + Copy>(first: &[T], second: &[T]) -> Result<f64, StatsError> {
    if first.len() != second.len() {
        return Err(StatsError::LengthMismatch {
            first: first.len(),
            second: second.len(),
        });
    }
    let n = first.len();
    if n == 0 {
        return Ok(f64::NAN);
    }

    // Per label: (count in first, count in second).
    let mut marginals: BTreeMap<T, (usize, usize)> = BTreeMap::new();
    let mut agreements = 0usize;
    for (a, b) in first.iter().zip(second) {
        marginals.entry(*a).or_default().0 += 1;
        marginals.entry(*b).or_default().1 += 1;
        if a == b {
            agreements += 1;
        }
    }

    let n = n as f64;
    let observed = agreements as f64 / n;
    let expected = marginals
        .values()
        .map(|&(in_first, in_second)| (in_first as f64 / n) * (in_second as f64 / n))
        .sum::<f64>();

    Ok(1.0 - (1.0 - observed) / (1.0 - expected))
}

/// Cohen's kappa over aligned score pairs.
pub fn pair_kappa(pairs: &[ScorePair]) -> f64 {
    let (first, second) = split(pairs);
    // Unzipped series always have equal length.
    cohen_kappa(&first, &second).unwrap_or(f64::NAN)
}

/// Mean score of a single project (team).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMean {
    pub team: String,
    /// Mean of the recorded scores, 0.0 when nothing was recorded.
    pub mean: f64,
    /// Number of recorded scores.
    pub count: usize,
}

/// Pass rate of a single category (question) across teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRate {
    pub qid: String,
    /// Percentage of contributing teams scored 1, 0.0 with no contributors.
    pub pass_pct: f64,
    pub passed: usize,
    /// Teams with a recorded score for this question.
    pub count: usize,
}

/// Flat statistics over every recorded cell.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobalStats {
    pub mean: f64,
    pub pass_pct: f64,
    pub passed: usize,
    pub count: usize,
}

impl GlobalStats {
    fn from_scores(scores: impl IntoIterator<Item = Score>) -> Self {
        let (passed, count) = scores
            .into_iter()
            .fold((0usize, 0usize), |(passed, count), s| {
                (passed + usize::from(s.is_pass()), count + 1)
            });
        let mean = ratio(passed, count);
        Self {
            mean,
            pass_pct: mean * 100.0,
            passed,
            count,
        }
    }
}

/// Means of each annotator restricted to the common cells.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CommonMeans {
    pub first: f64,
    pub second: f64,
    pub count: usize,
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Per-project mean scores, in team order.
pub fn project_means(scores: &AnnotatorScores) -> Vec<ProjectMean> {
    scores
        .teams()
        .map(|(team, team_scores)| ProjectMean {
            team: team.clone(),
            mean: ratio(team_scores.passed(), team_scores.len()),
            count: team_scores.len(),
        })
        .collect()
}

/// Unweighted mean of per-project means: every scored project counts once
/// however many categories it has. Projects with no recorded score are left
/// out; with none left the result is 0.0.
pub fn cross_project_mean(means: &[ProjectMean]) -> f64 {
    let scored: Vec<f64> = means.iter().filter(|m| m.count > 0).map(|m| m.mean).collect();
    if scored.is_empty() {
        0.0
    } else {
        scored.iter().sum::<f64>() / scored.len() as f64
    }
}

/// Per-category pass percentages, in qid order.
pub fn category_pass_rates(scores: &AnnotatorScores) -> Vec<CategoryRate> {
    let mut tallies: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for (_, team_scores) in scores.teams() {
        for (qid, score) in team_scores.iter() {
            let tally = tallies.entry(qid).or_default();
            tally.0 += usize::from(score.is_pass());
            tally.1 += 1;
        }
    }

    tallies
        .into_iter()
        .map(|(qid, (passed, count))| CategoryRate {
            qid: qid.to_string(),
            pass_pct: ratio(passed, count) * 100.0,
            passed,
            count,
        })
        .collect()
}

/// Flat mean and pass percentage over one annotator's recorded cells.
pub fn global_stats(scores: &AnnotatorScores) -> GlobalStats {
    GlobalStats::from_scores(scores.all_scores())
}

/// Flat statistics over both annotators' recorded cells taken together.
pub fn pooled_stats(first: &AnnotatorScores, second: &AnnotatorScores) -> GlobalStats {
    GlobalStats::from_scores(first.all_scores().chain(second.all_scores()))
}

/// Mean of each side of the aligned pairs.
pub fn common_cell_means(pairs: &[ScorePair]) -> CommonMeans {
    let count = pairs.len();
    let first = pairs.iter().filter(|(a, _)| a.is_pass()).count();
    let second = pairs.iter().filter(|(_, b)| b.is_pass()).count();
    CommonMeans {
        first: ratio(first, count),
        second: ratio(second, count),
        count,
    }
}
