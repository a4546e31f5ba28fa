//! Agreement report types.
//!
//! [`AgreementReport::compute`] runs the aligner and every statistic over
//! two annotators; the renderers in `iaa-report` only format the result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::align::{align, Alignment};
use crate::model::Annotator;
use crate::statistics::{
    category_pass_rates, common_cell_means, cross_project_mean, global_stats, pair_kappa,
    pooled_stats, project_means, CategoryRate, CommonMeans, GlobalStats, ProjectMean,
};

/// A complete agreement report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgreementReport {
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    pub first: AnnotatorSummary,
    pub second: AnnotatorSummary,
    /// Kappa statistics; `None` when the annotators share no scored cell.
    pub agreement: Option<AgreementStats>,
    /// Means over the common cells only.
    pub common: CommonMeans,
    /// Pass statistics over both annotators' recorded cells together.
    pub pooled: GlobalStats,
}

/// Descriptive statistics for one annotator's own scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatorSummary {
    pub label: String,
    pub source: String,
    pub teams: usize,
    pub projects: Vec<ProjectMean>,
    pub cross_project_mean: f64,
    pub categories: Vec<CategoryRate>,
    pub global: GlobalStats,
}

/// Cohen's kappa for one set of pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KappaResult {
    /// `None` when kappa is undefined for these pairs (constant identical
    /// ratings).
    pub kappa: Option<f64>,
    /// Number of pairs.
    pub pairs: usize,
}

impl KappaResult {
    fn from_value(kappa: f64, pairs: usize) -> Self {
        Self {
            kappa: kappa.is_finite().then_some(kappa),
            pairs,
        }
    }

    pub fn is_defined(&self) -> bool {
        self.kappa.is_some()
    }
}

/// Kappa for one question across teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionKappa {
    pub qid: String,
    #[serde(flatten)]
    pub result: KappaResult,
}

/// Agreement over the common cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgreementStats {
    pub overall: KappaResult,
    /// One entry per question, in qid order.
    pub per_question: Vec<QuestionKappa>,
}

impl AgreementStats {
    /// Kappa over all pairs and per question group, or `None` without pairs.
    pub fn from_alignment(alignment: &Alignment) -> Option<Self> {
        if alignment.is_empty() {
            return None;
        }
        let overall = KappaResult::from_value(pair_kappa(&alignment.all), alignment.len());
        let per_question = alignment
            .by_qid
            .iter()
            .map(|(qid, pairs)| QuestionKappa {
                qid: qid.clone(),
                result: KappaResult::from_value(pair_kappa(pairs), pairs.len()),
            })
            .collect();
        Some(Self {
            overall,
            per_question,
        })
    }
}

impl AnnotatorSummary {
    pub fn from_annotator(annotator: &Annotator) -> Self {
        let projects = project_means(&annotator.scores);
        Self {
            label: annotator.label.clone(),
            source: annotator.source.clone(),
            teams: annotator.scores.team_count(),
            cross_project_mean: cross_project_mean(&projects),
            projects,
            categories: category_pass_rates(&annotator.scores),
            global: global_stats(&annotator.scores),
        }
    }

    pub fn project(&self, team: &str) -> Option<&ProjectMean> {
        self.projects.iter().find(|p| p.team == team)
    }

    pub fn category(&self, qid: &str) -> Option<&CategoryRate> {
        self.categories.iter().find(|c| c.qid == qid)
    }
}

impl AgreementReport {
    /// Align two annotators and compute every statistic.
    pub fn compute(first: &Annotator, second: &Annotator) -> Self {
        let alignment = align(&first.scores, &second.scores);
        let agreement = AgreementStats::from_alignment(&alignment);
        if agreement.is_none() {
            tracing::info!(
                "no common scored cells between {} and {}",
                first.label,
                second.label
            );
        }

        Self {
            created_at: Utc::now(),
            first: AnnotatorSummary::from_annotator(first),
            second: AnnotatorSummary::from_annotator(second),
            agreement,
            common: common_cell_means(&alignment.all),
            pooled: pooled_stats(&first.scores, &second.scores),
        }
    }

    /// Team names scored by either annotator, sorted.
    pub fn team_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .first
            .projects
            .iter()
            .chain(&self.second.projects)
            .map(|p| p.team.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Question ids scored by either annotator, sorted.
    pub fn question_ids(&self) -> Vec<&str> {
        let mut qids: Vec<&str> = self
            .first
            .categories
            .iter()
            .chain(&self.second.categories)
            .map(|c| c.qid.as_str())
            .collect();
        qids.sort_unstable();
        qids.dedup();
        qids
    }
}
