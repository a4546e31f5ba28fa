//! Pairs two annotators' scores on the (team, qid) cells both of them scored.

use std::collections::BTreeMap;

use crate::model::{AnnotatorScores, Score};

/// One common cell: (first annotator's score, second annotator's score).
pub type ScorePair = (Score, Score);

/// Paired samples for agreement statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alignment {
    /// Every common cell, in team then qid order.
    pub all: Vec<ScorePair>,
    /// The same pairs grouped by question id, in qid order.
    pub by_qid: BTreeMap<String, Vec<ScorePair>>,
}

impl Alignment {
    /// `true` when the annotators share no scored cell.
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }
}

/// Split pairs into the two rating series.
pub fn split(pairs: &[ScorePair]) -> (Vec<Score>, Vec<Score>) {
    pairs.iter().copied().unzip()
}

/// Intersect two annotators on (team, qid).
///
/// Teams or questions only one side scored are left out.
pub fn align(first: &AnnotatorScores, second: &AnnotatorScores) -> Alignment {
    let mut alignment = Alignment::default();

    for (team, first_scores) in first.teams() {
        let Some(second_scores) = second.team(team) else {
            continue;
        };
        for (qid, a) in first_scores.iter() {
            if let Some(b) = second_scores.get(qid) {
                alignment.all.push((a, b));
                alignment
                    .by_qid
                    .entry(qid.to_string())
                    .or_default()
                    .push((a, b));
            }
        }
    }

    tracing::debug!(
        "aligned {} common cell(s) across {} question(s)",
        alignment.all.len(),
        alignment.by_qid.len()
    );
    alignment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TeamScores;
    use crate::model::Score::{Fail, Pass};

    fn annotator(teams: Vec<(&str, Vec<(&str, Score)>)>) -> AnnotatorScores {
        teams
            .into_iter()
            .map(|(team, scores)| {
                let team_scores: TeamScores = scores
                    .into_iter()
                    .map(|(qid, score)| (qid.to_string(), score))
                    .collect();
                (team.to_string(), team_scores)
            })
            .collect()
    }

    #[test]
    fn pairs_only_common_cells() {
        let first = annotator(vec![
            ("Team A", vec![("Q1", Pass), ("Q2", Fail), ("Q3", Pass)]),
            ("Team B", vec![("Q1", Fail)]),
            ("Team C", vec![("Q1", Pass)]),
        ]);
        let second = annotator(vec![
            ("Team A", vec![("Q1", Pass), ("Q2", Pass)]),
            ("Team B", vec![("Q1", Fail), ("Q2", Pass)]),
            ("Team D", vec![("Q1", Pass)]),
        ]);

        let alignment = align(&first, &second);
        assert_eq!(alignment.all, vec![(Pass, Pass), (Fail, Pass), (Fail, Fail)]);
        assert_eq!(alignment.by_qid["Q1"], vec![(Pass, Pass), (Fail, Fail)]);
        assert_eq!(alignment.by_qid["Q2"], vec![(Fail, Pass)]);
        assert!(!alignment.by_qid.contains_key("Q3"));
    }

    #[test]
    fn groups_partition_the_pairs() {
        let first = annotator(vec![
            ("Team A", vec![("Q1", Pass), ("Q2", Fail), ("Q3", Pass)]),
            ("Team B", vec![("Q1", Fail), ("Q2", Pass), ("Q3", Fail)]),
        ]);
        let second = annotator(vec![
            ("Team A", vec![("Q1", Fail), ("Q2", Fail), ("Q3", Pass)]),
            ("Team B", vec![("Q1", Fail), ("Q3", Pass)]),
        ]);

        let alignment = align(&first, &second);
        let grouped: usize = alignment.by_qid.values().map(Vec::len).sum();
        assert_eq!(grouped, alignment.len());
        assert_eq!(alignment.len(), 5);
    }

    #[test]
    fn qid_groups_are_sorted() {
        let first = annotator(vec![("Team A", vec![("Q3", Pass), ("Q1", Pass), ("Q2", Pass)])]);
        let alignment = align(&first, &first);
        let keys: Vec<&str> = alignment.by_qid.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Q1", "Q2", "Q3"]);
    }

    #[test]
    fn disjoint_teams_give_no_overlap() {
        let first = annotator(vec![("Team A", vec![("Q1", Pass)])]);
        let second = annotator(vec![("Team B", vec![("Q1", Pass)])]);
        let alignment = align(&first, &second);
        assert!(alignment.is_empty());
        assert!(alignment.by_qid.is_empty());
    }

    #[test]
    fn series_split() {
        let first = annotator(vec![("Team A", vec![("Q1", Pass), ("Q2", Fail)])]);
        let second = annotator(vec![("Team A", vec![("Q1", Fail), ("Q2", Fail)])]);
        let alignment = align(&first, &second);
        let (a, b) = split(&alignment.all);
        assert_eq!(a, vec![Pass, Fail]);
        assert_eq!(b, vec![Fail, Fail]);
    }
}
