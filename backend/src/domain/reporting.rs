//! Report aggregation over a survey's responses.
//!
//! Pure in-memory map/reduce: per-question means (overall and grouped by
//! relationship), top-ranked strengths and opportunities by mean rank,
//! relationship head counts and the free-text answers. A question or
//! relationship group with zero observations is absent from the output
//! rather than reported as zero.

use crate::domain::catalog;
use crate::domain::entities::SurveyResponse;
use crate::domain::value_objects::Relationship;
use serde::Serialize;
use std::collections::BTreeMap;

const TOP_RANKINGS: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct QuestionStat {
    pub number: u8,
    pub text: &'static str,
    pub average: f64,
    pub response_count: usize,
    /// Mean score per relationship category; categories nobody answered
    /// from are absent.
    pub by_relationship: BTreeMap<Relationship, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingStat {
    pub label: String,
    pub mean_rank: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportStats {
    pub response_count: usize,
    pub participant_count: usize,
    pub counts_by_relationship: BTreeMap<Relationship, usize>,
    /// Mean over every per-question score; `None` when nothing was scored.
    pub overall_average: Option<f64>,
    pub question_stats: Vec<QuestionStat>,
    pub top_strengths: Vec<RankingStat>,
    pub top_opportunities: Vec<RankingStat>,
    pub continue_responses: Vec<String>,
    pub stop_responses: Vec<String>,
    pub start_responses: Vec<String>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn mean(values: &[i32]) -> f64 {
    values.iter().sum::<i32>() as f64 / values.len() as f64
}

/// Mean rank per distinct label, sorted descending by mean (stable on
/// ties), truncated to the top 10.
fn top_rankings<'a>(
    rankings: impl Iterator<Item = &'a crate::domain::entities::Ranking>,
) -> Vec<RankingStat> {
    // First-seen insertion order keeps tie ordering stable.
    let mut ranks: Vec<(String, Vec<i32>)> = Vec::new();
    for ranking in rankings {
        match ranks.iter_mut().find(|(label, _)| *label == ranking.label) {
            Some((_, collected)) => collected.push(ranking.rank),
            None => ranks.push((ranking.label.clone(), vec![ranking.rank])),
        }
    }

    let mut stats: Vec<RankingStat> = ranks
        .into_iter()
        .map(|(label, collected)| RankingStat {
            label,
            mean_rank: round2(mean(&collected)),
            count: collected.len(),
        })
        .collect();
    stats.sort_by(|a, b| b.mean_rank.partial_cmp(&a.mean_rank).unwrap_or(std::cmp::Ordering::Equal));
    stats.truncate(TOP_RANKINGS);
    stats
}

pub fn aggregate(responses: &[SurveyResponse]) -> ReportStats {
    let mut question_stats = Vec::new();
    let mut all_scores: Vec<i32> = Vec::new();

    for number in catalog::question_numbers() {
        let mut scores: Vec<i32> = Vec::new();
        let mut by_relationship: BTreeMap<Relationship, Vec<i32>> = BTreeMap::new();

        for response in responses {
            let Some(answer) = response.answers.get(&number) else {
                continue;
            };
            let score = answer.score();
            scores.push(score);
            let group = if response.is_self_assessment {
                Relationship::SelfAssessment
            } else {
                response.relationship
            };
            by_relationship.entry(group).or_default().push(score);
        }

        if scores.is_empty() {
            continue;
        }
        all_scores.extend(&scores);
        question_stats.push(QuestionStat {
            number,
            // question_numbers() only yields catalogued numbers
            text: catalog::question_text(number).unwrap_or(""),
            average: round2(mean(&scores)),
            response_count: scores.len(),
            by_relationship: by_relationship
                .into_iter()
                .map(|(rel, scores)| (rel, round2(mean(&scores))))
                .collect(),
        });
    }

    let mut counts_by_relationship: BTreeMap<Relationship, usize> = BTreeMap::new();
    for response in responses {
        let group = if response.is_self_assessment {
            Relationship::SelfAssessment
        } else {
            response.relationship
        };
        *counts_by_relationship.entry(group).or_default() += 1;
    }

    let participant_count = responses.iter().filter(|r| !r.is_self_assessment).count();
    let overall_average = if all_scores.is_empty() {
        None
    } else {
        Some(round2(mean(&all_scores)))
    };

    let collect_text = |pick: fn(&SurveyResponse) -> &str| -> Vec<String> {
        responses
            .iter()
            .map(pick)
            .filter(|text| !text.trim().is_empty())
            .map(str::to_owned)
            .collect()
    };

    ReportStats {
        response_count: responses.len(),
        participant_count,
        counts_by_relationship,
        overall_average,
        question_stats,
        top_strengths: top_rankings(responses.iter().flat_map(|r| r.strength_rankings.iter())),
        top_opportunities: top_rankings(
            responses.iter().flat_map(|r| r.opportunity_rankings.iter()),
        ),
        continue_responses: collect_text(|r| &r.continue_doing),
        stop_responses: collect_text(|r| &r.stop_doing),
        start_responses: collect_text(|r| &r.start_doing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Ranking, SurveyResponse};
    use crate::domain::value_objects::LikertScale;
    use uuid::Uuid;

    fn response(
        relationship: Relationship,
        level: LikertScale,
        strengths: Vec<(&str, i32)>,
    ) -> SurveyResponse {
        let invitation = (relationship != Relationship::SelfAssessment).then(Uuid::new_v4);
        SurveyResponse::new(
            Uuid::new_v4(),
            invitation,
            relationship,
            catalog::question_numbers().map(|n| (n, level)).collect(),
            strengths
                .into_iter()
                .map(|(label, rank)| Ranking { label: label.into(), rank })
                .collect(),
            vec![],
            "Keep listening".into(),
            String::new(),
            String::new(),
        )
    }

    #[test]
    fn empty_response_set_yields_absent_statistics() {
        let stats = aggregate(&[]);
        assert_eq!(stats.response_count, 0);
        assert_eq!(stats.overall_average, None);
        assert!(stats.question_stats.is_empty());
        assert!(stats.counts_by_relationship.is_empty());
        assert!(stats.top_strengths.is_empty());
    }

    #[test]
    fn all_meets_answers_average_exactly_four() {
        let responses = vec![
            response(Relationship::Peer, LikertScale::Meets, vec![]),
            response(Relationship::Teacher, LikertScale::Meets, vec![]),
        ];
        let stats = aggregate(&responses);
        assert_eq!(stats.overall_average, Some(4.0));
        assert_eq!(stats.question_stats.len(), 54);
        for question in &stats.question_stats {
            assert_eq!(question.average, 4.0);
            assert_eq!(question.response_count, 2);
        }
    }

    #[test]
    fn relationship_groups_without_observations_are_absent() {
        let responses = vec![response(Relationship::Peer, LikertScale::Above, vec![])];
        let stats = aggregate(&responses);
        let question = &stats.question_stats[0];
        assert_eq!(question.by_relationship.get(&Relationship::Peer), Some(&6.0));
        assert!(!question.by_relationship.contains_key(&Relationship::Student));
        assert!(!question.by_relationship.contains_key(&Relationship::SelfAssessment));
    }

    #[test]
    fn self_assessment_scores_group_under_self() {
        let responses = vec![
            response(Relationship::SelfAssessment, LikertScale::Meets, vec![]),
            response(Relationship::Peer, LikertScale::SignificantlyAbove, vec![]),
        ];
        let stats = aggregate(&responses);
        let question = &stats.question_stats[0];
        assert_eq!(
            question.by_relationship.get(&Relationship::SelfAssessment),
            Some(&4.0)
        );
        assert_eq!(question.by_relationship.get(&Relationship::Peer), Some(&7.0));
        assert_eq!(stats.participant_count, 1);
        assert_eq!(stats.response_count, 2);
        assert_eq!(
            stats.counts_by_relationship.get(&Relationship::SelfAssessment),
            Some(&1)
        );
    }

    #[test]
    fn strengths_rank_by_mean_descending_with_counts() {
        let responses = vec![
            response(
                Relationship::Peer,
                LikertScale::Meets,
                vec![("Great listener", 5), ("Creates a positive school culture", 2)],
            ),
            response(
                Relationship::Teacher,
                LikertScale::Meets,
                vec![("Great listener", 3), ("Has a clear vision for the school", 4)],
            ),
        ];
        let stats = aggregate(&responses);
        assert_eq!(
            stats.top_strengths,
            vec![
                RankingStat { label: "Great listener".into(), mean_rank: 4.0, count: 2 },
                RankingStat {
                    label: "Has a clear vision for the school".into(),
                    mean_rank: 4.0,
                    count: 1
                },
                RankingStat {
                    label: "Creates a positive school culture".into(),
                    mean_rank: 2.0,
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn ranking_ties_keep_first_seen_order() {
        let responses = vec![response(
            Relationship::Peer,
            LikertScale::Meets,
            vec![("B first", 3), ("A second", 3)],
        )];
        let stats = aggregate(&responses);
        assert_eq!(stats.top_strengths[0].label, "B first");
        assert_eq!(stats.top_strengths[1].label, "A second");
    }

    #[test]
    fn only_top_ten_rankings_are_kept() {
        let strengths: Vec<(&str, i32)> = catalog::STRENGTH_CHOICES
            .iter()
            .take(12)
            .map(|label| (*label, 3))
            .collect();
        let responses = vec![response(Relationship::Peer, LikertScale::Meets, strengths)];
        let stats = aggregate(&responses);
        assert_eq!(stats.top_strengths.len(), 10);
    }

    #[test]
    fn blank_free_text_answers_are_dropped() {
        let responses = vec![
            response(Relationship::Peer, LikertScale::Meets, vec![]),
            SurveyResponse::new(
                Uuid::new_v4(),
                Some(Uuid::new_v4()),
                Relationship::Student,
                Default::default(),
                vec![],
                vec![],
                String::new(),
                "  ".into(),
                "Hold office hours".into(),
            ),
        ];
        let stats = aggregate(&responses);
        assert_eq!(stats.continue_responses, vec!["Keep listening".to_string()]);
        assert!(stats.stop_responses.is_empty());
        assert_eq!(stats.start_responses, vec!["Hold office hours".to_string()]);
    }
}
