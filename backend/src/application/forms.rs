//! Structural validation of external input, mapping it to domain values.
//! Failures are surfaced as field-level errors keyed by field name.

use crate::domain::catalog;
use crate::domain::entities::Ranking;
use crate::domain::value_objects::{Email, LikertScale, Relationship};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        // Keep the first error reported for a field.
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.0
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// One ranked choice as submitted: the choice text and its rank.
#[derive(Debug, Clone, Deserialize)]
pub struct RankedChoice {
    pub text: String,
    pub rank: i32,
}

/// JSON body of a survey submission. Rated answers arrive as flat
/// `"q2".."q55"` keys and are collected through the flattened map.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitSurveyRequest {
    pub invitation_token: Option<String>,
    pub relationship: Option<String>,
    #[serde(default)]
    pub strengths: Vec<RankedChoice>,
    #[serde(default)]
    pub opportunities: Vec<RankedChoice>,
    #[serde(default)]
    pub continue_doing: String,
    #[serde(default)]
    pub stop_doing: String,
    #[serde(default)]
    pub start_doing: String,
    #[serde(flatten)]
    pub answers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    SelfAssessment,
    Participant,
}

/// A submission that passed structural validation.
#[derive(Debug, Clone)]
pub struct ValidatedSubmission {
    pub relationship: Relationship,
    pub answers: BTreeMap<u8, LikertScale>,
    pub strengths: Vec<Ranking>,
    pub opportunities: Vec<Ranking>,
    pub continue_doing: String,
    pub stop_doing: String,
    pub start_doing: String,
}

fn validate_relationship(
    raw: Option<&str>,
    kind: ResponseKind,
    errors: &mut FormErrors,
) -> Relationship {
    match kind {
        // The leader link fixes the category regardless of the payload.
        ResponseKind::SelfAssessment => Relationship::SelfAssessment,
        ResponseKind::Participant => match raw.and_then(Relationship::parse) {
            Some(Relationship::SelfAssessment) | None => {
                errors.add("relationship", "Select your relationship to this leader");
                Relationship::Peer
            }
            Some(relationship) => relationship,
        },
    }
}

fn validate_answers(
    raw: &BTreeMap<String, String>,
    errors: &mut FormErrors,
) -> BTreeMap<u8, LikertScale> {
    let mut answers = BTreeMap::new();
    for number in catalog::question_numbers() {
        let field = format!("q{number}");
        match raw.get(&field).map(String::as_str) {
            None | Some("") => errors.add(field, "This question is required"),
            Some(value) => match LikertScale::parse(value) {
                Some(level) => {
                    answers.insert(number, level);
                }
                None => errors.add(field, format!("Unrecognized answer: {value}")),
            },
        }
    }
    answers
}

fn validate_rankings(
    field: &str,
    choices: &[RankedChoice],
    errors: &mut FormErrors,
) -> Vec<Ranking> {
    if choices.len() != catalog::RANKINGS_PER_CATEGORY {
        errors.add(
            field,
            format!("Please select exactly {} and rank them", catalog::RANKINGS_PER_CATEGORY),
        );
        return Vec::new();
    }

    let mut labels = BTreeSet::new();
    let mut ranks = BTreeSet::new();
    for choice in choices {
        if choice.text.trim().is_empty() {
            errors.add(field, "Selections must not be blank");
            return Vec::new();
        }
        if !(1..=catalog::RANKINGS_PER_CATEGORY as i32).contains(&choice.rank) {
            errors.add(field, format!("Ranks must be between 1 and {}", catalog::RANKINGS_PER_CATEGORY));
            return Vec::new();
        }
        if !labels.insert(choice.text.trim()) {
            errors.add(field, format!("Duplicate selection: {}", choice.text.trim()));
            return Vec::new();
        }
        if !ranks.insert(choice.rank) {
            errors.add(field, "Each rank may be used only once");
            return Vec::new();
        }
    }

    choices
        .iter()
        .map(|choice| Ranking { label: choice.text.trim().to_string(), rank: choice.rank })
        .collect()
}

pub fn validate_submission(
    request: &SubmitSurveyRequest,
    kind: ResponseKind,
) -> Result<ValidatedSubmission, FormErrors> {
    let mut errors = FormErrors::default();

    let relationship = validate_relationship(request.relationship.as_deref(), kind, &mut errors);
    let answers = validate_answers(&request.answers, &mut errors);
    let strengths = validate_rankings("strengths", &request.strengths, &mut errors);
    let opportunities = validate_rankings("opportunities", &request.opportunities, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedSubmission {
        relationship,
        answers,
        strengths,
        opportunities,
        continue_doing: request.continue_doing.trim().to_string(),
        stop_doing: request.stop_doing.trim().to_string(),
        start_doing: request.start_doing.trim().to_string(),
    })
}

/// Parse an invitation email list, one address per line. Addresses are
/// lowercased and de-duplicated; the whole list is rejected on the first
/// invalid address.
pub fn parse_email_list(text: &str) -> Result<Vec<Email>, FormErrors> {
    let mut emails: Vec<Email> = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let email = Email::new(line).map_err(|e| FormErrors::single("emails", e))?;
        if !emails.contains(&email) {
            emails.push(email);
        }
    }
    if emails.is_empty() {
        return Err(FormErrors::single("emails", "Please enter at least one email address"));
    }
    Ok(emails)
}

#[cfg(test)]
pub mod test_support {
    use super::*;

    /// A fully valid participant submission body.
    pub fn complete_request(relationship: &str) -> SubmitSurveyRequest {
        let answers = catalog::question_numbers()
            .map(|n| (format!("q{n}"), "meets".to_string()))
            .collect();
        SubmitSurveyRequest {
            invitation_token: None,
            relationship: Some(relationship.to_string()),
            strengths: rankings(&catalog::STRENGTH_CHOICES),
            opportunities: rankings(&catalog::OPPORTUNITY_CHOICES),
            continue_doing: "Keep the open-door policy".into(),
            stop_doing: String::new(),
            start_doing: String::new(),
            answers,
        }
    }

    fn rankings(choices: &[&str]) -> Vec<RankedChoice> {
        choices
            .iter()
            .take(5)
            .enumerate()
            .map(|(i, label)| RankedChoice { text: (*label).to_string(), rank: 5 - i as i32 })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::complete_request;
    use super::*;

    #[test]
    fn complete_participant_submission_passes() {
        let request = complete_request("peer");
        let validated = validate_submission(&request, ResponseKind::Participant).unwrap();
        assert_eq!(validated.relationship, Relationship::Peer);
        assert_eq!(validated.answers.len(), 54);
        assert_eq!(validated.strengths.len(), 5);
        assert_eq!(validated.opportunities.len(), 5);
    }

    #[test]
    fn self_assessment_forces_self_relationship() {
        let mut request = complete_request("peer");
        request.relationship = None;
        let validated = validate_submission(&request, ResponseKind::SelfAssessment).unwrap();
        assert_eq!(validated.relationship, Relationship::SelfAssessment);
    }

    #[test]
    fn participant_may_not_claim_self() {
        let request = complete_request("self");
        let errors = validate_submission(&request, ResponseKind::Participant).unwrap_err();
        assert!(errors.fields().contains_key("relationship"));
    }

    #[test]
    fn four_strengths_fail_validation() {
        let mut request = complete_request("peer");
        request.strengths.pop();
        let errors = validate_submission(&request, ResponseKind::Participant).unwrap_err();
        assert!(errors.fields().contains_key("strengths"));
    }

    #[test]
    fn six_opportunities_fail_validation() {
        let mut request = complete_request("peer");
        request
            .opportunities
            .push(RankedChoice { text: "One too many".into(), rank: 1 });
        let errors = validate_submission(&request, ResponseKind::Participant).unwrap_err();
        assert!(errors.fields().contains_key("opportunities"));
    }

    #[test]
    fn duplicate_ranks_fail_validation() {
        let mut request = complete_request("peer");
        request.strengths[0].rank = request.strengths[1].rank;
        let errors = validate_submission(&request, ResponseKind::Participant).unwrap_err();
        assert!(errors.fields().contains_key("strengths"));
    }

    #[test]
    fn out_of_range_rank_fails_validation() {
        let mut request = complete_request("peer");
        request.strengths[0].rank = 6;
        let errors = validate_submission(&request, ResponseKind::Participant).unwrap_err();
        assert!(errors.fields().contains_key("strengths"));
    }

    #[test]
    fn missing_question_reports_its_field() {
        let mut request = complete_request("peer");
        request.answers.remove("q17");
        let errors = validate_submission(&request, ResponseKind::Participant).unwrap_err();
        assert!(errors.fields().contains_key("q17"));
    }

    #[test]
    fn unrecognized_likert_value_is_rejected() {
        let mut request = complete_request("peer");
        request.answers.insert("q2".into(), "amazing".into());
        let errors = validate_submission(&request, ResponseKind::Participant).unwrap_err();
        assert!(errors.fields().get("q2").unwrap().contains("amazing"));
    }

    #[test]
    fn email_list_lowercases_and_dedupes() {
        let emails = parse_email_list("Ann@School.org\n\n ann@school.org \nbob@school.org")
            .unwrap();
        let raw: Vec<&str> = emails.iter().map(|e| e.as_str()).collect();
        assert_eq!(raw, vec!["ann@school.org", "bob@school.org"]);
    }

    #[test]
    fn email_list_rejects_invalid_address() {
        let errors = parse_email_list("ann@school.org\nnot-an-email").unwrap_err();
        assert!(errors.fields().contains_key("emails"));
    }

    #[test]
    fn empty_email_list_is_rejected() {
        assert!(parse_email_list(" \n ").is_err());
    }
}
