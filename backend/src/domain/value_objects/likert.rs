use serde::{Deserialize, Serialize};

/// Seven-level agreement scale used by every rated question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikertScale {
    SignificantlyAbove,
    Above,
    SlightlyAbove,
    Meets,
    SlightlyBelow,
    Below,
    SignificantlyBelow,
}

impl LikertScale {
    pub const ALL: [LikertScale; 7] = [
        LikertScale::SignificantlyAbove,
        LikertScale::Above,
        LikertScale::SlightlyAbove,
        LikertScale::Meets,
        LikertScale::SlightlyBelow,
        LikertScale::Below,
        LikertScale::SignificantlyBelow,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "significantly_above" => Some(LikertScale::SignificantlyAbove),
            "above" => Some(LikertScale::Above),
            "slightly_above" => Some(LikertScale::SlightlyAbove),
            "meets" => Some(LikertScale::Meets),
            "slightly_below" => Some(LikertScale::SlightlyBelow),
            "below" => Some(LikertScale::Below),
            "significantly_below" => Some(LikertScale::SignificantlyBelow),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LikertScale::SignificantlyAbove => "significantly_above",
            LikertScale::Above => "above",
            LikertScale::SlightlyAbove => "slightly_above",
            LikertScale::Meets => "meets",
            LikertScale::SlightlyBelow => "slightly_below",
            LikertScale::Below => "below",
            LikertScale::SignificantlyBelow => "significantly_below",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LikertScale::SignificantlyAbove => "Significantly above expectations",
            LikertScale::Above => "Above expectations",
            LikertScale::SlightlyAbove => "Slightly above expectations",
            LikertScale::Meets => "Meets expectations",
            LikertScale::SlightlyBelow => "Slightly below expectations",
            LikertScale::Below => "Below expectations",
            LikertScale::SignificantlyBelow => "Significantly below expectations",
        }
    }

    /// Numeric score for averaging, 7 (highest) down to 1.
    pub fn score(&self) -> i32 {
        match self {
            LikertScale::SignificantlyAbove => 7,
            LikertScale::Above => 6,
            LikertScale::SlightlyAbove => 5,
            LikertScale::Meets => 4,
            LikertScale::SlightlyBelow => 3,
            LikertScale::Below => 2,
            LikertScale::SignificantlyBelow => 1,
        }
    }
}

/// Parse a stored value, falling back to the midpoint level (score 4).
/// Submission validation rejects unknown values, so this only guards rows
/// written by older schema revisions.
pub fn parse_or_midpoint(value: &str) -> LikertScale {
    LikertScale::parse(value).unwrap_or(LikertScale::Meets)
}
