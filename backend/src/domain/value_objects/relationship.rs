use serde::{Deserialize, Serialize};
use std::fmt;

/// Respondent's role relative to the assessed leader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    #[serde(rename = "self")]
    SelfAssessment,
    Supervisor,
    Peer,
    Teacher,
    Student,
    Parent,
}

impl Relationship {
    pub const ALL: [Relationship; 6] = [
        Relationship::SelfAssessment,
        Relationship::Supervisor,
        Relationship::Peer,
        Relationship::Teacher,
        Relationship::Student,
        Relationship::Parent,
    ];

    /// Categories participants may pick; `self` is reserved for the leader.
    pub const PARTICIPANT: [Relationship; 5] = [
        Relationship::Supervisor,
        Relationship::Peer,
        Relationship::Teacher,
        Relationship::Student,
        Relationship::Parent,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "self" => Some(Relationship::SelfAssessment),
            "supervisor" => Some(Relationship::Supervisor),
            "peer" => Some(Relationship::Peer),
            "teacher" => Some(Relationship::Teacher),
            "student" => Some(Relationship::Student),
            "parent" => Some(Relationship::Parent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::SelfAssessment => "self",
            Relationship::Supervisor => "supervisor",
            Relationship::Peer => "peer",
            Relationship::Teacher => "teacher",
            Relationship::Student => "student",
            Relationship::Parent => "parent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Relationship::SelfAssessment => "Self",
            Relationship::Supervisor => "Supervisor/Manager",
            Relationship::Peer => "Peer/Colleague",
            Relationship::Teacher => "Teacher/Staff",
            Relationship::Student => "Student",
            Relationship::Parent => "Parent/Community Representative",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_category() {
        for rel in Relationship::ALL {
            assert_eq!(Relationship::parse(rel.as_str()), Some(rel));
        }
    }

    #[test]
    fn participant_set_excludes_self() {
        assert!(!Relationship::PARTICIPANT.contains(&Relationship::SelfAssessment));
        assert_eq!(Relationship::PARTICIPANT.len(), 5);
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert_eq!(Relationship::parse("mentor"), None);
    }
}
