use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of a profiling question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Mandatory,
    Answered,
    Unanswered,
    Required,
    Submitted,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Mandatory => "mandatory",
            QuestionType::Answered => "answered",
            QuestionType::Unanswered => "unanswered",
            QuestionType::Required => "required",
            QuestionType::Submitted => "submitted",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mandatory" => Ok(QuestionType::Mandatory),
            "answered" => Ok(QuestionType::Answered),
            "unanswered" => Ok(QuestionType::Unanswered),
            "required" => Ok(QuestionType::Required),
            "submitted" => Ok(QuestionType::Submitted),
            other => Err(format!("unknown question type: {other}")),
        }
    }
}

/// The fixed tag vocabulary. Tag names outside this list are rejected by the
/// request validator; names are matched case-sensitively.
pub const RECOGNIZED_TAG_NAMES: [&str; 6] =
    ["value", "lifestyle", "look", "trait", "hobby", "interest"];

pub fn is_recognized_tag_name(name: &str) -> bool {
    RECOGNIZED_TAG_NAMES.contains(&name)
}
