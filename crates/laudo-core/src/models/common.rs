use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Laterality of a finding or procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Side {
    Direita,
    Esquerda,
    Bilateral,
}

impl Side {
    /// Adjective form used inside report sentences ("mama direita").
    pub fn adjective(&self) -> &'static str {
        match self {
            Side::Direita => "direita",
            Side::Esquerda => "esquerda",
            Side::Bilateral => "bilateral",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.adjective())
    }
}

impl FromStr for Side {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direita" => Ok(Side::Direita),
            "esquerda" => Ok(Side::Esquerda),
            "bilateral" => Ok(Side::Bilateral),
            other => Err(CoreError::UnknownSide(other.to_string())),
        }
    }
}

/// Whether a collection-backed finding is present in the exam.
///
/// Never stored: always derived from the collection it describes, so it
/// cannot go stale after an add/remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Presence {
    Presente,
    Ausencia,
}

impl Presence {
    pub fn from_empty(is_empty: bool) -> Self {
        if is_empty {
            Presence::Ausencia
        } else {
            Presence::Presente
        }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Presence::Presente => "presente",
            Presence::Ausencia => "ausencia",
        })
    }
}

/// Exam-level reference to a prior study, driving the comparative section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriorStudy {
    pub date: Option<jiff::civil::Date>,
    pub description: Option<String>,
}

/// Checked boilerplate notices plus the free-text observation field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportNotes {
    /// Machine values of the checked notices, in catalog order.
    pub notices: Vec<String>,
    pub observation: Option<String>,
}

impl ReportNotes {
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
            && self
                .observation
                .as_deref()
                .is_none_or(|text| text.trim().is_empty())
    }
}
