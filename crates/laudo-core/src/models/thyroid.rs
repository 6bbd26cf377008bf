use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::common::{PriorStudy, ReportNotes};
use crate::models::finding::FindingBase;

/// Most nodules the thyroid modal lets the form add to one exam.
pub const MAX_NODULES: usize = 4;

/// One thyroid nodule as entered in the TI-RADS modal.
///
/// The five categorical axes hold catalog machine values; `None` means the
/// select is still unset. The scoring engine treats unset and unknown values
/// alike (zero points), so a half-filled nodule always scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ThyroidNodule {
    #[serde(flatten)]
    pub base: FindingBase,
    pub composition: Option<String>,
    pub echogenicity: Option<String>,
    pub shape: Option<String>,
    pub margin: Option<String>,
    pub echogenic_foci: Option<String>,
}

/// The full thyroid-ultrasound record held by one authoring session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ThyroidExam {
    pub indication: Option<String>,
    pub nodules: Vec<ThyroidNodule>,
    pub prior_study: Option<PriorStudy>,
    pub notes: ReportNotes,
}

impl ThyroidExam {
    /// The empty record every modal session starts from.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(payload: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Add a nodule, refusing past the form cap.
    pub fn push_nodule(&mut self, nodule: ThyroidNodule) -> bool {
        if self.nodules.len() >= MAX_NODULES {
            return false;
        }
        self.nodules.push(nodule);
        true
    }

    pub fn remove_nodule(&mut self, index: usize) -> Option<ThyroidNodule> {
        if index < self.nodules.len() {
            Some(self.nodules.remove(index))
        } else {
            None
        }
    }

    /// Reset to the empty record on clear or modal close.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
