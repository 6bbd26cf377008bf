use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::common::{Presence, PriorStudy, ReportNotes, Side};
use crate::models::finding::{Finding, FindingBase};

/// Most entries the breast modal lets the form add to either the cyst or
/// the nodule collection.
pub const MAX_FINDINGS: usize = 6;

/// Surgical history sub-record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Surgery {
    /// Catalog machine value of the procedure.
    pub kind: Option<String>,
    pub side: Option<Side>,
    /// Only meaningful for mastectomy.
    pub reconstruction: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Echotexture {
    #[default]
    Normal,
    Alterada,
}

/// Tissue-density sub-record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Parenchyma {
    pub density: Option<String>,
    pub echotexture: Echotexture,
    /// Free-text description, filled only when the echotexture is altered.
    pub altered_description: Option<String>,
}

impl Parenchyma {
    pub fn is_empty(&self) -> bool {
        self.density.is_none() && self.echotexture == Echotexture::Normal
    }
}

/// One cyst finding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BreastCyst {
    #[serde(flatten)]
    pub base: FindingBase,
    /// Catalog machine value of the cyst type.
    pub cyst_kind: Option<String>,
    /// How many cysts this entry describes; 0 means not yet entered.
    pub count: u32,
}

/// Evolution of a nodule against the prior study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NoduleStatus {
    Estavel,
    Cresceu,
    Diminuiu,
    Novo,
}

/// One solid-nodule finding, with temporal-comparison fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BreastNodule {
    #[serde(flatten)]
    pub base: FindingBase,
    pub shape: Option<String>,
    pub margin: Option<String>,
    pub echogenicity: Option<String>,
    /// Posterior acoustic features.
    pub posterior: Option<String>,
    pub has_comparison: bool,
    pub prior_exam_date: Option<jiff::civil::Date>,
    pub status: Option<NoduleStatus>,
    pub skin_distance_cm: f64,
    pub nipple_distance_cm: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DuctalEctasia {
    pub side: Option<Side>,
    pub location: Option<String>,
    pub caliber_mm: f64,
    /// Catalog machine value of the content type.
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ArchitecturalDistortion {
    pub side: Option<Side>,
    pub location: Option<String>,
    /// Relation to a known surgical site.
    pub surgical_relation: Option<String>,
    pub aspect: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BreastImplants {
    /// Catalog machine value of the integrity assessment.
    pub integrity: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Lymphadenopathy {
    pub side: Option<Side>,
    /// Catalog machine value of the morphologic pattern.
    pub pattern: Option<String>,
}

/// The full breast-ultrasound record held by one authoring session.
///
/// Every sub-record is independently optional; the collections are the
/// single source of truth for presence (see [`BreastExam::cyst_presence`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BreastExam {
    pub indication: Option<String>,
    pub surgery: Option<Surgery>,
    pub parenchyma: Parenchyma,
    pub cysts: Vec<BreastCyst>,
    pub nodules: Vec<BreastNodule>,
    pub ductal_ectasia: Option<DuctalEctasia>,
    pub architectural_distortion: Option<ArchitecturalDistortion>,
    pub implants: Option<BreastImplants>,
    pub lymphadenopathy: Option<Lymphadenopathy>,
    pub prior_study: Option<PriorStudy>,
    pub notes: ReportNotes,
}

impl BreastExam {
    /// The empty record every modal session starts from.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(payload: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn push_cyst(&mut self, cyst: BreastCyst) -> bool {
        if self.cysts.len() >= MAX_FINDINGS {
            return false;
        }
        self.cysts.push(cyst);
        true
    }

    pub fn remove_cyst(&mut self, index: usize) -> Option<BreastCyst> {
        if index < self.cysts.len() {
            Some(self.cysts.remove(index))
        } else {
            None
        }
    }

    pub fn push_nodule(&mut self, nodule: BreastNodule) -> bool {
        if self.nodules.len() >= MAX_FINDINGS {
            return false;
        }
        self.nodules.push(nodule);
        true
    }

    pub fn remove_nodule(&mut self, index: usize) -> Option<BreastNodule> {
        if index < self.nodules.len() {
            Some(self.nodules.remove(index))
        } else {
            None
        }
    }

    /// Derived from the collection, never stored, so it cannot go stale.
    pub fn cyst_presence(&self) -> Presence {
        Presence::from_empty(self.cysts.is_empty())
    }

    /// Derived from the collection, never stored, so it cannot go stale.
    pub fn nodule_presence(&self) -> Presence {
        Presence::from_empty(self.nodules.is_empty())
    }

    /// All discrete findings as the shared kind-tagged shape.
    pub fn findings(&self) -> Vec<Finding> {
        let mut findings = Vec::with_capacity(self.cysts.len() + self.nodules.len());
        findings.extend(self.cysts.iter().cloned().map(Finding::BreastCyst));
        findings.extend(self.nodules.iter().cloned().map(Finding::BreastNodule));
        findings
    }

    /// True when no sub-record carries any finding at all.
    pub fn has_no_findings(&self) -> bool {
        self.cysts.is_empty()
            && self.nodules.is_empty()
            && self.ductal_ectasia.is_none()
            && self.architectural_distortion.is_none()
            && self.implants.is_none()
            && self.lymphadenopathy.is_none()
    }

    /// Reset to the empty record on clear or modal close.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
