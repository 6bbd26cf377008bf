//! ACR TI-RADS point scoring for thyroid nodules.
//!
//! Five categorical axes each contribute the point weight of the selected
//! catalog option; the total maps to a TR1–TR5 level and, together with the
//! largest measured dimension, to a conduct recommendation. Each nodule is
//! scored independently; the exam reports the highest level found.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use laudo_catalog::{OptionCatalog, fields};
use laudo_core::format;
use laudo_core::models::thyroid::{ThyroidExam, ThyroidNodule};

/// Per-axis point breakdown, surfaced in the modal next to each select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TiradsScore {
    pub composition: u32,
    pub echogenicity: u32,
    pub shape: u32,
    pub margin: u32,
    pub echogenic_foci: u32,
}

impl TiradsScore {
    /// Unweighted sum across the five axes.
    pub fn total(&self) -> u32 {
        self.composition + self.echogenicity + self.shape + self.margin + self.echogenic_foci
    }
}

/// Score one nodule against the catalog.
///
/// An unset select, an unknown machine value, or a catalog still loading
/// all contribute zero points on that axis.
pub fn score(nodule: &ThyroidNodule, catalog: &dyn OptionCatalog) -> TiradsScore {
    TiradsScore {
        composition: catalog.points(fields::COMPOSICAO, nodule.composition.as_deref()),
        echogenicity: catalog.points(fields::ECOGENICIDADE, nodule.echogenicity.as_deref()),
        shape: catalog.points(fields::FORMATO, nodule.shape.as_deref()),
        margin: catalog.points(fields::MARGENS, nodule.margin.as_deref()),
        echogenic_foci: catalog.points(fields::FOCOS, nodule.echogenic_foci.as_deref()),
    }
}

/// ACR TI-RADS risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TiradsLevel {
    Tr1,
    Tr2,
    Tr3,
    Tr4,
    Tr5,
}

impl TiradsLevel {
    /// Map a point total to its level. The published ranges are disjoint;
    /// the impossible-in-table 1-point total stays benign.
    pub fn from_points(points: u32) -> Self {
        match points {
            0..=1 => TiradsLevel::Tr1,
            2 => TiradsLevel::Tr2,
            3 => TiradsLevel::Tr3,
            4..=6 => TiradsLevel::Tr4,
            _ => TiradsLevel::Tr5,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            TiradsLevel::Tr1 => 1,
            TiradsLevel::Tr2 => 2,
            TiradsLevel::Tr3 => 3,
            TiradsLevel::Tr4 => 4,
            TiradsLevel::Tr5 => 5,
        }
    }

    pub fn category_label(&self) -> String {
        format!("ACR TI-RADS {}", self.number())
    }

    /// Qualitative malignancy-risk wording attached to the level.
    pub fn risk(&self) -> &'static str {
        match self {
            TiradsLevel::Tr1 => "benigno",
            TiradsLevel::Tr2 => "não suspeito",
            TiradsLevel::Tr3 => "levemente suspeito",
            TiradsLevel::Tr4 => "moderadamente suspeito",
            TiradsLevel::Tr5 => "altamente suspeito",
        }
    }

    pub fn band(&self) -> RiskBand {
        match self {
            TiradsLevel::Tr1 | TiradsLevel::Tr2 => RiskBand::Benign,
            TiradsLevel::Tr3 => RiskBand::Low,
            TiradsLevel::Tr4 => RiskBand::Moderate,
            TiradsLevel::Tr5 => RiskBand::High,
        }
    }
}

/// Coarse banding of a level, driving the preview color in the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskBand {
    Benign,
    Low,
    Moderate,
    High,
}

/// Conduct recommendation for a level and the nodule's largest dimension.
///
/// With no measurement entered yet there is no dimension to compare against
/// a cutoff, so the text asks for the measurements instead of asserting a
/// below-threshold conduct.
pub fn recommendation(level: TiradsLevel, max_dimension_cm: f64) -> String {
    match level {
        TiradsLevel::Tr1 | TiradsLevel::Tr2 => {
            "Não há indicação de PAAF ou de seguimento ultrassonográfico.".to_string()
        }
        _ if max_dimension_cm <= 0.0 => {
            "Completar as medidas do nódulo para definição da conduta.".to_string()
        }
        TiradsLevel::Tr3 => conduct(max_dimension_cm, 2.5, 1.5, "em 1, 3 e 5 anos"),
        TiradsLevel::Tr4 => conduct(max_dimension_cm, 1.5, 1.0, "em 1, 2, 3 e 5 anos"),
        TiradsLevel::Tr5 => conduct(max_dimension_cm, 1.0, 0.5, "anual por até 5 anos"),
    }
}

fn conduct(dim: f64, biopsy_cm: f64, follow_cm: f64, follow_schedule: &str) -> String {
    if dim >= biopsy_cm {
        format!(
            "Sugere-se PAAF (maior dimensão de {} cm, limiar de {} cm).",
            format::cm(dim),
            format::cm(biopsy_cm),
        )
    } else if dim >= follow_cm {
        format!("Sugere-se seguimento ultrassonográfico {follow_schedule}.")
    } else {
        "Dimensões abaixo do limiar de conduta; não há indicação de PAAF ou de seguimento."
            .to_string()
    }
}

/// Everything the modal shows for one nodule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TiradsAssessment {
    pub score: TiradsScore,
    pub level: TiradsLevel,
    pub band: RiskBand,
    pub recommendation: String,
}

pub fn assess(nodule: &ThyroidNodule, catalog: &dyn OptionCatalog) -> TiradsAssessment {
    let score = score(nodule, catalog);
    let level = TiradsLevel::from_points(score.total());
    TiradsAssessment {
        score,
        level,
        band: level.band(),
        recommendation: recommendation(level, nodule.base.measurement.max_dimension()),
    }
}

/// Exam-level view: one assessment per nodule plus the highest level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TiradsExamAssessment {
    pub nodules: Vec<TiradsAssessment>,
    /// Highest level among the evaluated nodules; `None` while the exam has
    /// no nodules at all.
    pub exam_level: Option<TiradsLevel>,
}

pub fn assess_exam(exam: &ThyroidExam, catalog: &dyn OptionCatalog) -> TiradsExamAssessment {
    let nodules: Vec<TiradsAssessment> =
        exam.nodules.iter().map(|n| assess(n, catalog)).collect();
    let exam_level = nodules.iter().map(|a| a.level).max();
    TiradsExamAssessment { nodules, exam_level }
}
