//! BI-RADS category derivation for breast exams.
//!
//! Classification by worst finding, never by summing: each sub-record is
//! evaluated to a severity on its own, and the exam takes the highest
//! severity in priority order. One highly suggestive finding outweighs any
//! number of benign ones.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use laudo_catalog::values;
use laudo_core::interval;
use laudo_core::models::breast::{BreastExam, BreastNodule, NoduleStatus};

/// Whole months of prior-study history required before a stable nodule can
/// be called benign.
pub const STABILITY_MONTHS: i32 = 24;

/// BI-RADS assessment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BiradsCategory {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl BiradsCategory {
    pub fn number(&self) -> u8 {
        match self {
            BiradsCategory::Zero => 0,
            BiradsCategory::One => 1,
            BiradsCategory::Two => 2,
            BiradsCategory::Three => 3,
            BiradsCategory::Four => 4,
            BiradsCategory::Five => 5,
            BiradsCategory::Six => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BiradsCategory::Zero => "Exame inconclusivo, necessita de avaliação complementar",
            BiradsCategory::One => "Negativo",
            BiradsCategory::Two => "Achados benignos",
            BiradsCategory::Three => "Achados provavelmente benignos",
            BiradsCategory::Four => "Achados suspeitos",
            BiradsCategory::Five => "Achados altamente sugestivos de malignidade",
            BiradsCategory::Six => "Malignidade comprovada por biópsia",
        }
    }

    /// Conduct sentence for the impression, when the category implies one.
    pub fn conduct(&self) -> Option<&'static str> {
        match self {
            BiradsCategory::Zero => {
                Some("Recomenda-se avaliação complementar por método de imagem adicional.")
            }
            BiradsCategory::Three => Some("Recomenda-se controle ultrassonográfico em 6 meses."),
            BiradsCategory::Four | BiradsCategory::Five => {
                Some("Recomenda-se estudo histopatológico.")
            }
            _ => None,
        }
    }
}

/// Severity of one finding, ordered by classification priority.
///
/// The variant order is the priority order: an unconfirmed-stability finding
/// (incomplete) outranks a benign one but yields to anything probably benign
/// or worse, which is exactly where the incompleteness rule sits in the
/// decision chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Severity {
    Benign,
    Incomplete,
    ProbablyBenign,
    Suspicious,
    HighlySuggestive,
}

impl Severity {
    fn category(self) -> BiradsCategory {
        match self {
            Severity::Benign => BiradsCategory::Two,
            Severity::Incomplete => BiradsCategory::Zero,
            Severity::ProbablyBenign => BiradsCategory::Three,
            Severity::Suspicious => BiradsCategory::Four,
            Severity::HighlySuggestive => BiradsCategory::Five,
        }
    }
}

/// True when the nodule's prior-study comparison can support a stability
/// call: the comparison is flagged, a prior date exists, and at least 24
/// whole months have elapsed. A missing date makes the comparison unusable
/// no matter what the flag says.
pub fn comparison_sufficient(nodule: &BreastNodule, reference: Date) -> bool {
    if !nodule.has_comparison {
        return false;
    }
    match nodule.prior_exam_date {
        Some(prior) => interval::months_between(prior, reference) >= STABILITY_MONTHS,
        None => false,
    }
}

fn nodule_severity(nodule: &BreastNodule, reference: Date) -> Severity {
    let spiculated = nodule.margin.as_deref() == Some(values::MARGENS_ESPICULADAS);
    let irregular_shape = nodule.shape.as_deref() == Some(values::FORMATO_IRREGULAR);
    let shadowing = nodule.posterior.as_deref() == Some(values::ACUSTICA_SOMBRA);
    let suspicious_margins = matches!(
        nodule.margin.as_deref(),
        Some(values::MARGENS_MICROLOBULADAS) | Some(values::MARGENS_INDISTINTAS),
    );

    if spiculated || (irregular_shape && shadowing) {
        return Severity::HighlySuggestive;
    }
    if suspicious_margins || irregular_shape || shadowing {
        return Severity::Suspicious;
    }

    if nodule.has_comparison {
        match nodule.status {
            Some(NoduleStatus::Cresceu) => Severity::ProbablyBenign,
            Some(NoduleStatus::Diminuiu) => Severity::Benign,
            Some(NoduleStatus::Estavel) => {
                if comparison_sufficient(nodule, reference) {
                    Severity::Benign
                } else {
                    // Stability claimed but not yet demonstrable.
                    Severity::Incomplete
                }
            }
            Some(NoduleStatus::Novo) | None => Severity::ProbablyBenign,
        }
    } else {
        // A solid nodule with no suspicious feature and no history.
        Severity::ProbablyBenign
    }
}

fn cyst_severity(kind: Option<&str>) -> Severity {
    match kind {
        Some(values::CISTO_COMPLEXO) => Severity::Suspicious,
        Some(values::CISTO_COMPLICADO) => Severity::ProbablyBenign,
        _ => Severity::Benign,
    }
}

fn ectasia_severity(content: Option<&str>) -> Severity {
    match content {
        Some(values::CONTEUDO_ECOGENICO) => Severity::Suspicious,
        _ => Severity::Benign,
    }
}

fn distortion_severity(relation: Option<&str>, aspect: Option<&str>) -> Severity {
    if relation == Some(values::RELACAO_SITIO_CIRURGICO) {
        return Severity::Benign;
    }
    if aspect == Some(values::ASPECTO_ESPICULADO) {
        Severity::HighlySuggestive
    } else {
        Severity::Suspicious
    }
}

fn implant_severity(integrity: Option<&str>) -> Severity {
    match integrity {
        Some(values::IMPLANTE_ROTURA_EXTRACAPSULAR) => Severity::Suspicious,
        Some(values::IMPLANTE_ROTURA_INTRACAPSULAR) => Severity::ProbablyBenign,
        _ => Severity::Benign,
    }
}

fn lymph_severity(pattern: Option<&str>) -> Severity {
    match pattern {
        Some(values::LINFONODO_ATIPICO) => Severity::Suspicious,
        _ => Severity::Benign,
    }
}

fn worst_severity(exam: &BreastExam, reference: Date) -> Option<Severity> {
    let mut severities = Vec::new();
    severities.extend(exam.cysts.iter().map(|c| cyst_severity(c.cyst_kind.as_deref())));
    severities.extend(exam.nodules.iter().map(|n| nodule_severity(n, reference)));
    if let Some(ectasia) = &exam.ductal_ectasia {
        severities.push(ectasia_severity(ectasia.content.as_deref()));
    }
    if let Some(distortion) = &exam.architectural_distortion {
        severities.push(distortion_severity(
            distortion.surgical_relation.as_deref(),
            distortion.aspect.as_deref(),
        ));
    }
    if let Some(implants) = &exam.implants {
        severities.push(implant_severity(implants.integrity.as_deref()));
    }
    if let Some(lymph) = &exam.lymphadenopathy {
        severities.push(lymph_severity(lymph.pattern.as_deref()));
    }
    severities.into_iter().max()
}

/// Informational form-fill meter (0–100), surfaced next to the category in
/// the modal. Never classificatory.
pub fn completeness(exam: &BreastExam) -> u8 {
    let mut total = 2u32;
    let mut filled = 0u32;
    if exam.indication.is_some() {
        filled += 1;
    }
    if exam.parenchyma.density.is_some() {
        filled += 1;
    }

    for finding in exam.findings() {
        total += 1;
        if !finding.base().measurement.is_empty() {
            filled += 1;
        }
    }
    for cyst in &exam.cysts {
        total += 1;
        if cyst.cyst_kind.is_some() {
            filled += 1;
        }
    }
    for nodule in &exam.nodules {
        total += 2;
        if nodule.shape.is_some() {
            filled += 1;
        }
        if nodule.margin.is_some() {
            filled += 1;
        }
    }
    if let Some(ectasia) = &exam.ductal_ectasia {
        total += 1;
        if ectasia.content.is_some() {
            filled += 1;
        }
    }
    if let Some(distortion) = &exam.architectural_distortion {
        total += 1;
        if distortion.surgical_relation.is_some() {
            filled += 1;
        }
    }
    if let Some(implants) = &exam.implants {
        total += 1;
        if implants.integrity.is_some() {
            filled += 1;
        }
    }
    if let Some(lymph) = &exam.lymphadenopathy {
        total += 1;
        if lymph.pattern.is_some() {
            filled += 1;
        }
    }

    ((filled * 100) / total) as u8
}

/// The category plus everything the modal preview shows with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BiradsAssessment {
    pub category: BiradsCategory,
    pub label: String,
    pub completeness: u8,
}

/// Derive the exam category.
///
/// `reference` is the report date the stability window is measured against;
/// the engine never reads a clock of its own.
pub fn classify(exam: &BreastExam, reference: Date) -> BiradsAssessment {
    let category = category_for(exam, reference);
    BiradsAssessment {
        category,
        label: category.label().to_string(),
        completeness: completeness(exam),
    }
}

fn category_for(exam: &BreastExam, reference: Date) -> BiradsCategory {
    if exam.indication.as_deref() == Some(values::INDICACAO_MALIGNIDADE_COMPROVADA) {
        return BiradsCategory::Six;
    }
    match worst_severity(exam, reference) {
        Some(severity) => severity.category(),
        None => BiradsCategory::One,
    }
}
