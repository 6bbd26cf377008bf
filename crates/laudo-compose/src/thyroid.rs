//! Report sections for the thyroid-ultrasound modal.

use jiff::civil::Date;

use laudo_catalog::{OptionCatalog, fields};
use laudo_core::models::thyroid::{ThyroidExam, ThyroidNodule};
use laudo_rads::tirads::{self, RiskBand, TiradsAssessment, TiradsExamAssessment};

use crate::document::{self, Section};
use crate::error::ComposeError;
use crate::phrase;
use crate::sections;

pub const TITLE: &str = "ULTRASSONOGRAFIA DA TIREOIDE";

/// Fixed technique line, with an optional site note.
pub fn technique(site_note: Option<&str>) -> String {
    let mut text = String::from(
        "Exame realizado com transdutor linear de alta frequência, \
         com varredura dos lobos tireoidianos e do istmo",
    );
    if let Some(note) = site_note {
        text.push_str(", ");
        text.push_str(note);
    }
    text.push('.');
    phrase::paragraph(&text)
}

fn location_clause(nodule: &ThyroidNodule, catalog: &dyn OptionCatalog) -> Option<String> {
    nodule
        .base
        .location
        .as_deref()
        .map(|location| format!("no {}", catalog.label(fields::LOCALIZACAO, location)))
}

fn nodule_paragraph(
    ordinal: usize,
    nodule: &ThyroidNodule,
    assessment: &TiradsAssessment,
    catalog: &dyn OptionCatalog,
) -> String {
    let lead = format!("Nódulo {ordinal}: nódulo");

    let mut clauses = Vec::new();
    if let Some(composition) = nodule.composition.as_deref() {
        clauses.push(phrase::decapitalize(
            &catalog.label(fields::COMPOSICAO, composition),
        ));
    }
    if let Some(echogenicity) = nodule.echogenicity.as_deref() {
        clauses.push(phrase::decapitalize(
            &catalog.label(fields::ECOGENICIDADE, echogenicity),
        ));
    }
    if let Some(shape) = nodule.shape.as_deref() {
        clauses.push(phrase::decapitalize(&catalog.label(fields::FORMATO, shape)));
    }
    if let Some(margin) = nodule.margin.as_deref() {
        clauses.push(format!(
            "de margens {}",
            phrase::decapitalize(&catalog.label(fields::MARGENS, margin)),
        ));
    }
    if let Some(foci) = nodule.echogenic_foci.as_deref() {
        if foci == "nenhum" {
            clauses.push("sem focos ecogênicos suspeitos".to_string());
        } else {
            clauses.push(format!(
                "com {}",
                phrase::decapitalize(&catalog.label(fields::FOCOS, foci)),
            ));
        }
    }
    if let Some(location) = location_clause(nodule, catalog) {
        clauses.push(location);
    }
    if !nodule.base.measurement.is_empty() {
        clauses.push(format!("medindo {}", nodule.base.measurement.format_cm()));
    }

    let mut text = phrase::clause_sentence(&lead, &clauses);
    text.pop();
    text.push_str(&format!(" ({}).", assessment.level.category_label()));
    phrase::paragraph(&text)
}

/// One paragraph per nodule, each closed with its ACR level.
pub fn findings(
    exam: &ThyroidExam,
    assessment: &TiradsExamAssessment,
    catalog: &dyn OptionCatalog,
) -> String {
    let mut out = String::new();
    for (index, (nodule, nodule_assessment)) in
        exam.nodules.iter().zip(&assessment.nodules).enumerate()
    {
        out.push_str(&nodule_paragraph(index + 1, nodule, nodule_assessment, catalog));
    }
    out
}

/// Per-nodule conclusion plus the exam-level category. Measurements stay in
/// the findings; only levels and conduct appear here.
pub fn impression(
    exam: &ThyroidExam,
    assessment: &TiradsExamAssessment,
    catalog: &dyn OptionCatalog,
) -> String {
    let Some(exam_level) = assessment.exam_level else {
        return String::new();
    };

    let conclusive = match exam_level.band() {
        RiskBand::Benign => "Compatível com achados de aspecto benigno.".to_string(),
        _ => format!("Sinais de achado {}.", exam_level.risk()),
    };
    let mut out = phrase::paragraph(&conclusive);

    for (index, (nodule, nodule_assessment)) in
        exam.nodules.iter().zip(&assessment.nodules).enumerate()
    {
        let place = location_clause(nodule, catalog)
            .map(|clause| format!(" ({clause})"))
            .unwrap_or_default();
        out.push_str(&phrase::paragraph(&format!(
            "Nódulo {}{place}: {} ({}). {}",
            index + 1,
            nodule_assessment.level.category_label(),
            nodule_assessment.level.risk(),
            nodule_assessment.recommendation,
        )));
    }

    if assessment.nodules.len() > 1 {
        out.push_str(&phrase::paragraph(&format!(
            "Classificação geral do exame: {}.",
            exam_level.category_label(),
        )));
    }
    out
}

/// Compose the full thyroid report: score, build every section, assemble.
pub fn thyroid_report(
    exam: &ThyroidExam,
    catalog: &dyn OptionCatalog,
    reference: Date,
) -> Result<String, ComposeError> {
    let assessment = tirads::assess_exam(exam, catalog);
    let sections = [
        Section::new(
            "INDICAÇÃO CLÍNICA",
            sections::indication(exam.indication.as_deref(), catalog),
        ),
        Section::new("TÉCNICA", technique(None)),
        Section::new("ANÁLISE", findings(exam, &assessment, catalog)),
        Section::new(
            "ESTUDO COMPARATIVO",
            sections::comparative(exam.prior_study.as_ref(), reference),
        ),
        Section::new("IMPRESSÃO", impression(exam, &assessment, catalog)),
        Section::new("NOTAS", sections::notes(&exam.notes, catalog)),
    ];
    document::assemble(TITLE, &sections)
}
