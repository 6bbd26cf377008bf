//! Report sections for the breast-ultrasound modal.
//!
//! Every function here is a pure view over the record: same record, same
//! text. Unfilled sub-records contribute nothing, so the live preview and
//! the final document always agree.

use jiff::civil::Date;

use laudo_catalog::{OptionCatalog, fields, values};
use laudo_core::format;
use laudo_core::models::breast::{
    BreastCyst, BreastExam, BreastNodule, NoduleStatus, Parenchyma,
};
use laudo_core::models::common::Side;
use laudo_rads::birads::{self, BiradsAssessment, BiradsCategory};

use crate::document::{self, Section};
use crate::error::ComposeError;
use crate::phrase;
use crate::sections;

pub const TITLE: &str = "ULTRASSONOGRAFIA MAMÁRIA";

/// Fixed technique line, with an optional site note (for instance after a
/// unilateral mastectomy).
pub fn technique(site_note: Option<&str>) -> String {
    let mut text = String::from(
        "Exame realizado com transdutor linear de alta frequência, \
         com varredura de ambas as mamas e dos prolongamentos axilares",
    );
    if let Some(note) = site_note {
        text.push_str(", ");
        text.push_str(note);
    }
    text.push('.');
    phrase::paragraph(&text)
}

fn breast_side(side: Side) -> String {
    match side {
        Side::Bilateral => "em ambas as mamas".to_string(),
        other => format!("na mama {}", other.adjective()),
    }
}

fn laterality(side: Side) -> String {
    match side {
        Side::Direita => "à direita".to_string(),
        Side::Esquerda => "à esquerda".to_string(),
        Side::Bilateral => "bilateralmente".to_string(),
    }
}

fn surgery_paragraph(exam: &BreastExam, catalog: &dyn OptionCatalog) -> String {
    let Some(surgery) = &exam.surgery else {
        return String::new();
    };
    let Some(kind) = surgery.kind.as_deref() else {
        return String::new();
    };

    let mut text = format!(
        "Status pós-{}",
        phrase::decapitalize(&catalog.label(fields::CIRURGIA, kind)),
    );
    if let Some(side) = surgery.side {
        text.push(' ');
        text.push_str(&laterality(side));
    }
    if kind == values::CIRURGIA_MASTECTOMIA
        && let Some(reconstruction) = surgery.reconstruction.as_deref()
    {
        text.push_str(", com ");
        text.push_str(&catalog.label(fields::RECONSTRUCAO, reconstruction));
    }
    text.push('.');
    phrase::paragraph(&text)
}

fn parenchyma_paragraph(parenchyma: &Parenchyma, catalog: &dyn OptionCatalog) -> String {
    use laudo_core::models::breast::Echotexture;

    if parenchyma.is_empty() {
        return String::new();
    }
    let mut text = match parenchyma.density.as_deref() {
        Some(density) => format!(
            "Parênquima mamário {}",
            catalog.label(fields::PARENQUIMA, density),
        ),
        None => "Parênquima mamário".to_string(),
    };
    match parenchyma.echotexture {
        Echotexture::Normal => text.push_str(", com ecotextura homogênea"),
        Echotexture::Alterada => {
            text.push_str(", com ecotextura alterada");
            if let Some(description) = parenchyma
                .altered_description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
            {
                text.push_str(" (");
                text.push_str(description);
                text.push(')');
            }
        }
    }
    text.push('.');
    phrase::paragraph(&text)
}

fn cyst_paragraph(ordinal: usize, cyst: &BreastCyst, catalog: &dyn OptionCatalog) -> String {
    let noun = phrase::pluralize(cyst.count, "imagem cística", "imagens císticas");
    let lead = match cyst.cyst_kind.as_deref() {
        Some(kind) => format!(
            "Cisto {ordinal}: {}",
            phrase::decapitalize(&catalog.label(fields::CISTO_TIPO, kind)),
        ),
        None => format!("Cisto {ordinal}: {noun}"),
    };

    let mut clauses = Vec::new();
    if cyst.count >= 2 {
        clauses.push(format!("em número de {}", cyst.count));
    }
    if let Some(side) = cyst.base.side {
        clauses.push(breast_side(side));
    }
    if let Some(location) = cyst.base.location.as_deref() {
        clauses.push(catalog.label(fields::LOCALIZACAO, location));
    }
    if !cyst.base.measurement.is_empty() {
        let verb = if cyst.count >= 2 { "o maior medindo" } else { "medindo" };
        clauses.push(format!("{verb} {}", cyst.base.measurement.format_cm()));
    }
    phrase::paragraph(&phrase::clause_sentence(&lead, &clauses))
}

fn status_phrase(status: NoduleStatus) -> &'static str {
    match status {
        NoduleStatus::Estavel => "apresenta-se estável",
        NoduleStatus::Cresceu => "apresenta aumento dimensional",
        NoduleStatus::Diminuiu => "apresenta redução dimensional",
        NoduleStatus::Novo => "não caracterizado no exame anterior",
    }
}

fn nodule_paragraph(ordinal: usize, nodule: &BreastNodule, catalog: &dyn OptionCatalog) -> String {
    let lead = format!("Nódulo {ordinal}: nódulo sólido");

    let mut clauses = Vec::new();
    if let Some(shape) = nodule.shape.as_deref() {
        clauses.push(catalog.label(fields::NODULO_FORMATO, shape));
    }
    if let Some(margin) = nodule.margin.as_deref() {
        clauses.push(format!(
            "de margens {}",
            catalog.label(fields::NODULO_MARGENS, margin),
        ));
    }
    if let Some(echogenicity) = nodule.echogenicity.as_deref() {
        clauses.push(catalog.label(fields::NODULO_ECOGENICIDADE, echogenicity));
    }
    if let Some(posterior) = nodule.posterior.as_deref() {
        clauses.push(catalog.label(fields::NODULO_ACUSTICA, posterior));
    }
    if let Some(side) = nodule.base.side {
        clauses.push(breast_side(side));
    }
    if let Some(location) = nodule.base.location.as_deref() {
        clauses.push(catalog.label(fields::LOCALIZACAO, location));
    }
    if !nodule.base.measurement.is_empty() {
        clauses.push(format!("medindo {}", nodule.base.measurement.format_cm()));
    }
    match (nodule.skin_distance_cm > 0.0, nodule.nipple_distance_cm > 0.0) {
        (true, true) => clauses.push(format!(
            "distando {} cm da pele e {} cm da papila",
            format::cm(nodule.skin_distance_cm),
            format::cm(nodule.nipple_distance_cm),
        )),
        (true, false) => clauses.push(format!(
            "distando {} cm da pele",
            format::cm(nodule.skin_distance_cm),
        )),
        (false, true) => clauses.push(format!(
            "distando {} cm da papila",
            format::cm(nodule.nipple_distance_cm),
        )),
        (false, false) => {}
    }

    let mut text = phrase::clause_sentence(&lead, &clauses);
    if nodule.has_comparison
        && let Some(prior) = nodule.prior_exam_date
        && let Some(status) = nodule.status
    {
        text.push_str(&format!(
            " Em comparação com o exame de {}, {}.",
            prior.strftime("%d/%m/%Y"),
            status_phrase(status),
        ));
    }
    phrase::paragraph(&text)
}

/// The findings body, in fixed sub-record order. Empty collections and
/// absent sub-records contribute nothing at all.
pub fn findings(exam: &BreastExam, catalog: &dyn OptionCatalog) -> String {
    let mut out = String::new();

    out.push_str(&surgery_paragraph(exam, catalog));
    out.push_str(&parenchyma_paragraph(&exam.parenchyma, catalog));
    for (index, cyst) in exam.cysts.iter().enumerate() {
        out.push_str(&cyst_paragraph(index + 1, cyst, catalog));
    }
    for (index, nodule) in exam.nodules.iter().enumerate() {
        out.push_str(&nodule_paragraph(index + 1, nodule, catalog));
    }
    if let Some(ectasia) = &exam.ductal_ectasia {
        let mut clauses = Vec::new();
        if let Some(side) = ectasia.side {
            clauses.push(breast_side(side));
        }
        if let Some(location) = ectasia.location.as_deref() {
            clauses.push(catalog.label(fields::LOCALIZACAO, location));
        }
        if ectasia.caliber_mm > 0.0 {
            clauses.push(format!("com calibre de {} mm", format::mm(ectasia.caliber_mm)));
        }
        if let Some(content) = ectasia.content.as_deref() {
            clauses.push(format!("com {}", catalog.label(fields::ECTASIA_CONTEUDO, content)));
        }
        out.push_str(&phrase::paragraph(&phrase::clause_sentence(
            "Ectasia ductal",
            &clauses,
        )));
    }
    if let Some(distortion) = &exam.architectural_distortion {
        let mut clauses = Vec::new();
        if let Some(side) = distortion.side {
            clauses.push(breast_side(side));
        }
        if let Some(location) = distortion.location.as_deref() {
            clauses.push(catalog.label(fields::LOCALIZACAO, location));
        }
        if let Some(aspect) = distortion.aspect.as_deref() {
            clauses.push(catalog.label(fields::DISTORCAO_ASPECTO, aspect));
        }
        if let Some(relation) = distortion.surgical_relation.as_deref() {
            clauses.push(catalog.label(fields::DISTORCAO_RELACAO, relation));
        }
        out.push_str(&phrase::paragraph(&phrase::clause_sentence(
            "Distorção arquitetural",
            &clauses,
        )));
    }
    if let Some(implants) = &exam.implants {
        let text = match implants.integrity.as_deref() {
            Some(integrity) => format!(
                "Implantes mamários {}.",
                catalog.label(fields::IMPLANTE_INTEGRIDADE, integrity),
            ),
            None => "Implantes mamários caracterizados.".to_string(),
        };
        out.push_str(&phrase::paragraph(&text));
    }
    if let Some(lymph) = &exam.lymphadenopathy {
        let mut clauses = Vec::new();
        if let Some(pattern) = lymph.pattern.as_deref() {
            clauses.push(catalog.label(fields::LINFONODO_PADRAO, pattern));
        }
        if let Some(side) = lymph.side {
            clauses.push(laterality(side));
        }
        out.push_str(&phrase::paragraph(&phrase::clause_sentence(
            "Linfonodos axilares",
            &clauses,
        )));
    }

    out
}

/// Conclusive impression from the derived category. Measurements already
/// stated in the findings are not repeated here.
pub fn impression(assessment: &BiradsAssessment) -> String {
    let conclusive = match assessment.category {
        BiradsCategory::Zero => "Exame inconclusivo para classificação.",
        BiradsCategory::One => "Exame ultrassonográfico dentro dos padrões da normalidade.",
        BiradsCategory::Two => "Compatível com achados benignos.",
        BiradsCategory::Three => "Compatível com achados provavelmente benignos.",
        BiradsCategory::Four => "Sinais de achado suspeito.",
        BiradsCategory::Five => "Sinais de achado altamente sugestivo de malignidade.",
        BiradsCategory::Six => "Malignidade comprovada por biópsia.",
    };
    let mut out = phrase::paragraph(conclusive);
    out.push_str(&phrase::paragraph(&format!(
        "Classificação BI-RADS: categoria {}.",
        assessment.category.number(),
    )));
    if let Some(conduct) = assessment.category.conduct() {
        out.push_str(&phrase::paragraph(conduct));
    }
    out
}

/// Compose the full breast report: classify, build every section, assemble.
///
/// `reference` is the report date used for the stability window and the
/// comparative interval.
pub fn breast_report(
    exam: &BreastExam,
    catalog: &dyn OptionCatalog,
    reference: Date,
) -> Result<String, ComposeError> {
    let assessment = birads::classify(exam, reference);
    let sections = [
        Section::new(
            "INDICAÇÃO CLÍNICA",
            sections::indication(exam.indication.as_deref(), catalog),
        ),
        Section::new("TÉCNICA", technique(None)),
        Section::new("ANÁLISE", findings(exam, catalog)),
        Section::new(
            "ESTUDO COMPARATIVO",
            sections::comparative(exam.prior_study.as_ref(), reference),
        ),
        Section::new("IMPRESSÃO", impression(&assessment)),
        Section::new("NOTAS", sections::notes(&exam.notes, catalog)),
    ];
    document::assemble(TITLE, &sections)
}
