use jiff::civil::{Date, date};

use laudo_core::models::breast::{
    ArchitecturalDistortion, BreastCyst, BreastExam, BreastImplants, BreastNodule, DuctalEctasia,
    Lymphadenopathy, NoduleStatus,
};
use laudo_rads::birads::{BiradsCategory, classify, comparison_sufficient, completeness};

const REFERENCE: Date = date(2026, 6, 1);

fn cyst(kind: &str) -> BreastCyst {
    BreastCyst {
        cyst_kind: Some(kind.to_string()),
        count: 1,
        ..Default::default()
    }
}

fn plain_nodule() -> BreastNodule {
    BreastNodule {
        shape: Some("oval".to_string()),
        margin: Some("circunscritas".to_string()),
        ..Default::default()
    }
}

fn stable_nodule(prior: Date) -> BreastNodule {
    BreastNodule {
        has_comparison: true,
        prior_exam_date: Some(prior),
        status: Some(NoduleStatus::Estavel),
        ..plain_nodule()
    }
}

#[test]
fn empty_exam_is_category_one() {
    let exam = BreastExam::new();
    let assessment = classify(&exam, REFERENCE);
    assert_eq!(assessment.category, BiradsCategory::One);
    assert_eq!(assessment.label, "Negativo");
}

#[test]
fn simple_cyst_is_benign() {
    let mut exam = BreastExam::new();
    exam.push_cyst(cyst("simples"));
    assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Two);
}

#[test]
fn complex_cyst_is_suspicious() {
    let mut exam = BreastExam::new();
    exam.push_cyst(cyst("complexo"));
    assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Four);
}

#[test]
fn complicated_cyst_is_probably_benign() {
    let mut exam = BreastExam::new();
    exam.push_cyst(cyst("complicado"));
    assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Three);
}

#[test]
fn spiculated_nodule_overrides_benign_findings() {
    let mut exam = BreastExam::new();
    exam.push_cyst(cyst("simples"));
    exam.push_nodule(BreastNodule {
        margin: Some("espiculadas".to_string()),
        ..Default::default()
    });
    assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Five);
}

#[test]
fn irregular_shape_with_shadowing_is_highly_suggestive() {
    let mut exam = BreastExam::new();
    exam.push_nodule(BreastNodule {
        shape: Some("irregular".to_string()),
        posterior: Some("sombra".to_string()),
        ..Default::default()
    });
    assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Five);
}

#[test]
fn suspicious_margins_are_category_four() {
    for margin in ["microlobuladas", "indistintas"] {
        let mut exam = BreastExam::new();
        exam.push_nodule(BreastNodule {
            margin: Some(margin.to_string()),
            ..Default::default()
        });
        assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Four, "{margin}");
    }
}

#[test]
fn new_solid_nodule_without_suspicious_features_is_probably_benign() {
    let mut exam = BreastExam::new();
    exam.push_nodule(plain_nodule());
    assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Three);
}

#[test]
fn growth_without_suspicious_traits_is_probably_benign() {
    let mut exam = BreastExam::new();
    exam.push_nodule(BreastNodule {
        has_comparison: true,
        prior_exam_date: Some(date(2025, 1, 10)),
        status: Some(NoduleStatus::Cresceu),
        ..plain_nodule()
    });
    assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Three);
}

#[test]
fn stability_needs_twenty_four_whole_months() {
    // Exactly 24 months: sufficient, benign.
    let mut exam = BreastExam::new();
    exam.push_nodule(stable_nodule(date(2024, 6, 1)));
    assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Two);

    // 23 months and 29 days: insufficient, incomplete for classification.
    let mut exam = BreastExam::new();
    exam.push_nodule(stable_nodule(date(2024, 6, 2)));
    assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Zero);
}

#[test]
fn null_prior_date_makes_comparison_unusable() {
    let nodule = BreastNodule {
        has_comparison: true,
        prior_exam_date: None,
        status: Some(NoduleStatus::Estavel),
        ..plain_nodule()
    };
    assert!(!comparison_sufficient(&nodule, REFERENCE));

    let mut exam = BreastExam::new();
    exam.push_nodule(nodule);
    assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Zero);
}

#[test]
fn comparison_flag_alone_is_not_enough() {
    let nodule = BreastNodule {
        has_comparison: false,
        prior_exam_date: Some(date(2020, 1, 1)),
        ..plain_nodule()
    };
    assert!(!comparison_sufficient(&nodule, REFERENCE));
}

#[test]
fn shrinking_nodule_is_benign() {
    let mut exam = BreastExam::new();
    exam.push_nodule(BreastNodule {
        has_comparison: true,
        prior_exam_date: Some(date(2025, 1, 10)),
        status: Some(NoduleStatus::Diminuiu),
        ..plain_nodule()
    });
    assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Two);
}

#[test]
fn ectasia_severity_follows_content() {
    let mut exam = BreastExam::new();
    exam.ductal_ectasia = Some(DuctalEctasia {
        content: Some("anecoico".to_string()),
        ..Default::default()
    });
    assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Two);

    exam.ductal_ectasia = Some(DuctalEctasia {
        content: Some("ecogenico".to_string()),
        ..Default::default()
    });
    assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Four);
}

#[test]
fn distortion_severity_follows_the_surgical_site() {
    let mut exam = BreastExam::new();
    exam.architectural_distortion = Some(ArchitecturalDistortion {
        surgical_relation: Some("sitio_cirurgico".to_string()),
        ..Default::default()
    });
    assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Two);

    exam.architectural_distortion = Some(ArchitecturalDistortion {
        surgical_relation: Some("fora_sitio_cirurgico".to_string()),
        ..Default::default()
    });
    assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Four);

    exam.architectural_distortion = Some(ArchitecturalDistortion {
        surgical_relation: Some("fora_sitio_cirurgico".to_string()),
        aspect: Some("espiculado".to_string()),
        ..Default::default()
    });
    assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Five);
}

#[test]
fn implant_severity_follows_integrity() {
    let mut exam = BreastExam::new();
    exam.implants = Some(BreastImplants {
        integrity: Some("integro".to_string()),
    });
    assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Two);

    exam.implants = Some(BreastImplants {
        integrity: Some("rotura_intracapsular".to_string()),
    });
    assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Three);

    exam.implants = Some(BreastImplants {
        integrity: Some("rotura_extracapsular".to_string()),
    });
    assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Four);
}

#[test]
fn atypical_lymph_nodes_are_suspicious() {
    let mut exam = BreastExam::new();
    exam.lymphadenopathy = Some(Lymphadenopathy {
        pattern: Some("atipico".to_string()),
        ..Default::default()
    });
    assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Four);
}

#[test]
fn proven_malignancy_indication_is_category_six() {
    let mut exam = BreastExam::new();
    exam.indication = Some("malignidade_comprovada".to_string());
    exam.push_cyst(cyst("simples"));
    assert_eq!(classify(&exam, REFERENCE).category, BiradsCategory::Six);
}

#[test]
fn completeness_is_informational_and_monotonic() {
    let mut exam = BreastExam::new();
    assert_eq!(completeness(&exam), 0);

    exam.indication = Some("rastreamento".to_string());
    let with_indication = completeness(&exam);
    assert!(with_indication > 0);

    exam.parenchyma.density = Some("adiposo".to_string());
    assert!(completeness(&exam) >= with_indication);
    assert_eq!(completeness(&exam), 100);
}
