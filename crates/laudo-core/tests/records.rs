use laudo_core::Measurement;
use laudo_core::models::breast::{BreastCyst, BreastExam, BreastNodule, MAX_FINDINGS};
use laudo_core::models::common::Presence;
use laudo_core::models::finding::Finding;
use laudo_core::models::thyroid::{MAX_NODULES, ThyroidExam, ThyroidNodule};

#[test]
fn new_breast_exam_is_empty() {
    let exam = BreastExam::new();
    assert!(exam.has_no_findings());
    assert_eq!(exam.cyst_presence(), Presence::Ausencia);
    assert_eq!(exam.nodule_presence(), Presence::Ausencia);
    assert!(exam.indication.is_none());
}

#[test]
fn presence_follows_the_collection() {
    let mut exam = BreastExam::new();
    assert!(exam.push_cyst(BreastCyst::default()));
    assert_eq!(exam.cyst_presence(), Presence::Presente);

    exam.remove_cyst(0);
    assert!(exam.cysts.is_empty());
    assert_eq!(exam.cyst_presence(), Presence::Ausencia);
    assert_eq!(exam.cyst_presence().to_string(), "ausencia");
}

#[test]
fn collections_cap_at_the_form_limit() {
    let mut exam = BreastExam::new();
    for _ in 0..MAX_FINDINGS {
        assert!(exam.push_nodule(BreastNodule::default()));
    }
    assert!(!exam.push_nodule(BreastNodule::default()));
    assert_eq!(exam.nodules.len(), MAX_FINDINGS);

    let mut thyroid = ThyroidExam::new();
    for _ in 0..MAX_NODULES {
        assert!(thyroid.push_nodule(ThyroidNodule::default()));
    }
    assert!(!thyroid.push_nodule(ThyroidNodule::default()));
}

#[test]
fn remove_out_of_bounds_is_none() {
    let mut exam = BreastExam::new();
    assert!(exam.remove_cyst(0).is_none());
    assert!(exam.remove_nodule(3).is_none());
}

#[test]
fn findings_carry_an_explicit_kind_tag() {
    let mut exam = BreastExam::new();
    exam.push_cyst(BreastCyst {
        count: 1,
        ..Default::default()
    });
    exam.push_nodule(BreastNodule::default());

    let findings = exam.findings();
    assert_eq!(findings.len(), 2);

    let tagged = serde_json::to_value(&findings[0]).unwrap();
    assert_eq!(tagged["kind"], "breast_cyst");
    let tagged = serde_json::to_value(&findings[1]).unwrap();
    assert_eq!(tagged["kind"], "breast_nodule");
}

#[test]
fn records_round_trip_through_json() {
    let mut exam = BreastExam::new();
    exam.indication = Some("rastreamento".to_string());
    exam.push_cyst(BreastCyst {
        cyst_kind: Some("simples".to_string()),
        count: 2,
        ..Default::default()
    });
    exam.nodules.push(BreastNodule {
        shape: Some("oval".to_string()),
        ..Default::default()
    });
    exam.nodules[0].base.measurement = Measurement::new(1.2, 0.9, 0.7);

    let payload = serde_json::to_string(&exam).unwrap();
    let parsed = BreastExam::from_json(&payload).unwrap();
    assert_eq!(parsed, exam);
}

#[test]
fn malformed_json_is_a_core_error() {
    assert!(BreastExam::from_json("{not json").is_err());
    assert!(ThyroidExam::from_json("[]").is_err());
}

#[test]
fn clear_resets_to_the_empty_record() {
    let mut exam = BreastExam::new();
    exam.indication = Some("mastalgia".to_string());
    exam.push_cyst(BreastCyst::default());

    exam.clear();
    assert_eq!(exam, BreastExam::new());
}
