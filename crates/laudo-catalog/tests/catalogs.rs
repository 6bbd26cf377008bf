use laudo_catalog::{OptionCatalog, RemoteCatalog, System, fallback, fields, resolve};

#[test]
fn fallback_carries_the_point_table() {
    let catalog = fallback::thyroid();
    assert_eq!(catalog.points(fields::COMPOSICAO, Some("solida")), 2);
    assert_eq!(catalog.points(fields::ECOGENICIDADE, Some("muito_hipoecogenico")), 3);
    assert_eq!(catalog.points(fields::FORMATO, Some("mais_alto_que_largo")), 3);
    assert_eq!(catalog.points(fields::MARGENS, Some("regulares")), 0);
    assert_eq!(catalog.points(fields::FOCOS, Some("focos_puntiformes")), 3);
}

#[test]
fn missing_lookups_degrade_to_zero_points() {
    let catalog = fallback::thyroid();
    // Unset selection, unknown value, unknown field.
    assert_eq!(catalog.points(fields::COMPOSICAO, None), 0);
    assert_eq!(catalog.points(fields::COMPOSICAO, Some("inexistente")), 0);
    assert_eq!(catalog.points("campo_desconhecido", Some("solida")), 0);
}

#[test]
fn unknown_label_echoes_the_machine_value() {
    let catalog = fallback::breast();
    assert_eq!(catalog.label(fields::CISTO_TIPO, "simples"), "Cisto simples");
    assert_eq!(catalog.label(fields::CISTO_TIPO, "misterioso"), "misterioso");
}

#[test]
fn options_keep_catalog_order() {
    let options = fallback::thyroid().options(fields::ECOGENICIDADE).unwrap();
    let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(
        values,
        [
            "anecoico",
            "hiperecogenico",
            "isoecogenico",
            "hipoecogenico",
            "muito_hipoecogenico",
        ],
    );
}

#[test]
fn resolver_prefers_a_ready_snapshot() {
    let payload = r#"{
        "composicao": [
            { "value": "solida", "label": "Sólido", "points": 2 },
            { "value": "cistica", "label": "Cístico", "points": 0 }
        ]
    }"#;
    let remote = RemoteCatalog::from_json(payload).unwrap();
    assert!(remote.is_ready());

    let catalog = resolve(Some(&remote), System::Tirads);
    assert_eq!(catalog.label(fields::COMPOSICAO, "solida"), "Sólido");
    // Fields the snapshot has not loaded degrade instead of erroring.
    assert_eq!(catalog.points(fields::FOCOS, Some("focos_puntiformes")), 0);
}

#[test]
fn resolver_falls_back_while_loading() {
    let loading = RemoteCatalog::default();
    assert!(!loading.is_ready());

    let catalog = resolve(Some(&loading), System::Tirads);
    assert_eq!(catalog.points(fields::COMPOSICAO, Some("solida")), 2);

    let catalog = resolve(None, System::Birads);
    assert!(catalog.options(fields::CISTO_TIPO).is_some());
}

#[test]
fn snapshot_parse_failure_is_a_catalog_error() {
    assert!(RemoteCatalog::from_json("{broken").is_err());
}
