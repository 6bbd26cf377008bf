use laudo_compose::{DOCUMENT_TEMPLATE, Section, assemble, render_document};

#[test]
fn empty_sections_are_dropped_before_rendering() {
    let sections = [
        Section::new("TÉCNICA", "<p>Exame realizado.</p>".to_string()),
        Section::new("ANÁLISE", String::new()),
        Section::new("NOTAS", "   ".to_string()),
    ];
    let document = assemble("ULTRASSONOGRAFIA", &sections).unwrap();

    assert!(document.contains("<p>TÉCNICA:</p>"));
    assert!(!document.contains("ANÁLISE"));
    assert!(!document.contains("NOTAS"));
}

#[test]
fn section_bodies_are_not_escaped() {
    let sections = [Section::new("ANÁLISE", "<p>Cisto 1: cisto simples.</p>".to_string())];
    let document = assemble("ULTRASSONOGRAFIA", &sections).unwrap();
    assert!(document.contains("<p>Cisto 1: cisto simples.</p>"));
    assert!(!document.contains("&lt;"));
}

#[test]
fn custom_templates_render_the_same_sections() {
    let sections = [
        Section::new("TÉCNICA", "<p>Exame realizado.</p>".to_string()),
        Section::new("IMPRESSÃO", "<p>Negativo.</p>".to_string()),
    ];
    let custom = "{% for section in sections %}[{{ section.title }}] {{ section.body | safe }} {% endfor %}";
    let document = render_document(custom, "LAUDO", &sections).unwrap();

    assert!(document.contains("[TÉCNICA] <p>Exame realizado.</p>"));
    assert!(document.contains("[IMPRESSÃO] <p>Negativo.</p>"));
}

#[test]
fn broken_template_is_a_compose_error() {
    let sections = [Section::new("TÉCNICA", "<p>x</p>".to_string())];
    assert!(render_document("{% for %}", "LAUDO", &sections).is_err());
}

#[test]
fn builtin_template_starts_with_the_title() {
    let sections = [Section::new("TÉCNICA", "<p>x</p>".to_string())];
    let document = render_document(DOCUMENT_TEMPLATE, "ULTRASSONOGRAFIA MAMÁRIA", &sections).unwrap();
    assert!(document.starts_with("<p>ULTRASSONOGRAFIA MAMÁRIA</p>"));
}
