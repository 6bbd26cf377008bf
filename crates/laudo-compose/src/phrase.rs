//! Sentence-building helpers shared by the section composers.

/// Wrap a non-empty text in the only block markup the rich-text sink
/// accepts. Empty text stays empty so unfilled content never produces an
/// empty paragraph placeholder.
pub fn paragraph(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("<p>{text}</p>")
    }
}

/// Join a lead-in and its descriptive clauses into one sentence:
/// `"Nódulo 1: nódulo oval, de margens circunscritas, medindo 1,0 cm."`.
/// Empty clauses are dropped rather than leaving doubled commas.
pub fn clause_sentence(lead: &str, clauses: &[String]) -> String {
    let mut sentence = lead.to_string();
    for clause in clauses.iter().filter(|c| !c.is_empty()) {
        sentence.push_str(", ");
        sentence.push_str(clause);
    }
    sentence.push('.');
    sentence
}

/// Lowercase the first character so a catalog label can sit mid-sentence.
pub fn decapitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Singular or plural noun for a count; counts of zero read as singular
/// because zero means "not yet entered" in this data model.
pub fn pluralize<'a>(count: u32, singular: &'a str, plural: &'a str) -> &'a str {
    if count >= 2 { plural } else { singular }
}
