//! Section composers shared by both modalities.

use jiff::civil::Date;

use laudo_catalog::{OptionCatalog, fields};
use laudo_core::interval;
use laudo_core::models::common::{PriorStudy, ReportNotes};

use crate::phrase;

/// Canonical one-sentence indication, empty while the category is unset.
pub fn indication(value: Option<&str>, catalog: &dyn OptionCatalog) -> String {
    match value {
        None => String::new(),
        Some(v) => phrase::paragraph(&format!("{}.", catalog.label(fields::INDICACAO, v))),
    }
}

/// Comparative paragraph, rendered only when a prior-study date exists.
/// Without a date the section is omitted entirely rather than filled with
/// placeholder text.
pub fn comparative(prior: Option<&PriorStudy>, reference: Date) -> String {
    let Some(prior) = prior else {
        return String::new();
    };
    let Some(date) = prior.date else {
        return String::new();
    };

    let months = interval::months_between(date, reference);
    let mut text = format!(
        "Exame comparado com estudo anterior de {} (há {})",
        date.strftime("%d/%m/%Y"),
        interval::describe_interval(months),
    );
    if let Some(description) = prior
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
    {
        text.push_str(": ");
        text.push_str(description);
    }
    if !text.ends_with('.') {
        text.push('.');
    }
    phrase::paragraph(&text)
}

/// Checked boilerplate notices plus the free-text observation; omitted when
/// neither is present.
pub fn notes(notes: &ReportNotes, catalog: &dyn OptionCatalog) -> String {
    if notes.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for notice in &notes.notices {
        out.push_str(&phrase::paragraph(&catalog.label(fields::NOTAS, notice)));
    }
    if let Some(observation) = notes
        .observation
        .as_deref()
        .map(str::trim)
        .filter(|o| !o.is_empty())
    {
        out.push_str(&phrase::paragraph(observation));
    }
    out
}
