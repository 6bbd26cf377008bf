//! pt-BR numeric formatting.
//!
//! Reports use the comma decimal separator. Formatting is the only locale
//! concern this engine owns; everything else is canonical sentence text.

/// Format a value with `places` decimal places and a comma separator.
pub fn decimal_br(value: f64, places: usize) -> String {
    format!("{value:.places$}").replace('.', ",")
}

/// Format a centimeter dimension the way measurements appear in report text.
pub fn cm(value: f64) -> String {
    decimal_br(value, 1)
}

/// Format a millimeter caliber (one decimal place, comma separator).
pub fn mm(value: f64) -> String {
    decimal_br(value, 1)
}
