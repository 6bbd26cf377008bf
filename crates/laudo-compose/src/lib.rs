//! laudo-compose
//!
//! Turns the structured exam records (and the engine outputs derived from
//! them) into the report document the rich-text editor receives. One pure
//! function per section, `<p>`/`<br>` markup only, and byte-identical
//! output for an unchanged record, so the live preview can recompose on
//! every keystroke.

pub mod breast;
pub mod document;
pub mod error;
pub mod phrase;
pub mod sections;
pub mod thyroid;

pub use breast::breast_report;
pub use document::{DOCUMENT_TEMPLATE, Section, assemble, render_document};
pub use error::ComposeError;
pub use thyroid::thyroid_report;
