//! laudo-core
//!
//! Pure domain types for structured ultrasound reporting: measurements,
//! calendar intervals, and the exam records edited by the BI-RADS and
//! TI-RADS modals. No I/O and no persistence; records live only for the
//! duration of one report-authoring session.

pub mod error;
pub mod format;
pub mod interval;
pub mod measure;
pub mod models;

pub use error::CoreError;
pub use measure::Measurement;
