pub mod breast;
pub mod common;
pub mod finding;
pub mod thyroid;

pub use breast::BreastExam;
pub use common::{Presence, PriorStudy, ReportNotes, Side};
pub use finding::{Finding, FindingBase};
pub use thyroid::ThyroidExam;
