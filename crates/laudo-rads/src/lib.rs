//! laudo-rads
//!
//! The two classification engines behind the ultrasound modals: the ACR
//! TI-RADS point scorer for thyroid nodules and the BI-RADS worst-finding
//! category chain for breast exams.
//!
//! Every entry point is a total function of its inputs. The caller is a
//! live preview recomputing on each keystroke, so partially-filled records,
//! unknown catalog values, and not-yet-loaded catalogs all degrade (zero
//! points, indeterminate category) instead of erroring.

pub mod birads;
pub mod tirads;

pub use birads::{BiradsAssessment, BiradsCategory};
pub use tirads::{TiradsAssessment, TiradsLevel};
