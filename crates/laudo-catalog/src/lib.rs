//! laudo-catalog
//!
//! Option catalogs for the classification modals: the ordered categorical
//! value sets each select is populated from, with the TI-RADS point weights
//! attached to the scoring axes. Catalogs come from the remote configuration
//! store as a resolved snapshot; an embedded fallback with the same shape
//! covers the error and still-loading states.

pub mod error;
pub mod fallback;
pub mod fields;
pub mod remote;
pub mod values;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub use error::CatalogError;
pub use fallback::StaticCatalog;
pub use remote::RemoteCatalog;

/// One selectable option: machine value, display label, and (for TI-RADS
/// scoring axes) the point weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogOption {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u8>,
}

impl CatalogOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            points: None,
        }
    }

    pub fn weighted(value: &str, label: &str, points: u8) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            points: Some(points),
        }
    }
}

/// The classification system a catalog serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum System {
    Tirads,
    Birads,
}

/// Source of options for one classification system.
///
/// Lookups degrade instead of failing: a field the snapshot has not loaded,
/// an unset selection, or an unknown machine value contributes zero points
/// and echoes the machine value as its label. The live-preview caller never
/// sees an error from this trait.
pub trait OptionCatalog: Send + Sync {
    /// Ordered options for a field, or `None` when the catalog does not
    /// (yet) carry the field.
    fn options(&self, field: &str) -> Option<&[CatalogOption]>;

    fn find(&self, field: &str, value: &str) -> Option<&CatalogOption> {
        self.options(field)?.iter().find(|o| o.value == value)
    }

    /// Point weight of a selection on a scoring axis.
    fn points(&self, field: &str, value: Option<&str>) -> u32 {
        value
            .and_then(|v| self.find(field, v))
            .and_then(|o| o.points)
            .map(u32::from)
            .unwrap_or(0)
    }

    /// Display label of a selection, echoing the machine value when the
    /// catalog misses it.
    fn label(&self, field: &str, value: &str) -> String {
        self.find(field, value)
            .map(|o| o.label.clone())
            .unwrap_or_else(|| value.to_string())
    }
}

/// Pick the catalog for a system: the remote snapshot when it has resolved,
/// the embedded fallback otherwise.
pub fn resolve<'a>(remote: Option<&'a RemoteCatalog>, system: System) -> &'a dyn OptionCatalog {
    match remote {
        Some(snapshot) if snapshot.is_ready() => snapshot,
        _ => {
            tracing::debug!(?system, "catalog snapshot not ready, using embedded fallback");
            fallback::catalog(system)
        }
    }
}
