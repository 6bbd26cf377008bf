//! Snapshot of the remote configuration store.
//!
//! The fetch itself lives outside this workspace; what arrives here is the
//! already-resolved payload, possibly partial or empty while the store is
//! still loading. An empty snapshot simply reports itself not ready and the
//! resolver falls back to the embedded tables.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::{CatalogOption, OptionCatalog};

/// A per-system catalog snapshot: field name → ordered option list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteCatalog {
    #[serde(flatten)]
    fields: HashMap<String, Vec<CatalogOption>>,
}

impl RemoteCatalog {
    pub fn from_json(payload: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn from_value(payload: serde_json::Value) -> Result<Self, CatalogError> {
        Ok(serde_json::from_value(payload)?)
    }

    /// A snapshot with no fields at all is still loading (or failed to
    /// load); either way it is not usable yet.
    pub fn is_ready(&self) -> bool {
        !self.fields.is_empty()
    }
}

impl OptionCatalog for RemoteCatalog {
    fn options(&self, field: &str) -> Option<&[CatalogOption]> {
        self.fields.get(field).map(Vec::as_slice)
    }
}
