use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::measure::Measurement;
use crate::models::breast::{BreastCyst, BreastNodule};
use crate::models::common::Side;
use crate::models::thyroid::ThyroidNodule;

/// Fields every discrete finding shares, flattened into each concrete shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FindingBase {
    pub side: Option<Side>,
    /// Catalog machine value of the anatomic site.
    pub location: Option<String>,
    pub measurement: Measurement,
}

/// One discrete clinical observation, discriminated by an explicit kind tag.
///
/// The closed set of finding shapes the engines know about. Consumers match
/// on the tag rather than probing optional fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Finding {
    ThyroidNodule(ThyroidNodule),
    BreastCyst(BreastCyst),
    BreastNodule(BreastNodule),
}

impl Finding {
    pub fn base(&self) -> &FindingBase {
        match self {
            Finding::ThyroidNodule(n) => &n.base,
            Finding::BreastCyst(c) => &c.base,
            Finding::BreastNodule(n) => &n.base,
        }
    }
}
