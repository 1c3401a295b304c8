//! Exchange-rate entry.

use serde::{Deserialize, Serialize};

/// One exchange rate as reported by the gateway.
///
/// The raw `from`/`to` keys are renamed to `source`/`target` at extraction.
/// The rate itself stays a decimal string - the gateway's precision varies
/// per pair and must not be rounded here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Currency the rate converts from.
    #[serde(rename = "from")]
    pub source: String,
    /// Currency the rate converts to.
    #[serde(rename = "to")]
    pub target: String,
    /// Rate value as a decimal string.
    pub course: String,
}
