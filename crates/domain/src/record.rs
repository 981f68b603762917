//! `ServiceRecord` — one priced dental procedure line.

use serde::{Deserialize, Serialize};

/// A single priced service as it appears in the source dataset.
///
/// Every field is a string, including the three monetary columns: amounts
/// keep their original formatting (currency punctuation included) and are
/// never parsed to numbers. All fields are independently optional at parse
/// time — an absent source column yields an empty string, never a missing
/// field. Records carry no unique key; duplicate codes are permitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Procedure code identifier.
    pub code: String,
    /// Grouping label used by the category selector.
    pub category: String,
    /// Human-readable service name.
    pub service: String,
    /// Standard price, string-formatted.
    pub price: String,
    /// Amount covered by the Aasandha insurance scheme; empty means
    /// "not covered"/"not applicable".
    pub aasandha: String,
    /// Amount payable by the patient.
    pub patient: String,
}
