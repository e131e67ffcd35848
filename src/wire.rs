//! Wire schema for the results endpoint.
//!
//! The endpoint returns a JSON array of competitor objects. These DTOs decode
//! that array verbatim; conversion into the core model happens in
//! [`crate::validate`]. A body that is not an array of records is an
//! endpoint-level decode failure, never a partial success.

use serde::{Deserialize, Serialize};

/// Raw competitor record as delivered by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResult {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub division: String,
    pub nationality: String,
    /// Total finish time as an `HH:MM:SS` string, parsed during validation.
    pub total_time: String,
    pub splits: Vec<RawSplit>,
}

/// Raw checkpoint entry within a competitor record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSplit {
    pub name: String,
    pub time: String,
}
