//! Call record model
//!
//! Represents a single call attempt between two phone numbers.

use serde::{Deserialize, Serialize};

/// Call record
///
/// One row of the call log: who called whom, and when the call started.
/// The id is assigned by the store on insert and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRecord {
    /// Unique identifier
    pub id: i64,

    /// Originating phone number
    pub from_number: String,

    /// Destination phone number
    pub to_number: String,

    /// Call start timestamp (ISO 8601, assigned at creation)
    pub start_time: String,
}

impl CallRecord {
    /// Check whether the record involves the given phone number on either side
    #[inline]
    pub fn involves(&self, phone: &str) -> bool {
        self.from_number == phone || self.to_number == phone
    }
}
