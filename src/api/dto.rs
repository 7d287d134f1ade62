//! Request and response DTOs for the call log API

use crate::models::CallRecord;
use serde::{Deserialize, Serialize};

/// Request body shared by call creation and update
///
/// Both numbers are optional at the deserialization layer; creation relies
/// on the storage constraint to reject absent values, and update forwards
/// whatever it was given.
#[derive(Debug, Clone, Deserialize)]
pub struct CallNumbers {
    pub from_number: Option<String>,
    pub to_number: Option<String>,
}

/// Query parameters for the call report endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CallReportParams {
    /// Phone number to report on (required; either side of the call)
    pub phone: Option<String>,

    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: i64,

    /// Records per page (no upper bound)
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

impl CallReportParams {
    /// Limit for the database query
    #[inline]
    pub fn limit(&self) -> i64 {
        self.page_size.max(1)
    }

    /// Offset for the database query
    #[inline]
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1) * self.limit()
    }
}

/// Success acknowledgement, optionally carrying a message
#[derive(Debug, Clone, Serialize)]
pub struct Ack {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Ack {
    /// Bare `{"success": true}` acknowledgement
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// Acknowledgement with a message
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }
}

/// One page of call records
#[derive(Debug, Clone, Serialize)]
pub struct CallReportResponse {
    pub success: bool,
    pub data: Vec<CallRecord>,
}

impl CallReportResponse {
    pub fn new(data: Vec<CallRecord>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
