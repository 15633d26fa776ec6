//! Response envelopes serialized by the external routing layer.

use serde::Serialize;

/// Standard API response wrapper (DRY - consistent response format)
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// List response wrapper pairing a result status with an ordered page of items.
///
/// Item order is whatever order the producing query returned; any slicing or
/// sorting is the caller's responsibility before wrapping.
#[derive(Debug, Serialize)]
pub struct ListResult<T: Serialize> {
    pub success: bool,
    pub list: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ListResult<T> {
    pub fn success(list: Vec<T>) -> Self {
        Self {
            success: true,
            list,
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            list: Vec::new(),
            message: Some(message.into()),
        }
    }
}
