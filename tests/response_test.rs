//! Response envelope and error type tests.

use serde_json::json;

use user_registry::domain::User;
use user_registry::errors::AppError;
use user_registry::types::{ApiResponse, ListResult};

// =============================================================================
// ApiResponse Tests
// =============================================================================

#[test]
fn test_api_response_success() {
    let response: ApiResponse<String> = ApiResponse::success("test data".to_string());
    assert!(response.success);
    assert_eq!(response.data.unwrap(), "test data");
    assert!(response.message.is_none());
}

#[test]
fn test_api_response_with_message() {
    let response: ApiResponse<i32> = ApiResponse::with_message(42, "Operation completed");
    assert!(response.success);
    assert_eq!(response.data.unwrap(), 42);
    assert_eq!(response.message.unwrap(), "Operation completed");
}

#[test]
fn test_message_only_response() {
    let response: ApiResponse<()> = ApiResponse::message("Success");
    assert!(response.success);
    assert!(response.data.is_none());
    assert_eq!(response.message.unwrap(), "Success");
}

// =============================================================================
// ListResult Tests
// =============================================================================

#[test]
fn test_list_result_preserves_order() {
    let result = ListResult::success(vec!["a", "b", "c"]);
    assert!(result.success);
    assert_eq!(result.list, vec!["a", "b", "c"]);
    assert!(result.message.is_none());
}

#[test]
fn test_list_result_empty_is_success() {
    let result: ListResult<User> = ListResult::success(vec![]);
    assert!(result.success);
    assert!(result.list.is_empty());
}

#[test]
fn test_list_result_failure() {
    let result: ListResult<User> = ListResult::failure("uid already exists");
    assert!(!result.success);
    assert!(result.list.is_empty());
    assert_eq!(result.message.unwrap(), "uid already exists");
}

#[test]
fn test_list_result_wire_shape() {
    let users = vec![
        User {
            id: 1,
            uid: "alice".to_string(),
            name: "Alice A.".to_string(),
        },
        User {
            id: 2,
            uid: "bob".to_string(),
            name: "Bob B.".to_string(),
        },
    ];

    let value = serde_json::to_value(ListResult::success(users)).unwrap();
    assert_eq!(
        value,
        json!({
            "success": true,
            "list": [
                {"id": 1, "uid": "alice", "name": "Alice A."},
                {"id": 2, "uid": "bob", "name": "Bob B."},
            ],
        })
    );
}

#[test]
fn test_api_response_skips_absent_fields_on_wire() {
    let value = serde_json::to_value(ApiResponse::success(5)).unwrap();
    assert_eq!(value, json!({"success": true, "data": 5}));
}

// =============================================================================
// Error Type Tests
// =============================================================================

#[test]
fn test_app_error_codes() {
    assert_eq!(AppError::NotFound.code(), "NOT_FOUND");
    assert_eq!(
        AppError::unique_violation("uid").code(),
        "UNIQUE_VIOLATION"
    );
    assert_eq!(AppError::validation("bad input").code(), "VALIDATION_ERROR");
    assert_eq!(AppError::internal("boom").code(), "INTERNAL_ERROR");
}

#[test]
fn test_unique_violation_message_names_field() {
    let err = AppError::unique_violation("uid");
    assert_eq!(err.user_message(), "uid already exists");
}

#[test]
fn test_validation_message_passes_through() {
    let err = AppError::validation("uid must be between 1 and 30 characters");
    assert_eq!(
        err.user_message(),
        "uid must be between 1 and 30 characters"
    );
}

#[test]
fn test_database_detail_is_hidden() {
    let err = AppError::Database(sea_orm::DbErr::Custom("connection refused".to_string()));
    assert_eq!(err.user_message(), "A database error occurred");
}

#[test]
fn test_internal_detail_is_hidden() {
    let err = AppError::internal("secret stack trace");
    assert_eq!(err.user_message(), "An internal error occurred");
}
