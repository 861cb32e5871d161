//! Response envelope and non-2xx error classification.

use crate::error::PaymenterError;
use crate::problem::{problem_details, validation_problem_details, ProblemDetails};
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::HashMap;

/// Fallback message when a status code has no canonical reason phrase and
/// the body carries no usable message
const UNKNOWN_ERROR: &str = "Unknown error";

/// Success envelope returned to callers.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// Decoded response body; `None` for 204 or non-JSON responses
    pub data: Option<T>,
    /// HTTP status code
    pub status: u16,
    /// All response headers, keys lower-cased
    pub headers: HashMap<String, String>,
}

/// Whether a content-type header value indicates a JSON payload.
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| {
        ct.contains("application/json") || ct.contains("application/vnd.api+json")
    })
}

/// Classify a non-2xx response into the error taxonomy.
///
/// The body is best-effort decoded: only when the content type is JSON, and
/// a decode failure simply yields an absent body. Rules are evaluated in
/// order; the validation guard (400/422 with a strict field-error map) is
/// narrower than the generic problem-details match, so a 422 whose body
/// does not satisfy it falls through to the generic variant.
pub fn classify(status: StatusCode, content_type: Option<&str>, body: &str) -> PaymenterError {
    let decoded: Option<Value> = if is_json_content_type(content_type) {
        serde_json::from_str(body).ok()
    } else {
        None
    };

    let status_text = status
        .canonical_reason()
        .filter(|reason| !reason.is_empty())
        .unwrap_or(UNKNOWN_ERROR);
    let code = status.as_u16();

    let details = decoded.as_ref().and_then(problem_details);

    match code {
        401 => PaymenterError::Authentication {
            message: status_text.to_string(),
            status: code,
            details,
        },
        403 => PaymenterError::Authorization {
            message: status_text.to_string(),
            status: code,
            details,
        },
        404 => PaymenterError::NotFound {
            message: status_text.to_string(),
            status: code,
            details,
        },
        400 | 422 => {
            if let Some(validation) = decoded.as_ref().and_then(validation_problem_details) {
                let message = validation
                    .message
                    .clone()
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| status_text.to_string());
                return PaymenterError::Validation {
                    message,
                    status: code,
                    validation_errors: validation.errors,
                    // invariant: a validation match implies a problem-details match
                    details: details.unwrap_or(ProblemDetails {
                        message: None,
                        errors: None,
                    }),
                };
            }
            generic_error(code, status_text, details)
        }
        _ => generic_error(code, status_text, details),
    }
}

fn generic_error(code: u16, status_text: &str, details: Option<ProblemDetails>) -> PaymenterError {
    match details {
        Some(details) => {
            let message = details
                .message
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| status_text.to_string());
            PaymenterError::Api {
                message,
                status: Some(code),
                details: Some(details),
            }
        }
        None => PaymenterError::Api {
            message: status_text.to_string(),
            status: Some(code),
            details: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: Option<&str> = Some("application/json");

    #[test]
    fn status_401_is_authentication() {
        let err = classify(
            StatusCode::UNAUTHORIZED,
            JSON,
            r#"{"message":"Unauthorized"}"#,
        );
        match err {
            PaymenterError::Authentication {
                message,
                status,
                details,
            } => {
                assert_eq!(message, "Unauthorized");
                assert_eq!(status, 401);
                assert_eq!(details.unwrap().message.as_deref(), Some("Unauthorized"));
            }
            other => panic!("expected Authentication, got {:?}", other),
        }
    }

    #[test]
    fn status_403_is_authorization() {
        let err = classify(StatusCode::FORBIDDEN, JSON, "{}");
        assert!(matches!(
            err,
            PaymenterError::Authorization { status: 403, .. }
        ));
    }

    #[test]
    fn status_404_is_not_found() {
        let err = classify(StatusCode::NOT_FOUND, None, "");
        match err {
            PaymenterError::NotFound {
                message,
                status,
                details,
            } => {
                assert_eq!(message, "Not Found");
                assert_eq!(status, 404);
                assert!(details.is_none());
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn status_422_with_field_errors_is_validation() {
        let body = r#"{"message":"Invalid data","errors":{"code":["Code is required"]}}"#;
        let err = classify(StatusCode::UNPROCESSABLE_ENTITY, JSON, body);
        match err {
            PaymenterError::Validation {
                message,
                status,
                validation_errors,
                ..
            } => {
                assert_eq!(message, "Invalid data");
                assert_eq!(status, 422);
                assert_eq!(
                    validation_errors.get("code"),
                    Some(&vec!["Code is required".to_string()])
                );
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn status_400_with_field_errors_is_validation() {
        let body = r#"{"errors":{"email":["Email is invalid"]}}"#;
        let err = classify(StatusCode::BAD_REQUEST, JSON, body);
        match err {
            PaymenterError::Validation { message, .. } => {
                // no body message, so the status text is used
                assert_eq!(message, "Bad Request");
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn status_422_without_errors_falls_through_to_generic() {
        let err = classify(StatusCode::UNPROCESSABLE_ENTITY, JSON, r#"{"message":"oops"}"#);
        match err {
            PaymenterError::Api {
                message, status, ..
            } => {
                assert_eq!(message, "oops");
                assert_eq!(status, Some(422));
            }
            other => panic!("expected Api, got {:?}", other),
        }
    }

    #[test]
    fn status_422_with_non_string_errors_falls_through() {
        let body = r#"{"message":"bad","errors":{"code":[1,2]}}"#;
        let err = classify(StatusCode::UNPROCESSABLE_ENTITY, JSON, body);
        assert!(matches!(err, PaymenterError::Api { .. }));
    }

    #[test]
    fn unknown_status_with_unparsable_body_uses_fallback_message() {
        // 599 has no canonical reason phrase
        let status = StatusCode::from_u16(599).unwrap();
        let err = classify(status, JSON, "not json");
        match err {
            PaymenterError::Api {
                message,
                status,
                details,
            } => {
                assert_eq!(message, "Unknown error");
                assert_eq!(status, Some(599));
                assert!(details.is_none());
            }
            other => panic!("expected Api, got {:?}", other),
        }
    }

    #[test]
    fn status_500_with_problem_body_keeps_body_message() {
        let err = classify(
            StatusCode::INTERNAL_SERVER_ERROR,
            Some("application/vnd.api+json"),
            r#"{"message":"database unavailable"}"#,
        );
        match err {
            PaymenterError::Api { message, .. } => assert_eq!(message, "database unavailable"),
            other => panic!("expected Api, got {:?}", other),
        }
    }

    #[test]
    fn non_json_content_type_skips_body_decoding() {
        let err = classify(
            StatusCode::UNAUTHORIZED,
            Some("text/html"),
            r#"{"message":"looks like json"}"#,
        );
        match err {
            PaymenterError::Authentication { details, .. } => assert!(details.is_none()),
            other => panic!("expected Authentication, got {:?}", other),
        }
    }

    #[test]
    fn is_json_content_type_matches_both_media_types() {
        assert!(is_json_content_type(Some("application/json")));
        assert!(is_json_content_type(Some(
            "application/vnd.api+json; charset=utf-8"
        )));
        assert!(!is_json_content_type(Some("text/plain")));
        assert!(!is_json_content_type(None));
    }
}
