//! Structural shape checks for API error bodies.
//!
//! The Paymenter API reports errors as a loose "problem details" object with
//! no schema or version tag, so classification is duck-typed: these
//! functions inspect an untyped decoded body and return the narrowed shape
//! when it matches. Non-matching bodies return `None` and fall through to
//! the generic error path.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Standard error-body shape returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub message: Option<String>,
    /// Present on validation failures; values are kept verbatim here since
    /// this shape makes no guarantee about their structure
    pub errors: Option<Map<String, Value>>,
}

/// Problem details where `errors` is guaranteed to be a field -> messages map.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationProblemDetails {
    pub message: Option<String>,
    pub errors: HashMap<String, Vec<String>>,
}

/// Narrow a decoded body to `ProblemDetails` if it structurally matches.
///
/// Matches when the value is a non-null object, `message` (if present) is a
/// string, and `errors` (if present) is an object. No deeper validation.
pub fn problem_details(value: &Value) -> Option<ProblemDetails> {
    let obj = value.as_object()?;

    let message = match obj.get("message") {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return None,
    };

    let errors = match obj.get("errors") {
        None => None,
        Some(Value::Object(map)) => Some(map.clone()),
        Some(_) => return None,
    };

    Some(ProblemDetails { message, errors })
}

/// Narrow a decoded body to `ValidationProblemDetails` if it matches.
///
/// Requires the `ProblemDetails` shape plus a present `errors` object whose
/// every value is an array of strings. Empty arrays are accepted; any
/// non-string element disqualifies the whole body.
pub fn validation_problem_details(value: &Value) -> Option<ValidationProblemDetails> {
    let details = problem_details(value)?;
    let errors = details.errors?;

    let mut validated = HashMap::with_capacity(errors.len());
    for (field, entry) in errors {
        let items = entry.as_array()?;
        let mut messages = Vec::with_capacity(items.len());
        for item in items {
            messages.push(item.as_str()?.to_string());
        }
        validated.insert(field, messages);
    }

    Some(ValidationProblemDetails {
        message: details.message,
        errors: validated,
    })
}
