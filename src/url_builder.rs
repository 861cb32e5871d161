//! Request URL construction: base URL + path resolution and query-map
//! flattening.

use crate::error::Result;
use serde_json::Value;
use url::Url;

/// Build the full request URL from the configured base URL, a leading-slash
/// relative path and an optional query map.
///
/// Exactly one trailing slash is stripped from the base URL before the path
/// is appended, so configurations with and without it resolve identically.
///
/// Query entries follow standard multi-value encoding: `null` values are
/// skipped entirely, scalars append one `key=value` pair, and arrays append
/// one pair per non-null element in order, repeating the key.
pub fn build_url(base_url: &str, path: &str, query: Option<&Value>) -> Result<Url> {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    let mut url = Url::parse(&format!("{}{}", base, path))?;

    if let Some(Value::Object(params)) = query {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        if !item.is_null() {
                            pairs.append_pair(key, &scalar_to_string(item));
                        }
                    }
                }
                other => {
                    pairs.append_pair(key, &scalar_to_string(other));
                }
            }
        }
    }

    Ok(url)
}

/// Stringify a query scalar: strings verbatim, everything else via its JSON
/// display form.
fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_path_against_base_url() {
        let url = build_url("https://example.com/api", "/v1/admin/users", None).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/v1/admin/users");
    }

    #[test]
    fn trailing_slash_does_not_change_result() {
        let with = build_url("https://example.com/api/", "/v1/admin/users", None).unwrap();
        let without = build_url("https://example.com/api", "/v1/admin/users", None).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn scalar_params_are_appended() {
        let query = json!({"page": 2, "sort": "-id", "enabled": true});
        let url = build_url("https://example.com", "/v1/admin/users", Some(&query)).unwrap();
        let q = url.query().unwrap();
        assert!(q.contains("page=2"));
        assert!(q.contains("sort=-id"));
        assert!(q.contains("enabled=true"));
    }

    #[test]
    fn null_params_are_skipped() {
        let query = json!({"include": null, "page": 1});
        let url = build_url("https://example.com", "/v1/admin/users", Some(&query)).unwrap();
        assert_eq!(url.query(), Some("page=1"));
    }

    #[test]
    fn array_params_repeat_the_key_in_order() {
        let query = json!({"status": ["open", null, "closed"]});
        let url = build_url("https://example.com", "/v1/admin/tickets", Some(&query)).unwrap();
        assert_eq!(url.query(), Some("status=open&status=closed"));
    }

    #[test]
    fn absent_query_adds_nothing() {
        let url = build_url("https://example.com", "/v1/admin/orders", None).unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn string_values_are_not_json_quoted() {
        let query = json!({"filter[email]": "a@b.com"});
        let url = build_url("https://example.com", "/v1/admin/users", Some(&query)).unwrap();
        assert_eq!(url.query(), Some("filter%5Bemail%5D=a%40b.com"));
    }

    #[test]
    fn invalid_base_url_is_an_error() {
        let result = build_url("not a url", "/v1/admin/users", None);
        assert!(result.is_err());
    }
}
