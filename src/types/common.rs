//! Shared JSON:API envelope and pagination types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON:API resource identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

/// To-one relationship wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub data: Option<ResourceIdentifier>,
}

/// To-many relationship wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipList {
    pub data: Vec<ResourceIdentifier>,
}

/// Base resource structure for JSON:API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResource<A, R> {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<A>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<R>,
}

/// Pagination links on list responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Pagination metadata on list responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub current_page: u32,
    pub from: Option<u32>,
    pub path: Option<String>,
    pub per_page: u32,
    pub to: Option<u32>,
}

/// Paginated list envelope returned by `list` operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub links: PaginationLinks,
    pub meta: PaginationMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<Value>>,
}

/// Single-resource envelope returned by `get`/`create`/`update`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleResponse<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included: Option<Vec<Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginated_envelope_round_trips() {
        let json = r#"{
            "data": [{"id": "1", "type": "users", "attributes": null}],
            "links": {"first": "http://x/?page=1", "last": "http://x/?page=1", "prev": null, "next": null},
            "meta": {"current_page": 1, "from": 1, "path": "http://x", "per_page": 15, "to": 1}
        }"#;
        let parsed: PaginatedResponse<Value> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.meta.current_page, 1);
        assert!(parsed.links.next.is_none());
        assert!(parsed.included.is_none());
    }

    #[test]
    fn resource_kind_maps_to_type_field() {
        let json = r#"{"id": "7", "type": "tickets"}"#;
        let parsed: ApiResource<Value, Value> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.kind, "tickets");
        assert_eq!(parsed.id, "7");
        assert!(parsed.attributes.is_none());
    }
}
