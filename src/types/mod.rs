//! Typed models for the Paymenter API: JSON:API envelopes, per-resource
//! attribute/relationship records, request bodies and list parameters.
//!
//! These are pass-through data descriptions; all behavior lives in the
//! request-execution layer.

pub mod affiliates;
pub mod common;
pub mod credits;
pub mod invoice_items;
pub mod invoices;
pub mod orders;
pub mod services;
pub mod ticket_messages;
pub mod tickets;
pub mod users;

pub use common::{
    ApiResource, PaginatedResponse, PaginationLinks, PaginationMeta, Relationship,
    RelationshipList, ResourceIdentifier, SingleResponse,
};
