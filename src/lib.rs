//! Typed async client for the Paymenter billing and ticketing REST API.
//!
//! The crate is split into a shared request-execution layer — URL and query
//! construction, auth/content header injection, JSON decoding, timeout
//! cancellation and error classification — and nine thin resource clients
//! (users, orders, services, invoices, tickets, ...) that describe one HTTP
//! call each against fixed `/v1/admin/<resource>` paths.
//!
//! Every non-2xx response is raised as a [`PaymenterError`] variant matching
//! the API's error taxonomy, so callers branch on the variant rather than
//! string-matching messages. No retries, caching or rate limiting happen at
//! this layer.

// Core modules
pub mod config;
pub mod error;
pub mod problem;

// Shared execution layer
pub mod http;
pub mod url_builder;

// Resource surface
pub mod client;
pub mod resources;
pub mod types;

// Re-export main types for convenience
pub use client::PaymenterClient;
pub use config::PaymenterConfig;
pub use error::{PaymenterError, Result};
pub use http::{ApiRequest, ApiResponse, HttpClient};
pub use problem::{ProblemDetails, ValidationProblemDetails};
pub use resources::{
    AffiliatesClient, CreditsClient, InvoiceItemsClient, InvoicesClient, OrdersClient,
    ServicesClient, TicketMessagesClient, TicketsClient, UsersClient,
};
