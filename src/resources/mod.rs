//! Per-resource API clients.
//!
//! Each client is a mechanical enumeration of (method, path, body) tuples
//! over the shared request executor; none carries independent behavior.

pub mod affiliates;
pub mod credits;
pub mod invoice_items;
pub mod invoices;
pub mod orders;
pub mod services;
pub mod ticket_messages;
pub mod tickets;
pub mod users;

pub use affiliates::AffiliatesClient;
pub use credits::CreditsClient;
pub use invoice_items::InvoiceItemsClient;
pub use invoices::InvoicesClient;
pub use orders::OrdersClient;
pub use services::ServicesClient;
pub use ticket_messages::TicketMessagesClient;
pub use tickets::TicketsClient;
pub use users::UsersClient;
