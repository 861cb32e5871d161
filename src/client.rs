use crate::config::PaymenterConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::resources::{
    AffiliatesClient, CreditsClient, InvoiceItemsClient, InvoicesClient, OrdersClient,
    ServicesClient, TicketMessagesClient, TicketsClient, UsersClient,
};

/// Main Paymenter API client.
///
/// Holds one request executor with the shared configuration; every resource
/// accessor borrows it, so calls issued concurrently are fully independent.
///
/// # Example
///
/// ```no_run
/// use paymenter_client::{PaymenterClient, PaymenterConfig};
///
/// # async fn run() -> paymenter_client::Result<()> {
/// let config = PaymenterConfig::new("https://billing.example.com/api", "api-key")?;
/// let client = PaymenterClient::new(config)?;
///
/// let users = client.users().list(None).await?;
/// let ticket = client.tickets().get(42, Some("messages")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PaymenterClient {
    http: HttpClient,
}

impl PaymenterClient {
    /// Create a client from a configuration.
    pub fn new(config: PaymenterConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Affiliates API
    pub fn affiliates(&self) -> AffiliatesClient<'_> {
        AffiliatesClient::new(&self.http)
    }

    /// Users API
    pub fn users(&self) -> UsersClient<'_> {
        UsersClient::new(&self.http)
    }

    /// Orders API
    pub fn orders(&self) -> OrdersClient<'_> {
        OrdersClient::new(&self.http)
    }

    /// Services API
    pub fn services(&self) -> ServicesClient<'_> {
        ServicesClient::new(&self.http)
    }

    /// Credits API
    pub fn credits(&self) -> CreditsClient<'_> {
        CreditsClient::new(&self.http)
    }

    /// Invoices API
    pub fn invoices(&self) -> InvoicesClient<'_> {
        InvoicesClient::new(&self.http)
    }

    /// Invoice items API
    pub fn invoice_items(&self) -> InvoiceItemsClient<'_> {
        InvoiceItemsClient::new(&self.http)
    }

    /// Tickets API
    pub fn tickets(&self) -> TicketsClient<'_> {
        TicketsClient::new(&self.http)
    }

    /// Ticket messages API
    pub fn ticket_messages(&self) -> TicketMessagesClient<'_> {
        TicketMessagesClient::new(&self.http)
    }

    /// The underlying request executor, for endpoints not covered by the
    /// typed resource clients.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}
