pub mod client;
pub mod request;
pub mod response;

pub use client::HttpClient;
pub use request::ApiRequest;
pub use response::ApiResponse;
