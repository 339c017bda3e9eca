mod catalog_gateway_http;
mod catalog_gateway_retrying;

pub use catalog_gateway_http::HttpCatalogGateway;
pub use catalog_gateway_retrying::{RetryPolicy, RetryingCatalogGateway};
