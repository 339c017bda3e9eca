mod catalog_gateway;

pub use catalog_gateway::{CatalogGateway, ServiceStatus};
