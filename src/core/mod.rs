pub mod client;
pub mod engine;

pub use crate::domain::model::{DetailPayload, ServiceCatalog, ServiceRecord, ServiceType};
pub use crate::domain::ports::{AccountApi, ConfigProvider, Prompt};
pub use crate::utils::error::Result;
