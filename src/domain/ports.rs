use crate::domain::model::{DetailPayload, ServiceCatalog, ServiceRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait AccountApi: Send + Sync {
    async fn list_services(&self) -> Result<ServiceCatalog>;
    async fn fetch_details(&self, service: &ServiceRecord) -> Result<Option<DetailPayload>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
}

pub trait Prompt: Send + Sync {
    fn read_line(&self, prompt: &str) -> Result<String>;
}
