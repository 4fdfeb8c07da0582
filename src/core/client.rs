use crate::domain::model::{DetailPayload, ServiceCatalog, ServiceRecord, ServiceType};
use crate::domain::ports::{AccountApi, ConfigProvider};
use crate::utils::error::{FireError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// 24fire API 的驗證標頭
const API_KEY_HEADER: &str = "X-Fire-Apikey";
/// 錯誤回應缺少 message 欄位時的預設文字
const UNKNOWN_ERROR: &str = "Unknown error";

pub struct FireApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct ServicesEnvelope {
    data: ServicesData,
}

#[derive(Debug, Deserialize)]
struct ServicesData {
    services: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ServiceEntry {
    name: String,
    internal_id: String,
}

impl FireApiClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base().trim_end_matches('/').to_string(),
            api_key: config.api_key().map(|key| key.to_string()),
            timeout: Duration::from_secs(config.timeout_seconds()),
        }
    }

    /// 構建帶驗證標頭的 GET 請求；沒有金鑰就不發出任何請求
    fn get_request(&self, path: &str) -> Result<reqwest::RequestBuilder> {
        let api_key = self.api_key.as_deref().ok_or(FireError::MissingApiKey)?;

        let request = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header(API_KEY_HEADER, api_key)
            .timeout(self.timeout);

        Ok(request)
    }

    /// 將非 2xx 回應轉成帶供應商訊息的錯誤
    async fn provider_error(response: reqwest::Response) -> FireError {
        let status = response.status().as_u16();
        let body: serde_json::Value = response.json().await.unwrap_or_default();
        let message = body
            .get("message")
            .and_then(|value| value.as_str())
            .unwrap_or(UNKNOWN_ERROR)
            .to_string();

        FireError::Api { status, message }
    }
}

/// 將按類型分組的回應攤平成顯示順序的服務清單
fn extract_services(envelope: ServicesEnvelope) -> Result<Vec<ServiceRecord>> {
    let mut records = Vec::new();

    for (type_name, group) in envelope.data.services {
        let service_type = ServiceType::from_api_name(&type_name);
        let entries: Vec<ServiceEntry> = serde_json::from_value(group)?;

        for entry in entries {
            records.push(ServiceRecord {
                name: entry.name,
                internal_id: entry.internal_id,
                service_type: service_type.clone(),
            });
        }
    }

    Ok(records)
}

#[async_trait]
impl AccountApi for FireApiClient {
    async fn list_services(&self) -> Result<ServiceCatalog> {
        let request = self.get_request("/account/services")?;

        tracing::debug!("📡 Fetching services from {}/account/services", self.base_url);
        let response = request.send().await?;
        tracing::debug!("📡 Services response status: {}", response.status());

        if !response.status().is_success() {
            return Err(Self::provider_error(response).await);
        }

        // 2xx 但內容解析失敗時歸為解析錯誤，不是網路錯誤
        let body = response.text().await?;
        let envelope: ServicesEnvelope = serde_json::from_str(&body)?;
        let records = extract_services(envelope)?;

        tracing::debug!("📡 Flattened {} services from the account response", records.len());
        Ok(ServiceCatalog::new(records))
    }

    async fn fetch_details(&self, service: &ServiceRecord) -> Result<Option<DetailPayload>> {
        // 依服務類型分派到對應的詳細資訊端點
        let path = match &service.service_type {
            ServiceType::Kvm => format!("/kvm/{}/status", service.internal_id),
            ServiceType::Webspace => format!("/webspace/{}", service.internal_id),
            ServiceType::Domain => format!("/domain/{}", service.internal_id),
            ServiceType::Unknown(raw) => {
                tracing::warn!(
                    "⚠️ Unknown service type '{}' for '{}', skipping detail fetch",
                    raw,
                    service.name
                );
                return Ok(None);
            }
        };

        let request = self.get_request(&path)?;

        tracing::debug!("📡 Fetching details from {}{}", self.base_url, path);
        let response = request.send().await?;
        tracing::debug!("📡 Detail response status: {}", response.status());

        if !response.status().is_success() {
            return Err(Self::provider_error(response).await);
        }

        let body = response.text().await?;
        let payload: DetailPayload = serde_json::from_str(&body)?;
        Ok(Some(payload))
    }
}
