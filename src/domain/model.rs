use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceType {
    Kvm,
    Webspace,
    Domain,
    /// 供應商新增、本工具尚未支援的類型（保留原始名稱）
    Unknown(String),
}

impl ServiceType {
    pub fn from_api_name(raw: &str) -> Self {
        match raw {
            "KVM" => ServiceType::Kvm,
            "WEBSPACE" => ServiceType::Webspace,
            "DOMAIN" => ServiceType::Domain,
            other => ServiceType::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ServiceType::Kvm => "KVM",
            ServiceType::Webspace => "WEBSPACE",
            ServiceType::Domain => "DOMAIN",
            ServiceType::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub name: String,
    pub internal_id: String,
    pub service_type: ServiceType,
}

/// 詳細資訊端點回傳的原樣 JSON
pub type DetailPayload = serde_json::Value;

/// 帳戶服務目錄：保留 API 回傳順序，並以 "1".."N" 編號供選取
#[derive(Debug, Clone, Default)]
pub struct ServiceCatalog {
    records: Vec<ServiceRecord>,
    index: HashMap<String, ServiceRecord>,
}

impl ServiceCatalog {
    pub fn new(records: Vec<ServiceRecord>) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(position, record)| ((position + 1).to_string(), record.clone()))
            .collect();

        Self { records, index }
    }

    pub fn records(&self) -> &[ServiceRecord] {
        &self.records
    }

    pub fn get(&self, display_number: &str) -> Option<&ServiceRecord> {
        self.index.get(display_number)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
