pub mod config;
pub mod core;
pub mod domain;
pub mod output;
pub mod utils;

pub use crate::config::{CliConfig, Settings, DEFAULT_API_BASE};
pub use crate::core::client::FireApiClient;
pub use crate::core::engine::{InteractiveSession, SessionOutcome};
pub use crate::domain::model::{DetailPayload, ServiceCatalog, ServiceRecord, ServiceType};
pub use crate::domain::ports::{AccountApi, ConfigProvider, Prompt};
pub use crate::output::{OutputContext, TerminalPrompt};
pub use crate::utils::error::{FireError, Result};
