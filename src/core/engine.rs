use crate::domain::model::ServiceRecord;
use crate::domain::ports::{AccountApi, Prompt};
use crate::output::OutputContext;
use crate::utils::error::{FireError, Result};
use crate::utils::validation;

/// 互動流程的結束狀態
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// 帳戶內沒有任何服務
    NoServices,
    /// 已顯示所選服務的詳細資訊
    Completed { service: ServiceRecord },
}

pub struct InteractiveSession<A: AccountApi, P: Prompt> {
    api: A,
    prompt: P,
    out: OutputContext,
}

impl<A: AccountApi, P: Prompt> InteractiveSession<A, P> {
    pub fn new(api: A, prompt: P, out: OutputContext) -> Self {
        Self { api, prompt, out }
    }

    /// 單次流程：列出服務、讀一次輸入、顯示詳細資訊
    pub async fn run(&self) -> Result<SessionOutcome> {
        let catalog = self.api.list_services().await?;
        tracing::debug!("Loaded {} services from the account", catalog.len());

        if catalog.is_empty() {
            self.out.notice("No services found.");
            return Ok(SessionOutcome::NoServices);
        }

        self.out.banner();
        for (position, service) in catalog.records().iter().enumerate() {
            self.out.service_line(position + 1, &service.name);
        }

        let input = self
            .prompt
            .read_line("Enter the number to fetch the infos from")?;
        let number = validation::parse_selection(&input, catalog.len())?;
        let service = catalog
            .get(&number.to_string())
            .cloned()
            .ok_or_else(|| FireError::InvalidSelection {
                input: input.trim().to_string(),
                max: catalog.len(),
            })?;

        tracing::debug!("Selected {} ({})", service.name, service.service_type);

        match self.api.fetch_details(&service).await? {
            Some(payload) => {
                self.out.section("Service Information:");
                self.out.render_details(&payload)?;
            }
            None => {
                self.out.notice("No details available for this service type.");
            }
        }

        Ok(SessionOutcome::Completed { service })
    }
}
