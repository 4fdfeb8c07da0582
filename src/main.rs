use clap::Parser;
use fire_cli::utils::{logger, validation::Validate};
use fire_cli::{CliConfig, FireApiClient, InteractiveSession, OutputContext, Settings, TerminalPrompt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting fire-cli");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 讀入並合併配置
    let settings = match Settings::resolve(cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration loading failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 建立輸出、API 客戶端與互動流程
    let out = OutputContext::new(settings.no_color);
    let api = FireApiClient::new(&settings);
    let session = InteractiveSession::new(api, TerminalPrompt::new(), out);

    match session.run().await {
        Ok(outcome) => {
            tracing::debug!("Session finished: {:?}", outcome);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Session failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                fire_cli::utils::error::ErrorSeverity::Low => 0, // 警告，但成功
                fire_cli::utils::error::ErrorSeverity::Medium => 2, // 輸入錯誤
                fire_cli::utils::error::ErrorSeverity::High => 1, // 請求或配置錯誤
                fire_cli::utils::error::ErrorSeverity::Critical => 3, // 系統錯誤
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
