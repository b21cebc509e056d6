use clap::Parser;
use gpa_report::app::demo::run_demo;
use gpa_report::domain::ports::{ConfigProvider, Prompter};
use gpa_report::utils::error::{ErrorSeverity, GpaError};
use gpa_report::utils::{logger, validation::Validate};
use gpa_report::{CliConfig, DialoguerPrompter, LocalStorage, ReportConfig, Session, TomlConfig};

fn main() {
    let config = CliConfig::parse();

    // 載入 TOML 配置 (可選)
    let file_config = match config.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!(
                "❌ Failed to load config file '{}': {}",
                config.config.as_deref().unwrap_or_default(),
                e
            );
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(exit_code(&e));
        }
    };

    // 初始化日誌
    let verbose = config.verbose || file_config.as_ref().is_some_and(|c| c.verbose());
    logger::init_cli_logger(verbose);
    tracing::debug!("CLI config: {:?}", config);

    let report_config: ReportConfig = match &file_config {
        Some(toml) => toml.output.clone(),
        None => config.report_config(),
    };

    // 驗證配置
    if let Err(e) = config.validate().and_then(|_| report_config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(exit_code(&e));
    }

    let mut prompter = DialoguerPrompter::new();
    let storage = LocalStorage::new(report_config.output_directory().to_string());

    let banner = "=".repeat(50);
    prompter.say(&banner);
    prompter.say("GPA CALCULATOR");
    prompter.say(&banner);
    prompter.say("");

    if config.demo {
        if let Err(e) = run_demo(storage.clone(), &mut prompter) {
            tracing::error!("❌ Demo failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
        }
        prompter.say("");
    }

    let mut session = Session::new(prompter, storage, report_config);
    let completed = session.run();
    tracing::info!("Session finished after {} calculation(s)", completed);
}

fn exit_code(e: &GpaError) -> i32 {
    // 根據錯誤嚴重程度決定退出碼
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
