use anyhow::Context;
use cfn_strip::config::cli::LogFormat;
use cfn_strip::core::runner::{completion_message, dry_run_message};
use cfn_strip::utils::error::{ErrorSeverity, StripError};
use cfn_strip::utils::logger;
use cfn_strip::{CliConfig, LocalStorage, StripRunner};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 載入並驗證配置
    let settings = cli
        .settings()
        .context("Failed to load cfn-strip configuration")?;
    tracing::debug!("Resolved settings: {:?}", settings);

    let runner = StripRunner::new(LocalStorage::new(), settings.targets.clone());
    for target in runner.targets() {
        tracing::debug!("Target: {} ({})", target.name, target.resource_type);
    }

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - output will not be written");
        match runner.preview(&settings.input) {
            Ok(outcome) => println!("{}", dry_run_message(&outcome, &settings.input)),
            Err(e) => exit_with(&e),
        }
        return Ok(());
    }

    match runner.run(&settings.input, &settings.output) {
        Ok(outcome) => {
            tracing::info!("✅ Removed {} resource block(s)", outcome.removed_count());
            println!("{}", completion_message(&settings.output));
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn exit_with(e: &StripError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
