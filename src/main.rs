use std::io::Read;

use anyhow::Context;
use clap::Parser;
use small_snap::utils::error::ErrorSeverity;
use small_snap::utils::{logger, validation::Validate};
use small_snap::{
    compare_or_create, round_floats, CliConfig, LocalStorage, SnapshotOutcome, TomlConfig,
};

enum RunOutput {
    Filtered(String),
    Checked(SnapshotOutcome, String),
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-snap CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let content = read_input(&config)?;

    match run(&config, &content) {
        Ok(RunOutput::Filtered(text)) => {
            print!("{}", text);
        }
        Ok(RunOutput::Checked(outcome, name)) => {
            let verb = match outcome {
                SnapshotOutcome::Created => "created",
                SnapshotOutcome::Matched => "matches",
                SnapshotOutcome::Updated => "updated",
            };
            tracing::info!("✅ Snapshot {}: {}", verb, name);
            println!("✅ Snapshot {}: {}", verb, name);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Snapshot check failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn read_input(config: &CliConfig) -> anyhow::Result<String> {
    match &config.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading input file {}", path)),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            Ok(buffer)
        }
    }
}

fn run(config: &CliConfig, content: &str) -> small_snap::Result<RunOutput> {
    // 若指定了設定檔，採用其中的值補齊未給的旗標
    let (snapshot_dir, digits, update) = match &config.config {
        Some(path) => {
            let file = TomlConfig::from_file(path)?;
            file.validate_config()?;
            (
                file.snapshot.dir.clone(),
                config
                    .digits
                    .or_else(|| file.rounding.as_ref().and_then(|r| r.digits)),
                config.update || file.snapshot.update.unwrap_or(false),
            )
        }
        None => (config.snapshot_dir.clone(), config.digits, config.update),
    };

    let rounded = match digits {
        Some(digits) => round_floats(content, digits),
        None => {
            if config.check.is_none() {
                tracing::warn!("No --digits given; content passes through unchanged");
            }
            content.to_string()
        }
    };

    match &config.check {
        Some(name) => {
            let storage = LocalStorage::new(snapshot_dir);
            let outcome = compare_or_create(&storage, name, &rounded, update)?;
            Ok(RunOutput::Checked(outcome, name.clone()))
        }
        None => Ok(RunOutput::Filtered(rounded)),
    }
}
