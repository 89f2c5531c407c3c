use clap::Parser;
use lucas_cube::app::render;
use lucas_cube::config::cli::prompt_count;
use lucas_cube::core::ConfigProvider;
use lucas_cube::utils::{logger, validation::Validate};
use lucas_cube::{CliConfig, LocalStorage, LucasError, ReportEngine, RunConfig, TomlConfig};
use std::io::Write;

fn fail(e: &LucasError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 先讀設定檔，日誌等級可能由它決定
    let file_config = match cli.config.as_deref() {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(e.exit_code());
            }
        },
        None => None,
    };

    let mut config = RunConfig::merge(&cli, file_config.as_ref());

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("Run config: {:?}", config);

    // 設定檔只檢查 [logging]，其餘欄位在合併後的 RunConfig 上檢查
    if let (Some(file), false) = (&file_config, cli.json_logs) {
        if let Err(e) = file.validate_logging() {
            fail(&e);
        }
    }
    if let Err(e) = config.validate() {
        fail(&e);
    }

    if config.count.is_none() {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        match prompt_count(&mut stdin.lock(), &mut stdout.lock()) {
            Ok(count) => config = config.with_count(count),
            Err(e) => fail(&e),
        }
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let engine = ReportEngine::new(storage, config);

    match engine.run() {
        Ok(summary) => {
            let text = render::render_text(&summary.report, engine.config().matches_only());
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
        Err(e) => fail(&e),
    }

    Ok(())
}
