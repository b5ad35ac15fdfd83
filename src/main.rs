//! AltScribe CLI entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, warn};

use alt_scribe::cli::{
    config_exit_code, handle_config_command, load_merged_config, run_once, Cli, Commands,
    Presenter, RunOptions, EXIT_USAGE_ERROR,
};
use alt_scribe::domain::config::{AppConfig, LinuxConfig};
use alt_scribe::infrastructure::{ClipboardBackend, CopyToolPreference, XdgConfigStore};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    // Variables already set in the process environment win over .env
    let dotenv = dotenvy::dotenv();
    env_logger::init();
    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Ignoring unreadable .env file: {}", e),
    }

    let cli = Cli::parse();
    let presenter = Presenter::new();

    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(config_exit_code(&e));
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        api_key: None, // API key comes from env/file only
        model: cli.model.clone(),
        copy_delay_ms: cli.delay,
        trigger_copy: if cli.no_copy { Some(false) } else { None },
        notify: if cli.notify { Some(true) } else { None },
        clipboard_backend: cli.clipboard_backend.clone(),
        linux: cli.copy_tool.clone().map(|tool| LinuxConfig {
            copy_tool: Some(tool),
        }),
        ..Default::default()
    };

    let config = load_merged_config(cli_config).await;

    let copy_tool = match config.copy_tool_or_default().parse::<CopyToolPreference>() {
        Ok(tool) => tool,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let clipboard_backend = match config.clipboard_backend_or_default().parse::<ClipboardBackend>()
    {
        Ok(backend) => backend,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let options = RunOptions {
        api_key: config.api_key.clone(),
        model: config.model_or_default().to_string(),
        base_url: config.base_url_or_default().to_string(),
        max_tokens: config.max_tokens_or_default(),
        trigger_copy: config.trigger_copy_or_default(),
        copy_delay: config.copy_delay_or_default(),
        copy_tool,
        clipboard_backend,
        notify: config.notify_or_default(),
    };

    run_once(options).await
}
