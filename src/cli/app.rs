//! Main app runner for a single alt text run

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use log::{debug, warn};

use crate::application::ports::{ConfigStore, CopyTrigger};
use crate::application::{
    AltTextCallbacks, AltTextError, AltTextInput, AltTextOutcome, GenerateAltTextUseCase,
};
use crate::domain::config::AppConfig;
use crate::domain::content::ContentKind;
use crate::infrastructure::{
    create_clipboard, create_copy_trigger, create_notifier, NoOpCopyTrigger, OpenAiDescriber,
    XdgConfigStore,
};

use super::args::RunOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the API root
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Run the copy → describe → write back workflow once
pub async fn run_once(options: RunOptions) -> ExitCode {
    let presenter = Arc::new(Presenter::new());

    // Fail before touching the clipboard
    let Some(api_key) = options.api_key.clone() else {
        presenter.error(&AltTextError::MissingApiKey.to_string());
        return ExitCode::from(EXIT_ERROR);
    };

    // Create adapters
    let trigger: Box<dyn CopyTrigger> = if options.trigger_copy {
        match create_copy_trigger(options.copy_tool).await {
            Ok((trigger, tool)) => {
                debug!("Using {} to send the copy shortcut", tool);
                trigger
            }
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        Box::new(NoOpCopyTrigger::new())
    };
    let (reader, writer) = create_clipboard(options.clipboard_backend);
    let describer = OpenAiDescriber::new(api_key)
        .with_model(options.model.clone())
        .with_base_url(options.base_url.clone())
        .with_max_tokens(options.max_tokens);
    let notifier = create_notifier(options.notify);

    let use_case = GenerateAltTextUseCase::new(trigger, reader, writer, describer, notifier);

    let input = AltTextInput {
        trigger_copy: options.trigger_copy,
        copy_delay: options.copy_delay,
        enable_notify: options.notify,
    };

    let callbacks = stage_callbacks(&presenter);

    match use_case.execute(input, callbacks).await {
        Ok(outcome) => {
            report_outcome(&presenter, &outcome);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Wire use case stages to console output
fn stage_callbacks(presenter: &Arc<Presenter>) -> AltTextCallbacks {
    let on_copy = Arc::clone(presenter);
    let on_read = Arc::clone(presenter);
    let on_start = Arc::clone(presenter);
    let on_end = Arc::clone(presenter);

    AltTextCallbacks {
        on_copy_start: Some(Box::new(move || {
            on_copy.info("Performing copy action...");
        })),
        on_content_read: Some(Box::new(move |kind: ContentKind| {
            on_read.content_found(kind);
        })),
        on_describing_start: Some(Box::new(move || {
            on_start.start_spinner("Generating alt text...");
        })),
        on_describing_end: Some(Box::new(move |ok: bool| {
            if ok {
                on_end.spinner_success("Description received");
            } else {
                on_end.spinner_fail("Description request failed");
            }
        })),
    }
}

fn report_outcome(presenter: &Presenter, outcome: &AltTextOutcome) {
    match outcome {
        AltTextOutcome::Copied { text, .. } => {
            presenter.output(text);
            presenter.success(&format!("Alt text generated and copied to clipboard: {}", text));
        }
        AltTextOutcome::NoContent => {
            presenter.warn("No valid content found in clipboard.");
        }
        AltTextOutcome::DescriptionFailed { .. } => {
            presenter.error("Failed to generate alt text.");
        }
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring config file {}: {}", store.path().display(), e);
            AppConfig::empty()
        }
    };

    // Build env config
    let env_config = AppConfig {
        api_key: env::var(API_KEY_ENV).ok().filter(|s| !s.is_empty()),
        base_url: env::var(BASE_URL_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
