//! Configuration domain module

mod app_config;

pub use app_config::{
    AppConfig, LinuxConfig, DEFAULT_BASE_URL, DEFAULT_COPY_DELAY_MS, DEFAULT_MAX_TOKENS,
    DEFAULT_MODEL,
};
