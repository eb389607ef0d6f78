use std::cell::Cell;

use log::{Level, LevelFilter, Log, Metadata, Record};
use shared::ClientConfig;

thread_local! {
    static DEBUG_ENABLED: Cell<bool> = const { Cell::new(false) };
}

static LOGGER: Logger = Logger;

/// Browser console logger with a component prefix, e.g. "[status] refreshed".
///
/// Debug lines are dropped unless `enable_debug_logging` is set in the
/// [`ClientConfig`] handed to [`Logger::init`]. The same logger backs the
/// `log` facade, so records from `shared` land in the console prefixed with
/// their module path.
pub struct Logger;

impl Logger {
    pub fn init(config: &ClientConfig) {
        DEBUG_ENABLED.with(|enabled| enabled.set(config.enable_debug_logging));
        // Only the first call installs; later calls just move the level.
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(Self::max_level());
    }

    fn max_level() -> LevelFilter {
        if Self::debug_enabled() {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn debug_enabled() -> bool {
        DEBUG_ENABLED.with(Cell::get)
    }

    pub fn debug_with_component(component: &str, message: &str) {
        if Self::debug_enabled() {
            gloo::console::debug!(Self::format(component, message));
        }
    }

    pub fn info_with_component(component: &str, message: &str) {
        gloo::console::info!(Self::format(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(Self::format(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(Self::format(component, message));
    }

    fn format(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info || (metadata.level() == Level::Debug && Self::debug_enabled())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        match record.level() {
            Level::Error => Self::error_with_component(record.target(), &message),
            Level::Warn => Self::warn_with_component(record.target(), &message),
            Level::Info => Self::info_with_component(record.target(), &message),
            Level::Debug | Level::Trace => Self::debug_with_component(record.target(), &message),
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_debug_toggle_follows_config() {
        let config = ClientConfig {
            enable_debug_logging: true,
            ..ClientConfig::default()
        };
        Logger::init(&config);
        assert!(Logger::debug_enabled());

        Logger::init(&ClientConfig::default());
        assert!(!Logger::debug_enabled());
    }

    #[wasm_bindgen_test]
    fn test_log_facade_follows_debug_gate() {
        let debug = Metadata::builder().level(Level::Debug).target("shared::exclusion").build();
        let info = Metadata::builder().level(Level::Info).target("shared::window").build();

        Logger::init(&ClientConfig::default());
        assert_eq!(log::max_level(), LevelFilter::Info);
        assert!(!LOGGER.enabled(&debug));
        assert!(LOGGER.enabled(&info));

        Logger::init(&ClientConfig {
            enable_debug_logging: true,
            ..ClientConfig::default()
        });
        assert_eq!(log::max_level(), LevelFilter::Debug);
        assert!(LOGGER.enabled(&debug));
        log::debug!("reaches the console");

        Logger::init(&ClientConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_component_prefix() {
        assert_eq!(Logger::format("status", "refreshed"), "[status] refreshed");
    }
}
