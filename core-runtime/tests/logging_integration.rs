//! Integration tests for logging system

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bridge_traits::error::Result as SinkResult;
use bridge_traits::log::{LogEntry, LogLevel, LoggerSink};
use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
use core_runtime::Error;

#[derive(Default)]
struct CollectingSink {
    entries: Mutex<Vec<LogEntry>>,
}

#[async_trait]
impl LoggerSink for CollectingSink {
    async fn log(&self, entry: LogEntry) -> SinkResult<()> {
        self.entries.lock().unwrap().push(entry);
        Ok(())
    }

    fn min_level(&self) -> LogLevel {
        LogLevel::Debug
    }
}

// The global subscriber can only be installed once per process, so every
// assertion that depends on it lives in this one test.
#[test]
fn test_init_logging_mirrors_workspace_events_to_sink() {
    let sink = Arc::new(CollectingSink::default());
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Debug)
        .with_logger_sink(sink.clone());

    init_logging(config.clone()).unwrap();

    tracing::warn!(
        target: "core_credentials",
        has_service_account = false,
        has_private_key = true,
        "Firebase Admin: missing env variables"
    );
    tracing::debug!(target: "core_auth", bearer = "id-token", "Sending authorization code");
    tracing::debug!(target: "hyper", "connection pooled");

    {
        let entries = sink.entries.lock().unwrap();
        assert_eq!(entries.len(), 2);

        let missing = &entries[0];
        assert_eq!(missing.level, LogLevel::Warn);
        assert_eq!(missing.target, "core_credentials");
        assert_eq!(missing.fields.get("has_private_key").map(String::as_str), Some("true"));

        let exchange = &entries[1];
        assert_eq!(exchange.target, "core_auth");
        assert_eq!(exchange.fields.get("bearer").map(String::as_str), Some("[REDACTED]"));
    }

    assert!(matches!(init_logging(config), Err(Error::Logging(_))));
}

#[test]
fn test_config_chaining() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Json)
        .with_level(LogLevel::Warn)
        .with_filter("core_credentials=debug,core_auth=trace")
        .with_target(false)
        .with_thread_info(true);

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, LogLevel::Warn);
    assert_eq!(
        config.filter.as_deref(),
        Some("core_credentials=debug,core_auth=trace")
    );
    assert!(!config.display_target);
    assert!(config.display_thread_info);
    assert!(config.logger_sink.is_none());
}
