// tests/test_logger.rs
use amzn_catalog::loggers::core::{LogLevel, LogRecord};
use amzn_catalog::loggers::Logger;
use amzn_catalog::loggers::builder::LoggerConfig;
use arc_swap::ArcSwap;
use std::sync::Arc;
use tokio::sync::mpsc;
use serde_json::Value;
use chrono::Utc;

// Import the macros so they are visible to the test
use amzn_catalog::{trace, debug, info, warn, error};

#[tokio::test]
async fn logger_filters_below_configured_level() {
    let (tx, mut rx) = mpsc::channel::<LogRecord>(16);

    let cfg = LoggerConfig {
        level: LogLevel::Info,
        component: "test-component".to_string(),
    };
    let config = Arc::new(ArcSwap::from_pointee(cfg));
    let logger = Logger { sender: tx.clone(), config: config.clone() };

    trace!(logger, "trace message", "k" => "v1");
    debug!(logger, "debug message", "k" => "v2");
    info!(logger, "info message", "k" => "v3");
    warn!(logger, "warn message", "k" => "v4");
    error!(logger, "error message", "error" => "boom");

    // Collect up to 3 records (info, warn, error)
    let mut recs = Vec::new();
    for _ in 0..3 {
        match tokio::time::timeout(std::time::Duration::from_secs(1), rx.recv()).await {
            Ok(Some(r)) => recs.push(r),
            _ => break,
        }
    }

    assert_eq!(recs.len(), 3, "Expected 3 records (info, warn, error)");

    let levels: Vec<_> = recs.iter().map(|r| r.level.clone()).collect();
    let msgs: Vec<_> = recs.iter().map(|r| r.msg.clone()).collect();

    assert!(levels.contains(&LogLevel::Info));
    assert!(levels.contains(&LogLevel::Warn));
    assert!(levels.contains(&LogLevel::Error));

    assert!(msgs.iter().any(|m| m == "info message"));
    assert!(msgs.iter().any(|m| m == "warn message"));
    assert!(msgs.iter().any(|m| m == "error message"));

    // Context for the info record
    let info_rec = recs.iter().find(|r| r.level == LogLevel::Info).expect("info record missing");
    assert_eq!(info_rec.component, "test-component");
    assert!(info_rec.ctx.contains_key("k"));
    if let Some(Value::String(s)) = info_rec.ctx.get("k") {
        assert_eq!(s, "v3");
    } else {
        panic!("info.k missing or wrong type");
    }

    // Timestamp sanity
    let now = Utc::now();
    let delta = now.signed_duration_since(recs[0].ts);
    assert!(delta.num_seconds() >= 0 && delta.num_minutes() < 5, "timestamp should be recent");
}
