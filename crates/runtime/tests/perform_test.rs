use std::fmt;
use std::sync::Mutex;

use spoofax_api::SpoofaxApi;
use spoofax_log::{Level, Logger, NoopLogger};
use spoofax_runtime::{RuntimeConfig, SpoofaxRuntime};

/// Logger that keeps every enabled record in memory.
struct RecordingLogger {
    threshold: Level,
    records: Mutex<Vec<(Level, String)>>,
}

impl RecordingLogger {
    fn new(threshold: Level) -> Self {
        Self {
            threshold,
            records: Mutex::new(Vec::new()),
        }
    }

    fn records(&self) -> Vec<(Level, String)> {
        self.records.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn name(&self) -> &str {
        "root"
    }

    fn enabled(&self, level: Level) -> bool {
        level >= self.threshold
    }

    fn log(&self, level: Level, message: fmt::Arguments<'_>) {
        self.records.lock().unwrap().push((level, message.to_string()));
    }
}

#[test]
fn reports_start_configuration_and_finish() {
    let runtime = SpoofaxRuntime::new(RuntimeConfig::new("workbench")).unwrap();
    let logger = RecordingLogger::new(Level::Trace);

    runtime.perform(&logger).expect("perform should succeed");

    let records = logger.records();
    assert_eq!(records.len(), 3, "records: {records:?}");

    assert_eq!(records[0].0, Level::Info);
    assert!(records[0].1.contains("'workbench'"));
    assert!(records[0].1.contains(env!("CARGO_PKG_VERSION")));
    assert!(records[0].1.ends_with("starting"));

    assert_eq!(records[1].0, Level::Debug);
    assert!(records[1].1.starts_with("Configuration:"));

    assert_eq!(records[2], (Level::Info, "Spoofax runtime 'workbench' finished".to_string()));
}

#[test]
fn skips_configuration_when_not_announced() {
    let config = RuntimeConfig {
        announce_config: false,
        ..RuntimeConfig::default()
    };
    let runtime = SpoofaxRuntime::new(config).unwrap();
    let logger = RecordingLogger::new(Level::Trace);

    runtime.perform(&logger).unwrap();

    assert!(logger.records().iter().all(|(level, _)| *level == Level::Info));
}

#[test]
fn respects_logger_threshold() {
    let runtime = SpoofaxRuntime::new(RuntimeConfig::default()).unwrap();
    let logger = RecordingLogger::new(Level::Warn);

    runtime.perform(&logger).unwrap();

    assert!(logger.records().is_empty());
}

#[test]
fn succeeds_with_silent_logger() {
    let runtime = SpoofaxRuntime::new(RuntimeConfig::default()).unwrap();
    assert!(runtime.perform(&NoopLogger::new("root")).is_ok());
}
