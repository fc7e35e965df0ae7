//! Integration tests for the logger
//!
//! These tests verify:
//! - Level gating
//! - Prefix and trace id presence
//! - JSON output decoding
//! - Time diffs between records
//! - Error propagation from sinks
//! - File-backed sinks

use clog::prelude::*;
use clog::{debug, error, info, warn};
use std::fs;
use std::io::{self, Write};
use std::time::Duration;
use tempfile::TempDir;

fn memory_logger() -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::builder().sink(sink.clone()).build();
    (logger, sink)
}

#[test]
fn test_warn_threshold_drops_debug() {
    let (logger, sink) = memory_logger();
    logger.set_level(LogLevel::Warn);

    debug!(logger, "x").unwrap();
    warn!(logger, "y").unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 1, "Only the WARN record should be written");
    assert!(lines[0].ends_with("[WARN] y"));
}

#[test]
fn test_set_prefix() {
    let (logger, sink) = memory_logger();
    logger.set_prefix("test");

    debug!(logger, "test message").unwrap();

    assert!(sink.contents().contains("(test)"), "failed to print expected prefix");
}

#[test]
fn test_set_trace_id_text_and_json() {
    let uuid = "0d01be9f-f965-4398-a046-1e83322cb243";
    let (logger, sink) = memory_logger();
    logger.set_trace_id(uuid);

    debug!(logger, "test message").unwrap();
    logger.set_output_format(OutputFormat::Json);
    debug!(logger, "test message").unwrap();

    let lines = sink.lines();
    assert!(lines[0].contains(&format!("UUID:{}", uuid)));

    let record: LogRecord = serde_json::from_str(&lines[1]).expect("valid JSON line");
    assert_eq!(record.uuid.as_deref(), Some(uuid));
}

#[test]
fn test_json_logging() {
    let (logger, sink) = memory_logger();
    logger.set_output_format(OutputFormat::Json);

    debug!(logger, "debug").unwrap();
    info!(logger, "info").unwrap();
    warn!(logger, "warn").unwrap();
    error!(logger, "error").unwrap();

    let expected = [
        ("debug", "DEBUG"),
        ("info", "INFO"),
        ("warn", "WARN"),
        ("error", "ERROR"),
    ];
    let lines = sink.lines();
    assert_eq!(lines.len(), expected.len());

    for (line, (msg, level)) in lines.iter().zip(expected) {
        let parsed: serde_json::Value = serde_json::from_str(line).expect("valid JSON line");
        assert_eq!(parsed["msg"], msg);
        assert_eq!(parsed["level"], level);
        assert_eq!(parsed["file"], "integration_tests.rs");
        assert!(parsed["time"].is_string());
    }
}

#[test]
fn test_json_indent_output() {
    let (logger, sink) = memory_logger();
    logger
        .set_output_format(OutputFormat::JsonIndent)
        .set_print_source(PrintSource::Disabled)
        .set_time_format("%Y");

    info!(logger, "indented").unwrap();

    let content = sink.contents();
    assert!(content.starts_with("{\n\t\"time\": "));
    assert!(content.ends_with("}\n"));

    let record: LogRecord = serde_json::from_str(&content).expect("valid indented JSON");
    assert_eq!(record.msg, "indented");
    assert!(record.file.is_empty());
    assert_eq!(record.line, 0);
}

#[test]
fn test_print_source_modes() {
    let (logger, sink) = memory_logger();

    let line = line!() + 1;
    info!(logger, "file").unwrap();
    logger.set_print_source(PrintSource::FullPath);
    info!(logger, "full").unwrap();
    logger.set_print_source(PrintSource::Disabled);
    info!(logger, "none").unwrap();

    let lines = sink.lines();
    assert!(lines[0].contains(&format!(" integration_tests.rs:{} [INFO]", line)));
    assert!(lines[1].contains(&format!("tests/integration_tests.rs:{} [INFO]", line + 2)));
    assert!(!lines[2].contains("integration_tests.rs"));
}

#[test]
fn test_color_output() {
    let (logger, sink) = memory_logger();
    logger.enable_color();

    info!(logger, "colored").unwrap();
    logger.disable_color();
    info!(logger, "plain").unwrap();

    let lines = sink.lines();
    assert!(lines[0].contains("[\u{1b}[34mINFO\u{1b}[0m]"));
    assert!(lines[1].contains("[INFO]"));
    assert!(!lines[1].contains('\u{1b}'));
}

#[test]
fn test_json_is_never_colored() {
    let (logger, sink) = memory_logger();
    logger.enable_color().set_output_format(OutputFormat::Json);

    warn!(logger, "careful").unwrap();

    let record: LogRecord = serde_json::from_str(&sink.lines()[0]).unwrap();
    assert_eq!(record.level, LogLevel::Warn);
    assert!(!sink.contents().contains('\u{1b}'));
}

#[test]
fn test_time_diffs() {
    let (logger, sink) = memory_logger();
    logger.enable_diffs().set_output_format(OutputFormat::Json);

    info!(logger, "first").unwrap();
    std::thread::sleep(Duration::from_millis(50));
    debug!(logger, "second").unwrap();

    let lines = sink.lines();
    let first: LogRecord = serde_json::from_str(&lines[0]).unwrap();
    let second: LogRecord = serde_json::from_str(&lines[1]).unwrap();

    assert!(first.diff.is_none(), "first record must not report a diff");
    let diff = second.diff.expect("second record reports a diff");
    assert!(diff >= Duration::from_millis(50), "diff {:?} shorter than sleep", diff);
}

#[test]
fn test_pid_extra() {
    let (logger, sink) = memory_logger();
    logger.enable_pid();

    info!(logger, "with pid").unwrap();

    assert!(sink
        .contents()
        .contains(&format!("PID:{}", std::process::id())));
}

#[test]
fn test_sink_write_failure_is_returned() {
    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "Simulated failure"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let logger = Logger::builder().sink(FailingWriter).build();

    let err = info!(logger, "lost").unwrap_err();
    assert!(matches!(err, LoggerError::SinkWrite { written: 0, .. }));
    assert!(!err.is_configuration());

    // Filtered records never reach the sink
    logger.set_level(LogLevel::Error);
    assert!(info!(logger, "filtered").is_ok());
}

#[test]
fn test_replace_sink_at_runtime() {
    let (logger, first) = memory_logger();
    let second = MemorySink::new();

    info!(logger, "one").unwrap();
    logger.set_sink(second.clone());
    info!(logger, "two").unwrap();

    assert_eq!(first.lines().len(), 1);
    assert_eq!(second.lines().len(), 1);
    assert!(second.contents().contains("two"));
}

#[test]
fn test_file_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("clog_test.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .expect("Failed to open log file");
    let logger = Logger::builder().sink(file).prefix("file").build();

    for i in 0..10 {
        info!(logger, "Message {}", i).unwrap();
    }

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 10, "Should have 10 log entries");
    assert!(lines.iter().all(|line| line.contains("(file) [INFO] Message")));
}

#[test]
fn test_messages_are_verbatim_by_default() {
    let (logger, sink) = memory_logger();

    info!(logger, "first line\nsecond line").unwrap();

    assert!(sink.contents().ends_with("[INFO] first line\nsecond line\n"));
}

#[test]
fn test_log_injection_prevention() {
    let (logger, sink) = memory_logger();
    logger.enable_newline_escaping();

    let malicious_message = "User login\nERROR [2024-10-17] Fake error injected\nINFO Continuation";
    info!(logger, "{}", malicious_message).unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 1, "Log should be a single line, not multiple");
    assert!(lines[0].contains("\\n"));
}

#[test]
fn test_copy_shares_sink_not_options() {
    let (logger, sink) = memory_logger();
    logger.set_prefix("parent");

    let child = logger.copy();
    child.set_prefix("child").set_level(LogLevel::Error);

    info!(logger, "parent info").unwrap();
    info!(child, "child info").unwrap();
    error!(child, "child error").unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("(parent) [INFO] parent info"));
    assert!(lines[1].contains("(child) [ERROR] child error"));
}

#[test]
fn test_config_loaded_from_json() {
    let config = LoggerConfig::from_json(
        r#"{"level": "INFO", "prefix": "cfg", "print_source": "disabled", "time_format": {"Custom": "%H"}}"#,
    )
    .unwrap();
    let sink = MemorySink::new();
    let logger = Logger::builder().config(config).sink(sink.clone()).build();

    debug!(logger, "dropped").unwrap();
    info!(logger, "kept").unwrap();

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    // two-digit hour, empty source
    assert_eq!(&lines[0][2..], "  (cfg) [INFO] kept");
}
