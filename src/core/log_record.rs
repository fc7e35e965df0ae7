//! Log record structure and its encodings

use super::call_site::CallSite;
use super::error::Result;
use super::log_level::LogLevel;
use super::output_format::{OutputFormat, PrintSource};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One log line, built per call and encoded straight away.
///
/// Field names follow the JSON encoding. Empty and zero fields are left out
/// of JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub time: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub file: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub line: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    pub level: LogLevel,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub msg: String,
    /// Time since the previous record of the same logger; JSON carries whole milliseconds
    #[serde(default, with = "millis", skip_serializing_if = "millis::is_empty")]
    pub diff: Option<Duration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl LogRecord {
    pub fn new(level: LogLevel, msg: impl Into<String>) -> Self {
        Self {
            time: String::new(),
            file: String::new(),
            line: 0,
            prefix: String::new(),
            level,
            msg: msg.into(),
            diff: None,
            pid: None,
            uuid: None,
        }
    }

    pub fn with_time(mut self, time: String) -> Self {
        self.time = time;
        self
    }

    /// Attach the call site as `mode` renders it; nothing is attached when disabled
    pub fn with_call_site(mut self, site: CallSite, mode: PrintSource) -> Self {
        if let Some(file) = site.display_file(mode) {
            self.file = file.to_string();
            self.line = site.line;
        }
        self
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    pub fn with_diff(mut self, diff: Option<Duration>) -> Self {
        self.diff = diff;
        self
    }

    pub fn with_pid(mut self, pid: Option<u32>) -> Self {
        self.pid = pid;
        self
    }

    pub fn with_uuid(mut self, uuid: Option<&str>) -> Self {
        self.uuid = uuid.map(str::to_string);
        self
    }

    /// Encode the record, newline-terminated, in the requested format
    pub fn encode(&self, format: OutputFormat, color: bool) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text(color)),
            OutputFormat::Json => self.to_json(),
            OutputFormat::JsonIndent => self.to_json_pretty(),
        }
    }

    /// `<time> <file:line>< (prefix)> [<LEVEL>] <msg>< DIFF:d>< UUID:u>< PID:p>`
    pub fn to_text(&self, color: bool) -> String {
        let level = if color {
            self.level.colored_str()
        } else {
            self.level.to_str().to_string()
        };

        let mut out = format!("{} ", self.time);
        if !self.file.is_empty() {
            out.push_str(&format!("{}:{}", self.file, self.line));
        }
        if !self.prefix.is_empty() {
            out.push_str(&format!(" ({})", self.prefix));
        }
        out.push_str(&format!(" [{}] {}", level, self.msg));
        if let Some(diff) = self.diff {
            out.push_str(&format!(" DIFF:{:?}", diff));
        }
        if let Some(ref uuid) = self.uuid {
            out.push_str(&format!(" UUID:{}", uuid));
        }
        if let Some(pid) = self.pid {
            out.push_str(&format!(" PID:{}", pid));
        }
        out.push('\n');
        out
    }

    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::with_capacity(256);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        buf.push(b'\n');
        Ok(String::from_utf8(buf)?)
    }
}

/// Escape line breaks and tabs so a text record cannot span lines.
///
/// Applied to text records only when the logger has newline escaping enabled.
pub fn escape_line_breaks(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn is_empty(diff: &Option<Duration>) -> bool {
        diff.map_or(true, |d| d.as_millis() == 0)
    }

    pub fn serialize<S: Serializer>(diff: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
        let ms = diff.map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX));
        serializer.serialize_u64(ms)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_millis))
    }
}
