//! Report rendering
//!
//! Renders one outcome per callback invocation, either as the banner block or
//! as a JSON line.

use callback_dispatch::{classify, OutcomeKind};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

pub const BANNER_RULE: &str = "=================================";
pub const BANNER_TITLE: &str = "==== Beginning Callback Test ====";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One line of JSON output
#[derive(Debug, Serialize)]
struct JsonRecord<'a> {
    selector: i64,
    kind: OutcomeKind,
    error: Option<&'a str>,
    result: Option<&'a str>,
}

/// Render the pair a continuation received for `selector`
pub fn write_outcome<W: Write>(
    out: &mut W,
    format: OutputFormat,
    selector: i64,
    error: Option<&str>,
    result: Option<&str>,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, error, result),
        OutputFormat::Json => write_json(out, selector, error, result),
    }
}

fn write_text<W: Write>(out: &mut W, error: Option<&str>, result: Option<&str>) -> io::Result<()> {
    writeln!(out, "{}", BANNER_RULE)?;
    writeln!(out, "{}", BANNER_TITLE)?;
    writeln!(out, "{}", BANNER_RULE)?;
    writeln!(out, "Error: {}", or_null(error))?;
    writeln!(out, "Result: {}", or_null(result))
}

fn write_json<W: Write>(
    out: &mut W,
    selector: i64,
    error: Option<&str>,
    result: Option<&str>,
) -> io::Result<()> {
    let record = JsonRecord {
        selector,
        kind: classify(selector),
        error,
        result,
    };
    serde_json::to_writer(&mut *out, &record)?;
    writeln!(out)
}

/// JSON line for the captured value
#[derive(Debug, Serialize)]
struct CapturedRecord<'a> {
    selector: i64,
    captured: Option<&'a str>,
}

/// Render the value the caller captured from inside the callback
pub fn write_captured<W: Write>(
    out: &mut W,
    format: OutputFormat,
    selector: i64,
    captured: Option<&str>,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "callMainScopeVariable: {}", or_null(captured)),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &CapturedRecord { selector, captured })?;
            writeln!(out)
        }
    }
}

fn or_null(slot: Option<&str>) -> &str {
    slot.unwrap_or("null")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(format: OutputFormat, selector: i64, error: Option<&str>, result: Option<&str>) -> String {
        let mut buf = Vec::new();
        write_outcome(&mut buf, format, selector, error, result).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_block() {
        let text = render(OutputFormat::Text, 1, Some("This is an error!"), None);
        assert_eq!(
            text,
            "=================================\n\
             ==== Beginning Callback Test ====\n\
             =================================\n\
             Error: This is an error!\n\
             Result: null\n"
        );
    }

    #[test]
    fn test_json_line() {
        let line = render(OutputFormat::Json, 2, None, Some("This is a success!"));
        assert_eq!(
            line,
            "{\"selector\":2,\"kind\":\"success\",\"error\":null,\"result\":\"This is a success!\"}\n"
        );
    }

    #[test]
    fn test_captured_line() {
        let mut buf = Vec::new();
        write_captured(&mut buf, OutputFormat::Text, 1, None).unwrap();
        write_captured(&mut buf, OutputFormat::Text, 2, Some("This is a success!")).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "callMainScopeVariable: null\ncallMainScopeVariable: This is a success!\n"
        );
    }

    #[test]
    fn test_captured_json_line() {
        let mut buf = Vec::new();
        write_captured(&mut buf, OutputFormat::Json, 9, None).unwrap();
        write_captured(&mut buf, OutputFormat::Json, 2, Some("This is a success!")).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "{\"selector\":9,\"captured\":null}\n{\"selector\":2,\"captured\":\"This is a success!\"}\n"
        );
    }
}
