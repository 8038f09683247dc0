//! NDJSON (Newline Delimited JSON) file processing utilities.
//!
//! Stored chat messages are exchanged with the persistence layer as one JSON
//! object per line.

use crate::analytics::StoredMessage;
use crate::error::{ChatPulseError, ChatPulseResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Parse NDJSON entries from any buffered reader.
///
/// Blank lines are skipped; parse errors report the 1-based line number.
pub fn parse_ndjson_reader<T, R, F>(reader: R, validate_entry: Option<F>) -> ChatPulseResult<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
    R: BufRead,
    F: Fn(usize, &T) -> ChatPulseResult<()>,
{
    let mut entries = Vec::new();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        let entry: T = serde_json::from_str(&line).map_err(|e| ChatPulseError::JsonParse {
            line: line_number + 1,
            source: e,
        })?;

        if let Some(ref validator) = validate_entry {
            validator(line_number + 1, &entry)?;
        }

        entries.push(entry);
    }

    Ok(entries)
}

/// Parse an NDJSON file into a list of entries.
pub fn parse_ndjson_file_generic<T, F>(
    path: &Path,
    validate_entry: Option<F>,
) -> ChatPulseResult<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
    F: Fn(usize, &T) -> ChatPulseResult<()>,
{
    let file = File::open(path).map_err(|e| {
        ChatPulseError::generic(
            "opening file",
            format!("Failed to open '{}': {}", path.display(), e),
        )
    })?;

    let entries = parse_ndjson_reader(BufReader::new(file), validate_entry)?;
    debug!(path = %path.display(), entries = entries.len(), "📂 NDJSON file parsed");
    Ok(entries)
}

/// Parse stored chat messages from any buffered reader.
///
/// Every record must name its author; an input without any record is an error.
/// `source` names the input in error messages.
pub fn parse_message_reader<R: BufRead>(
    reader: R,
    source: &str,
) -> ChatPulseResult<Vec<StoredMessage>> {
    let messages = parse_ndjson_reader(reader, Some(validate_message))?;
    ensure_messages(messages, source)
}

/// Parse a file of stored chat messages.
pub fn parse_message_file(path: &Path) -> ChatPulseResult<Vec<StoredMessage>> {
    let messages = parse_ndjson_file_generic(path, Some(validate_message))?;
    ensure_messages(messages, &format!("file '{}'", path.display()))
}

fn validate_message(line: usize, message: &StoredMessage) -> ChatPulseResult<()> {
    if message.username.trim().is_empty() {
        Err(ChatPulseError::generic(
            "validating message",
            format!("line {}: username is empty", line),
        ))
    } else {
        Ok(())
    }
}

fn ensure_messages(
    messages: Vec<StoredMessage>,
    source: &str,
) -> ChatPulseResult<Vec<StoredMessage>> {
    if messages.is_empty() {
        return Err(ChatPulseError::no_data(format!(
            "No chat messages found in {}",
            source
        )));
    }
    Ok(messages)
}

/// Write entries to any writer, one JSON object per line.
pub fn write_ndjson<T, W>(writer: W, entries: &[T]) -> ChatPulseResult<()>
where
    T: Serialize,
    W: Write,
{
    let mut writer = BufWriter::new(writer);
    for entry in entries {
        let line = serde_json::to_string(entry).map_err(ChatPulseError::JsonSerialize)?;
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write entries to an NDJSON file, replacing any existing content.
pub fn write_ndjson_file<T: Serialize>(path: &Path, entries: &[T]) -> ChatPulseResult<()> {
    let file = File::create(path)?;
    write_ndjson(file, entries)?;
    debug!(path = %path.display(), entries = entries.len(), "💾 NDJSON file written");
    Ok(())
}
