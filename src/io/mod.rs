//! I/O utilities for file processing and data handling.
//!
//! This module reads and writes NDJSON files of stored chat messages.

pub mod ndjson;

// Re-export commonly used functions
pub use ndjson::{
    parse_message_file, parse_message_reader, parse_ndjson_file_generic, write_ndjson,
    write_ndjson_file,
};
