//! NDJSON (newline-delimited JSON) stream sink.
//!
//! ```ignore
//! let mut sink = JsonStreamSink::stdout();
//! sink.write_events(&rows)?;
//! sink.finish()?;
//! ```

use super::EventRow;
use std::io::{self, BufWriter, Write};

/// Buffered NDJSON writer.
///
/// Each row is serialized directly via `serde_json::to_writer` (no
/// intermediate String).
pub struct JsonStreamSink<W: Write> {
    writer: BufWriter<W>,
    rows_written: usize,
}

impl JsonStreamSink<io::Stdout> {
    /// Write NDJSON to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonStreamSink<W> {
    /// Create a sink wrapping any writer (file, Vec<u8>, etc.).
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(16 * 1024, writer),
            rows_written: 0,
        }
    }

    pub fn write_events(&mut self, rows: &[EventRow]) -> io::Result<()> {
        for row in rows {
            serde_json::to_writer(&mut self.writer, row).map_err(io::Error::other)?;
            self.writer.write_all(b"\n")?;
            self.rows_written += 1;
        }
        Ok(())
    }

    /// Flush and return how many rows were written.
    pub fn finish(mut self) -> io::Result<usize> {
        self.writer.flush()?;
        Ok(self.rows_written)
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::to_rows;
    use alloy_primitives::Address;
    use whitelist_core::{Category, RegistryEvent};

    #[test]
    fn one_line_per_event() {
        let mut buf = Vec::new();
        let mut sink = JsonStreamSink::new(&mut buf);

        let rows = to_rows(
            0,
            Address::repeat_byte(0xAA),
            vec![
                RegistryEvent::Whitelisted {
                    category: Category::Dex,
                    account: Address::repeat_byte(1),
                },
                RegistryEvent::OperatorRemoved {
                    account: Address::repeat_byte(2),
                },
            ],
        );
        sink.write_events(&rows).unwrap();
        assert_eq!(sink.rows_written(), 2);
        assert_eq!(sink.finish().unwrap(), 2);

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.trim().split('\n').collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["event"], "whitelisted");
        assert_eq!(first["category"], "dex");
        assert_eq!(first["seq"], 0);
    }
}
