//! Line framing for messages on stdin/stdout
//!
//! Each line is one part. An empty line ends the current message; end of
//! input flushes a message that is still pending. Line terminators (`\n` or
//! `\r\n`) are not part of the data.
//!
//! ```text
//! abc        ─┐
//! xyz         ├─ message ["abc", "xyz"]
//! <empty>    ─┘
//! <empty>    ── message []
//! def        ── message ["def"] (flushed at EOF)
//! ```

use sluice_protocol::Message;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

#[cfg(test)]
#[path = "framing_test.rs"]
mod tests;

/// Reads line-framed messages from a buffered reader
pub struct MessageReader<R> {
    reader: R,
    line: Vec<u8>,
    done: bool,
}

impl<R: AsyncBufRead + Unpin> MessageReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            done: false,
        }
    }

    /// Read the next message
    ///
    /// Returns `None` once the input is exhausted and no parts are pending.
    pub async fn next_message(&mut self) -> std::io::Result<Option<Message>> {
        if self.done {
            return Ok(None);
        }

        let mut msg = Message::new();
        loop {
            self.line.clear();
            let n = self.reader.read_until(b'\n', &mut self.line).await?;
            if n == 0 {
                self.done = true;
                return Ok((!msg.is_empty()).then_some(msg));
            }

            let data = trim_line_end(&self.line);
            if data.is_empty() && self.line.ends_with(b"\n") {
                return Ok(Some(msg));
            }
            msg.push(data.to_vec());
        }
    }
}

/// Strip one trailing `\n` or `\r\n`
fn trim_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Write a message as one part per line followed by an empty line
pub async fn write_message<W: AsyncWrite + Unpin>(
    writer: &mut W,
    msg: &Message,
) -> std::io::Result<()> {
    for part in msg {
        writer.write_all(part.get()).await?;
        writer.write_all(b"\n").await?;
    }
    writer.write_all(b"\n").await
}
