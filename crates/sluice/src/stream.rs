//! Drive a processor over a stream of framed messages

use crate::framing::{MessageReader, write_message};
use sluice_transform::Processor;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};

#[cfg(test)]
#[path = "stream_test.rs"]
mod tests;

/// Totals for one run over an input stream
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StreamSummary {
    /// Messages read from the input
    pub received: u64,
    /// Messages written to the output
    pub forwarded: u64,
    /// Messages acknowledged without output
    pub acked: u64,
}

/// Read every message from `input`, run it through `processor` and write
/// forwarded messages to `output`
pub async fn run<R, W>(
    processor: &dyn Processor,
    input: R,
    output: &mut W,
) -> std::io::Result<StreamSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = MessageReader::new(input);
    let mut summary = StreamSummary::default();

    while let Some(msg) = reader.next_message().await? {
        summary.received += 1;

        let outcome = processor.process(&msg);
        if outcome.is_ack() {
            summary.acked += 1;
        }
        for out in outcome.into_messages() {
            write_message(output, &out).await?;
            summary.forwarded += 1;
        }
    }

    output.flush().await?;
    Ok(summary)
}
