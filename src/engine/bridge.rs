// External crate imports
use anyhow::Result;
use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite};

// Internal crate imports
use crate::domain::model::message::OutboundMessage;
use crate::domain::traits::LifecycleSimulator;
use crate::infrastructure::wire::decoder::decode_order;
use crate::infrastructure::wire::emitter::ResponseEmitter;

/// Request/response loop between an owned request channel and an owned
/// response channel.
///
/// One line in: decode, simulate, emit, flush. Strictly sequential, so
/// response order always matches request order and no locking is needed.
/// End of the request stream ends the loop cleanly with no final message.
pub struct EngineBridge<R, W> {
    reader: R,
    pub emitter: ResponseEmitter<W>,
    simulator: Box<dyn LifecycleSimulator>,
}

impl<R, W> EngineBridge<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W, simulator: Box<dyn LifecycleSimulator>) -> Self {
        Self {
            reader,
            emitter: ResponseEmitter::new(writer),
            simulator,
        }
    }

    /// Announce readiness, then process request lines until end-of-stream.
    pub async fn run(&mut self) -> Result<()> {
        self.emitter.emit(&OutboundMessage::ready()).await?;
        info!("Engine ready, waiting for order requests");

        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line).await {
                Ok(0) => {
                    info!("End of request stream, shutting down");
                    break;
                }
                Ok(_) => {
                    // Only the line terminator is trimmed; a whitespace-only
                    // record is still a record.
                    let record = line.trim_end_matches(|c| c == '\n' || c == '\r');
                    if record.is_empty() {
                        continue;
                    }
                    self.process_record(record).await?;
                }
                Err(e) => {
                    warn!("Request channel read failed, shutting down: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Decode one record and emit its full outcome sequence before the next
    /// read. Every decoded order yields exactly one ack followed by one fill
    /// under the shipped policy.
    async fn process_record(&mut self, record: &str) -> Result<()> {
        let order = decode_order(record);
        debug!(
            "Processing order id={:?} symbol={:?} side={:?}",
            order.order_id, order.symbol, order.side
        );

        for message in self.simulator.simulate(&order) {
            self.emitter.emit(&message).await?;
        }
        Ok(())
    }
}
