use std::io::Write;

use crate::foundation::error::{ScrollyError, ScrollyResult};
use crate::telemetry::sink::TelemetrySink;

/// Who is reading: attached to every event.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReaderSession {
    pub user: String,
    pub session: String,
}

/// Payload of a telemetry event.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventBody {
    Animation {
        name: String,
        /// Eased progress within the step.
        relative_position: f64,
        absolute_position: f64,
    },
    Error {
        message: String,
    },
    Alive,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TelemetryEvent {
    pub user: String,
    pub session: String,
    /// Position of the event in the session, starting at 0.
    pub seq: u64,
    #[serde(flatten)]
    pub body: EventBody,
}

/// Delivery channel for flushed batches.
pub trait Transport {
    fn deliver(&mut self, batch: &[TelemetryEvent]) -> ScrollyResult<()>;
}

/// Transport that accepts and discards every batch.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullTransport;

impl Transport for NullTransport {
    fn deliver(&mut self, _batch: &[TelemetryEvent]) -> ScrollyResult<()> {
        Ok(())
    }
}

/// Writes each event as one JSON document per line.
#[derive(Debug)]
pub struct JsonLinesTransport<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesTransport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Transport for JsonLinesTransport<W> {
    fn deliver(&mut self, batch: &[TelemetryEvent]) -> ScrollyResult<()> {
        for event in batch {
            serde_json::to_writer(&mut self.out, event)
                .map_err(|e| ScrollyError::telemetry_send(e.to_string()))?;
            self.out
                .write_all(b"\n")
                .map_err(|e| ScrollyError::telemetry_send(e.to_string()))?;
        }
        self.out
            .flush()
            .map_err(|e| ScrollyError::telemetry_send(e.to_string()))
    }
}

/// Delivery counters for a [`BatchingTelemetry`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeliveryStats {
    pub delivered: u64,
    pub dropped: u64,
    pub failed_sends: u64,
}

/// Buffers events in memory and hands them to a [`Transport`] on `send`.
///
/// A batch is offered to the transport exactly once. When delivery fails the
/// batch is dropped, never retried.
#[derive(Debug)]
pub struct BatchingTelemetry<T: Transport> {
    reader: ReaderSession,
    pending: Vec<TelemetryEvent>,
    next_seq: u64,
    transport: T,
    stats: DeliveryStats,
}

impl<T: Transport> BatchingTelemetry<T> {
    pub fn new(reader: ReaderSession, transport: T) -> Self {
        Self {
            reader,
            pending: Vec::new(),
            next_seq: 0,
            transport,
            stats: DeliveryStats::default(),
        }
    }

    pub fn pending(&self) -> &[TelemetryEvent] {
        &self.pending
    }

    pub fn stats(&self) -> DeliveryStats {
        self.stats
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    fn record(&mut self, body: EventBody) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(TelemetryEvent {
            user: self.reader.user.clone(),
            session: self.reader.session.clone(),
            seq,
            body,
        });
    }
}

impl<T: Transport> TelemetrySink for BatchingTelemetry<T> {
    fn animation(&mut self, name: &str, fraction: f64, absolute_position: f64) {
        self.record(EventBody::Animation {
            name: name.to_string(),
            relative_position: fraction,
            absolute_position,
        });
    }

    fn error(&mut self, message: &str) {
        self.record(EventBody::Error {
            message: message.to_string(),
        });
    }

    fn alive(&mut self) {
        self.record(EventBody::Alive);
    }

    fn send(&mut self) -> ScrollyResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let batch = std::mem::take(&mut self.pending);
        let n = batch.len() as u64;
        match self.transport.deliver(&batch) {
            Ok(()) => {
                self.stats.delivered += n;
                tracing::trace!(events = n, "telemetry batch delivered");
                Ok(())
            }
            Err(err) => {
                self.stats.dropped += n;
                self.stats.failed_sends += 1;
                tracing::warn!(events = n, error = %err, "telemetry batch dropped");
                match err {
                    ScrollyError::TelemetrySendFailure(_) => Err(err),
                    other => Err(ScrollyError::telemetry_send(other.to_string())),
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/telemetry/batch.rs"]
mod tests;
