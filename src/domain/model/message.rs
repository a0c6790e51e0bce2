use chrono::Utc;
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::constants::STATUS_READY;
use crate::domain::model::order::InboundOrder;

/// Messages the engine writes back to the orchestrator.
///
/// The serialized field order is part of the wire contract: callers match
/// response lines byte-for-byte, so variants must keep their declared field
/// order and the tag must come first.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutboundMessage {
    /// Readiness handshake, the only message not triggered by a request.
    EngineStatus { status: String, ts_ms: i64 },

    /// Acknowledgement that an order request was received and accepted.
    Ack {
        order_id: String,
        symbol: String,
        ts_ms: i64,
    },

    /// Execution report for a traded quantity at a given price.
    Fill {
        order_id: String,
        symbol: String,
        side: String,
        #[serde(serialize_with = "serialize_wire_number")]
        qty: f64,
        #[serde(serialize_with = "serialize_wire_number")]
        px: f64,
        ts_ms: i64,
    },
}

impl OutboundMessage {
    /// Readiness handshake carrying the current timestamp.
    pub fn ready() -> Self {
        OutboundMessage::EngineStatus {
            status: STATUS_READY.to_string(),
            ts_ms: now_ms(),
        }
    }

    /// Acknowledgement for the given order.
    pub fn ack(order: &InboundOrder) -> Self {
        OutboundMessage::Ack {
            order_id: order.order_id.clone(),
            symbol: order.symbol.clone(),
            ts_ms: now_ms(),
        }
    }

    /// Execution report for the full requested quantity at the requested price.
    pub fn fill(order: &InboundOrder) -> Self {
        OutboundMessage::Fill {
            order_id: order.order_id.clone(),
            symbol: order.symbol.clone(),
            side: order.side.clone(),
            qty: order.qty,
            px: order.px,
            ts_ms: now_ms(),
        }
    }
}

/// Current wall-clock time in integer milliseconds since the Unix epoch.
/// Taken at message-construction time; non-decreasing within a run is
/// expected but not enforced against clock adjustments.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

// Largest magnitude at which every whole f64 still maps to a distinct i64.
const MAX_INTEGRAL_F64: f64 = 9_007_199_254_740_992.0; // 2^53

// Whole values serialize without a fractional part ("qty":10, not 10.0) so
// fill lines mirror the request bytes; everything else uses the shortest
// round-trippable decimal.
fn serialize_wire_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_INTEGRAL_F64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
