// Domain model for inbound order requests
use serde_json::Value;

/// One order request decoded from a request line.
///
/// Fields the caller omitted, or sent with the wrong JSON type, take their
/// defaults: empty string for text fields, 0.0 for numbers. The side is
/// deliberately free text; the wire contract echoes it back verbatim.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InboundOrder {
    pub order_id: String,
    pub symbol: String,
    pub side: String,
    pub qty: f64,
    pub px: f64,
}

impl InboundOrder {
    /// Read the known fields out of a decoded request line.
    ///
    /// Only top-level keys are consulted; a key buried in a nested value or
    /// inside another string never matches. A non-object root yields an
    /// order with every field defaulted.
    pub fn from_value(data: &Value) -> Self {
        Self {
            order_id: data["order_id"].as_str().unwrap_or_default().to_string(),
            symbol: data["symbol"].as_str().unwrap_or_default().to_string(),
            side: data["side"].as_str().unwrap_or_default().to_string(),
            qty: data["qty"].as_f64().unwrap_or_default(),
            px: data["px"].as_f64().unwrap_or_default(),
        }
    }
}
