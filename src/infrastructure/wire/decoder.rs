use log::debug;
use serde_json::Value;

use crate::domain::model::order::InboundOrder;

/// Decode one request line into an order.
///
/// The line is parsed once into a JSON value tree, then the known fields are
/// read from the top level of that tree. Decoding never fails: a line that
/// is not valid JSON degrades to an order with every field defaulted, and
/// the caller still gets its ack/fill pair. Missing and malformed fields are
/// indistinguishable from legitimately sparse orders on the wire; request
/// validation is the caller's job.
pub fn decode_order(line: &str) -> InboundOrder {
    let data = match serde_json::from_str::<Value>(line) {
        Ok(value) => value,
        Err(e) => {
            debug!("Request line is not valid JSON, fields take defaults: {}", e);
            Value::Null
        }
    };
    InboundOrder::from_value(&data)
}
