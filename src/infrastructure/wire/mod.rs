//! NDJSON wire layer: request-line decoding and response-line emission.

pub mod decoder;
pub mod emitter;

pub use decoder::decode_order;
pub use emitter::{ResponseEmitter, WireError};
