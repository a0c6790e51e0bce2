pub mod message;
pub mod order;

pub use message::OutboundMessage;
pub use order::InboundOrder;
