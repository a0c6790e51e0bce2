use crate::domain::model::message::OutboundMessage;
use crate::domain::model::order::InboundOrder;

/// Decides the outcome of one inbound order.
///
/// Implementations return the complete ordered message sequence for the
/// order; the bridge emits that sequence before reading the next request
/// line. A real matching engine (book, price-time priority, partial fills)
/// slots in behind this trait without touching the wire contract.
pub trait LifecycleSimulator: Send {
    fn simulate(&mut self, order: &InboundOrder) -> Vec<OutboundMessage>;
}
