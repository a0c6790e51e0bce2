use crate::domain::model::message::OutboundMessage;
use crate::domain::model::order::InboundOrder;
use crate::domain::traits::LifecycleSimulator;

/// Fixed simulation policy: accept every order, then fill the entire
/// requested quantity at the requested price, instantaneously.
///
/// No rejection path, no partial fills, no resting orders. This is the
/// predictable stand-in a real matching engine will eventually replace
/// behind the same trait.
pub struct InstantFillSimulator;

impl LifecycleSimulator for InstantFillSimulator {
    fn simulate(&mut self, order: &InboundOrder) -> Vec<OutboundMessage> {
        vec![OutboundMessage::ack(order), OutboundMessage::fill(order)]
    }
}
