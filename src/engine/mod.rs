//! Engine Module
//!
//! The stdio-facing request/response loop and the shipped lifecycle
//! simulation policy.

pub mod bridge;
pub mod instant_fill;

pub use bridge::EngineBridge;
pub use instant_fill::InstantFillSimulator;
