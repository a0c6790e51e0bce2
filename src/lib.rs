pub mod config_loader;
pub mod domain;
pub mod engine;
pub mod infrastructure;

pub use domain::constants::*;
pub use domain::model::message::*;
pub use domain::model::order::*;
pub use domain::traits::*;
pub use engine::bridge::*;
pub use engine::instant_fill::*;
pub use infrastructure::wire::*;
