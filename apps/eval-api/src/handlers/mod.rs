//! Handlers 模块

pub mod evaluations;
pub mod health;
pub mod metrics;
pub mod schemes;
pub mod systems;
pub mod weights;

pub use evaluations::*;
pub use health::*;
pub use metrics::*;
pub use schemes::*;
pub use systems::*;
pub use weights::*;
