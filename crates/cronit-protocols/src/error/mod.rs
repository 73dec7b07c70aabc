//! Error types for the Cronit protocol layer.

mod messages;
mod registration;
mod store;
mod tenant;

pub use messages::*;
pub use registration::*;
pub use store::*;
pub use tenant::*;
