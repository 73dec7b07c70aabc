//! Job definition stores.
//!
//! Both stores are insert-only and report an identity collision on `save`
//! as a conflict.

mod file;
mod memory;

pub use file::FileJobDefinitionStore;
pub use memory::MemoryJobDefinitionStore;
