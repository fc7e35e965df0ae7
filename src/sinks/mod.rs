//! Output targets for encoded records

pub mod memory;
pub mod shared;

pub use memory::MemorySink;
pub use shared::Sink;
