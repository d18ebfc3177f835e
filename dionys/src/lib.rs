pub mod abi;
pub mod events;
pub mod format;

pub use events::*;
pub use format::*;
