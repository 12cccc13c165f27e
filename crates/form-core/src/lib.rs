pub mod constants;
pub mod display;
pub mod error;
pub mod memory;
pub mod toggle;

pub use constants::*;
pub use display::*;
pub use error::*;
pub use memory::*;
pub use toggle::*;
