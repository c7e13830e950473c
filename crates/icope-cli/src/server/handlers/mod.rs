//! API request handlers.

mod export;
mod submit;

pub use export::*;
pub use submit::*;
