//! API route handlers.

mod status;

pub use status::*;
