//! Route handlers

pub mod health;
pub mod verify;

pub use health::health_check;
pub use verify::verify_code;
