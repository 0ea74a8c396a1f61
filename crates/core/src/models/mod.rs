//! Data models for Freeday

mod participant;
mod room;

pub use participant::*;
pub use room::*;
