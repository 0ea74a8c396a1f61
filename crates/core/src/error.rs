//! Error types for Freeday Core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Participant not found: {0}")]
    ParticipantNotFound(String),

    #[error("Day {day} is outside the target month (1..={days_in_month})")]
    InvalidDay { day: u32, days_in_month: u32 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
