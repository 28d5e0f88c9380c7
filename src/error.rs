use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::models::Person;

/**
 * Failures reported by the pick, vote and journal collaborators
 */
#[derive(Debug, Error)]
pub enum StoreError {
    /**
     * The (voter, thursday) uniqueness constraint rejected an insert
     */
    #[error("{voter} already has a vote for {period}")]
    Conflict { voter: Person, period: NaiveDate },

    #[error("No row with id {0}")]
    Missing(Uuid),

    #[error("Backend error: {0}")]
    Backend(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("No person selected")]
    InvalidVoter,

    #[error("Voting is only available on Thursday")]
    VotingClosed,

    #[error("Could not find movie pick {0}")]
    NotFound(Uuid),

    #[error("No agreed movie for {0}")]
    NoConsensus(NaiveDate),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, Error>;
