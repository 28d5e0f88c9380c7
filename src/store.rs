//! The data collaborators the movie night logic runs against.
//!
//! Implementations are expected to enforce that a person has at most one vote
//! per Thursday and to report a violation as `StoreError::Conflict`.
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::*;

#[async_trait]
pub trait PickStore {
    /**
     * Every pick, most recently added first
     */
    async fn list_picks(&self) -> Result<Vec<MoviePick>, StoreError>;
    async fn insert_pick(&self, pick: InsertablePick) -> Result<MoviePick, StoreError>;
    /**
     * Returns false when there was no such pick
     */
    async fn delete_pick(&self, id: Uuid) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait VoteStore {
    async fn votes_for_period(&self, period: NaiveDate) -> Result<Vec<ThursdayVote>, StoreError>;
    async fn insert_vote(&self, vote: InsertableVote) -> Result<ThursdayVote, StoreError>;
    async fn update_vote_target(
        &self,
        id: Uuid,
        movie_pick_id: Uuid,
    ) -> Result<ThursdayVote, StoreError>;
}

#[async_trait]
pub trait JournalStore {
    async fn list_watched(&self) -> Result<Vec<WatchedMovie>, StoreError>;
    async fn insert_watched(
        &self,
        movie: InsertableWatchedMovie,
    ) -> Result<WatchedMovie, StoreError>;
}
