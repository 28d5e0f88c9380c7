use async_std::sync::RwLock;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::*;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::*;
use crate::store::{JournalStore, PickStore, VoteStore};

/**
 * In-process store holding every table in memory
 *
 * Rows are kept newest first, the order the hosted tables are read in.
 */
#[derive(Debug, Default)]
pub struct MemoryStore {
    picks: RwLock<Vec<MoviePick>>,
    votes: RwLock<Vec<ThursdayVote>>,
    watched: RwLock<Vec<WatchedMovie>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /**
     * Every vote across all Thursdays
     */
    pub async fn all_votes(&self) -> Vec<ThursdayVote> {
        self.votes.read().await.clone()
    }
}

#[async_trait]
impl PickStore for MemoryStore {
    async fn list_picks(&self) -> Result<Vec<MoviePick>, StoreError> {
        Ok(self.picks.read().await.clone())
    }

    async fn insert_pick(&self, pick: InsertablePick) -> Result<MoviePick, StoreError> {
        let pick = pick.into_pick(generate_uuid(), Utc::now());
        self.picks.write().await.insert(0, pick.clone());
        Ok(pick)
    }

    async fn delete_pick(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut picks = self.picks.write().await;
        let before = picks.len();
        picks.retain(|p| p.id != id);
        Ok(picks.len() != before)
    }
}

#[async_trait]
impl VoteStore for MemoryStore {
    async fn votes_for_period(&self, period: NaiveDate) -> Result<Vec<ThursdayVote>, StoreError> {
        Ok(self
            .votes
            .read()
            .await
            .iter()
            .filter(|v| v.thursday_date == period)
            .cloned()
            .collect())
    }

    async fn insert_vote(&self, vote: InsertableVote) -> Result<ThursdayVote, StoreError> {
        let mut votes = self.votes.write().await;

        if votes
            .iter()
            .any(|v| v.voted_by == vote.voted_by && v.thursday_date == vote.thursday_date)
        {
            debug!("Rejecting duplicate vote: {:?}", vote);
            return Err(StoreError::Conflict {
                voter: vote.voted_by,
                period: vote.thursday_date,
            });
        }

        let vote = vote.into_vote(generate_uuid(), Utc::now());
        votes.insert(0, vote.clone());
        Ok(vote)
    }

    async fn update_vote_target(
        &self,
        id: Uuid,
        movie_pick_id: Uuid,
    ) -> Result<ThursdayVote, StoreError> {
        let mut votes = self.votes.write().await;
        let vote = votes
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(StoreError::Missing(id))?;
        vote.movie_pick_id = movie_pick_id;
        vote.updated_at = Some(Utc::now());
        Ok(vote.clone())
    }
}

#[async_trait]
impl JournalStore for MemoryStore {
    async fn list_watched(&self) -> Result<Vec<WatchedMovie>, StoreError> {
        Ok(self.watched.read().await.clone())
    }

    async fn insert_watched(
        &self,
        movie: InsertableWatchedMovie,
    ) -> Result<WatchedMovie, StoreError> {
        let movie = movie.into_watched(generate_uuid(), Utc::now());
        self.watched.write().await.insert(0, movie.clone());
        Ok(movie)
    }
}
