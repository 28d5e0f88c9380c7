use chrono::NaiveDate;
use log::*;
use uuid::Uuid;

use crate::api_models::{Consensus, VoteStatus, VotingState};
use crate::error::{Result, StoreError};
use crate::models::{InsertableVote, Person, ThursdayVote};
use crate::store::VoteStore;

/**
 * The vote `voter` has cast for `period`, if any
 */
pub fn current_vote(
    votes: &[ThursdayVote],
    voter: Option<Person>,
    period: NaiveDate,
) -> Option<&ThursdayVote> {
    let voter = voter?;
    votes
        .iter()
        .find(|v| v.voted_by == voter && v.thursday_date == period)
}

pub fn vote_status(votes: &[ThursdayVote], period: NaiveDate) -> VoteStatus {
    VoteStatus {
        dherru: current_vote(votes, Some(Person::Dherru), period).is_some(),
        nivi: current_vote(votes, Some(Person::Nivi), period).is_some(),
    }
}

/**
 * Decide whether both people agreed for `period`
 *
 * Agreement means both votes point at the very same pick row. Two rows for the
 * same movie do not count.
 */
pub fn resolve(votes: &[ThursdayVote], period: NaiveDate) -> Consensus {
    let dherru = current_vote(votes, Some(Person::Dherru), period);
    let nivi = current_vote(votes, Some(Person::Nivi), period);

    match (dherru, nivi) {
        (Some(dherru), Some(nivi)) if dherru.movie_pick_id == nivi.movie_pick_id => {
            Consensus::Resolved {
                movie_pick_id: dherru.movie_pick_id,
            }
        }
        (Some(dherru), Some(nivi)) => Consensus::Pending {
            dherru: dherru.clone(),
            nivi: nivi.clone(),
        },
        _ => Consensus::NoResult,
    }
}

pub fn voting_state(votes: &[ThursdayVote], period: NaiveDate) -> VotingState {
    let status = vote_status(votes, period);
    match resolve(votes, period) {
        Consensus::Resolved { .. } => VotingState::Resolved,
        Consensus::Pending { .. } => VotingState::Pending,
        Consensus::NoResult if status.dherru || status.nivi => VotingState::PartiallyVoted,
        Consensus::NoResult => VotingState::NoVotes,
    }
}

/**
 * Point `voter`'s vote for `period` at `movie_pick_id`
 *
 * Updates the existing row when there is one. If another cast by the same
 * person inserted first, the store rejects our insert and that row is
 * updated instead.
 */
pub async fn upsert_vote<S: VoteStore + ?Sized>(
    store: &S,
    movie_pick_id: Uuid,
    voter: Person,
    period: NaiveDate,
) -> Result<ThursdayVote> {
    let votes = store.votes_for_period(period).await?;

    if let Some(existing) = current_vote(&votes, Some(voter), period) {
        debug!("Moving {}'s vote for {} to {}", voter, period, movie_pick_id);
        return Ok(store.update_vote_target(existing.id, movie_pick_id).await?);
    }

    let vote = InsertableVote {
        movie_pick_id,
        voted_by: voter,
        thursday_date: period,
    };

    match store.insert_vote(vote).await {
        Ok(vote) => {
            info!("{} voted for {} on {}", voter, movie_pick_id, period);
            Ok(vote)
        }
        Err(StoreError::Conflict { .. }) => {
            warn!("Concurrent vote by {} for {}, updating instead", voter, period);
            let votes = store.votes_for_period(period).await?;
            let winner = current_vote(&votes, Some(voter), period)
                .ok_or(StoreError::Conflict { voter, period })?;
            Ok(store.update_vote_target(winner.id, movie_pick_id).await?)
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::sync::atomic::{AtomicBool, Ordering};

    fn thursday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 4).unwrap()
    }

    fn vote(voted_by: Person, movie_pick_id: Uuid, period: NaiveDate) -> ThursdayVote {
        ThursdayVote {
            id: Uuid::new_v4(),
            movie_pick_id,
            voted_by,
            thursday_date: period,
            created_at: Utc.with_ymd_and_hms(2024, 1, 4, 19, 0, 0).unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_resolved_on_same_row() {
        let p1 = Uuid::new_v4();
        let votes = vec![
            vote(Person::Dherru, p1, thursday()),
            vote(Person::Nivi, p1, thursday()),
        ];
        assert_eq!(
            resolve(&votes, thursday()),
            Consensus::Resolved { movie_pick_id: p1 }
        );
        assert_eq!(voting_state(&votes, thursday()), VotingState::Resolved);
    }

    #[test]
    fn test_pending_on_different_rows() {
        // Same movie, but two separate pick rows
        let (p1, p2) = (Uuid::new_v4(), Uuid::new_v4());
        let votes = vec![
            vote(Person::Dherru, p1, thursday()),
            vote(Person::Nivi, p2, thursday()),
        ];
        match resolve(&votes, thursday()) {
            Consensus::Pending { dherru, nivi } => {
                assert_eq!(dherru.movie_pick_id, p1);
                assert_eq!(nivi.movie_pick_id, p2);
            }
            other => panic!("Expected pending, got {:?}", other),
        }
        assert_eq!(voting_state(&votes, thursday()), VotingState::Pending);
    }

    #[test]
    fn test_no_result_with_one_vote() {
        let votes = vec![vote(Person::Nivi, Uuid::new_v4(), thursday())];
        assert_eq!(resolve(&votes, thursday()), Consensus::NoResult);
        assert_eq!(voting_state(&votes, thursday()), VotingState::PartiallyVoted);
        assert_eq!(
            vote_status(&votes, thursday()),
            VoteStatus {
                dherru: false,
                nivi: true
            }
        );
    }

    #[test]
    fn test_other_periods_ignored() {
        let p1 = Uuid::new_v4();
        let last_week = NaiveDate::from_ymd_opt(2023, 12, 28).unwrap();
        let votes = vec![
            vote(Person::Dherru, p1, last_week),
            vote(Person::Nivi, p1, thursday()),
        ];
        assert_eq!(resolve(&votes, thursday()), Consensus::NoResult);
        assert_eq!(voting_state(&[], thursday()), VotingState::NoVotes);
    }

    #[test]
    fn test_current_vote_without_person() {
        let votes = vec![vote(Person::Nivi, Uuid::new_v4(), thursday())];
        assert!(current_vote(&votes, None, thursday()).is_none());
        assert!(current_vote(&votes, Some(Person::Nivi), thursday()).is_some());
    }

    #[async_std::test]
    async fn test_upsert_replaces_target() {
        let store = MemoryStore::new();
        let (p1, p2) = (Uuid::new_v4(), Uuid::new_v4());

        let first = upsert_vote(&store, p1, Person::Dherru, thursday()).await.unwrap();
        let second = upsert_vote(&store, p2, Person::Dherru, thursday()).await.unwrap();

        assert_eq!(first.id, second.id);
        let votes = store.all_votes().await;
        assert_eq!(votes.len(), 1);
        assert_eq!(votes[0].movie_pick_id, p2);
    }

    /**
     * Pretends the first read happened before a concurrent insert landed
     */
    struct StaleRead {
        inner: MemoryStore,
        stale: AtomicBool,
    }

    #[async_trait]
    impl VoteStore for StaleRead {
        async fn votes_for_period(
            &self,
            period: NaiveDate,
        ) -> std::result::Result<Vec<ThursdayVote>, StoreError> {
            if self.stale.swap(false, Ordering::SeqCst) {
                return Ok(vec![]);
            }
            self.inner.votes_for_period(period).await
        }

        async fn insert_vote(
            &self,
            vote: InsertableVote,
        ) -> std::result::Result<ThursdayVote, StoreError> {
            self.inner.insert_vote(vote).await
        }

        async fn update_vote_target(
            &self,
            id: Uuid,
            movie_pick_id: Uuid,
        ) -> std::result::Result<ThursdayVote, StoreError> {
            self.inner.update_vote_target(id, movie_pick_id).await
        }
    }

    #[async_std::test]
    async fn test_conflict_retried_as_update() {
        let _ = pretty_env_logger::try_init();
        let store = StaleRead {
            inner: MemoryStore::new(),
            stale: AtomicBool::new(false),
        };
        let (p1, p2) = (Uuid::new_v4(), Uuid::new_v4());
        let first = upsert_vote(&store, p1, Person::Nivi, thursday()).await.unwrap();

        store.stale.store(true, Ordering::SeqCst);
        let second = upsert_vote(&store, p2, Person::Nivi, thursday()).await.unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(second.movie_pick_id, p2);
        assert_eq!(store.inner.all_votes().await.len(), 1);
    }
}
