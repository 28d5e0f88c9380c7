use chrono::NaiveDate;
use log::*;
use uuid::Uuid;

use crate::api_models::{Ballot, Consensus, Countdown, VoteStatus};
use crate::calendar::{self, Clock};
use crate::error::{Error, Result};
use crate::journal;
use crate::models::*;
use crate::picks;
use crate::store::{JournalStore, PickStore, VoteStore};
use crate::voting;

/**
 * Everything the screens need, wired to a store and a clock
 *
 * The person using the app is passed into each call; nothing here remembers
 * who is logged in.
 */
#[derive(Clone, Debug)]
pub struct MovieNight<S, C> {
    pub store: S,
    pub clock: C,
}

impl<S, C: Clock> MovieNight<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn is_voting_enabled(&self) -> bool {
        calendar::is_voting_enabled(&self.clock.now())
    }

    /**
     * The Thursday votes cast now are counted towards
     */
    pub fn current_period(&self) -> NaiveDate {
        calendar::voting_period(&self.clock.now())
    }

    pub fn countdown(&self) -> Countdown {
        calendar::countdown(&self.clock.now())
    }
}

impl<S: PickStore, C: Clock> MovieNight<S, C> {
    pub async fn picks(&self) -> Result<Vec<MoviePick>> {
        Ok(self.store.list_picks().await?)
    }

    pub async fn picks_by(&self, owner: Option<Person>) -> Result<Vec<MoviePick>> {
        Ok(picks::picks_by_owner(&self.picks().await?, owner))
    }

    pub async fn shared_picks(&self) -> Result<Vec<MoviePick>> {
        Ok(picks::shared_picks(&self.picks().await?))
    }

    pub async fn ballot(&self) -> Result<Ballot> {
        Ok(picks::ballot(&self.picks().await?))
    }

    pub async fn add_pick(&self, pick: InsertablePick) -> Result<MoviePick> {
        let pick = self.store.insert_pick(pick).await?;
        info!("{} picked {} ({})", pick.added_by, pick.title, pick.tmdb_id);
        Ok(pick)
    }

    pub async fn remove_pick(&self, id: Uuid) -> Result<()> {
        if self.store.delete_pick(id).await? {
            debug!("Removed pick {}", id);
            Ok(())
        } else {
            Err(Error::NotFound(id))
        }
    }
}

impl<S: PickStore + VoteStore, C: Clock> MovieNight<S, C> {
    pub async fn votes(&self, period: NaiveDate) -> Result<Vec<ThursdayVote>> {
        Ok(self.store.votes_for_period(period).await?)
    }

    /**
     * Record `voter`'s choice of `movie_pick_id` for `period`
     *
     * Only possible on a Thursday, whichever period is targeted, and only for
     * a pick that still exists.
     */
    pub async fn cast_vote(
        &self,
        movie_pick_id: Uuid,
        voter: Option<Person>,
        period: NaiveDate,
    ) -> Result<ThursdayVote> {
        let voter = voter.ok_or(Error::InvalidVoter)?;

        if !self.is_voting_enabled() {
            debug!("{} tried to vote outside of Thursday", voter);
            return Err(Error::VotingClosed);
        }

        let picks = self.store.list_picks().await?;
        if !picks.iter().any(|p| p.id == movie_pick_id) {
            return Err(Error::NotFound(movie_pick_id));
        }

        voting::upsert_vote(&self.store, movie_pick_id, voter, period).await
    }

    /**
     * Cast a vote for the current Thursday
     */
    pub async fn vote(&self, movie_pick_id: Uuid, voter: Option<Person>) -> Result<ThursdayVote> {
        self.cast_vote(movie_pick_id, voter, self.current_period()).await
    }

    pub async fn current_vote(
        &self,
        voter: Option<Person>,
        period: NaiveDate,
    ) -> Result<Option<ThursdayVote>> {
        if voter.is_none() {
            return Ok(None);
        }
        let votes = self.votes(period).await?;
        Ok(voting::current_vote(&votes, voter, period).cloned())
    }

    pub async fn vote_status(&self, period: NaiveDate) -> Result<VoteStatus> {
        Ok(voting::vote_status(&self.votes(period).await?, period))
    }

    pub async fn consensus(&self, period: NaiveDate) -> Result<Consensus> {
        let consensus = voting::resolve(&self.votes(period).await?, period);
        debug!("Consensus for {}: {:?}", period, consensus);
        Ok(consensus)
    }

    /**
     * The pick both people agreed on, if they did and it has not been removed
     */
    pub async fn chosen_movie(&self, period: NaiveDate) -> Result<Option<MoviePick>> {
        match self.consensus(period).await?.chosen() {
            Some(id) => Ok(self.picks().await?.into_iter().find(|p| p.id == id)),
            None => Ok(None),
        }
    }
}

impl<S: PickStore + VoteStore + JournalStore, C: Clock> MovieNight<S, C> {
    pub async fn timeline(&self) -> Result<Vec<WatchedMovie>> {
        Ok(journal::timeline(self.store.list_watched().await?))
    }

    pub async fn record_watched(&self, movie: InsertableWatchedMovie) -> Result<WatchedMovie> {
        let movie = self.store.insert_watched(movie).await?;
        info!("Watched {} on {}", movie.title, movie.watched_on);
        Ok(movie)
    }

    /**
     * Add the movie agreed on for `period` to the journal, watched that Thursday
     */
    pub async fn record_movie_night(
        &self,
        period: NaiveDate,
        notes: Option<String>,
    ) -> Result<WatchedMovie> {
        let pick = self
            .chosen_movie(period)
            .await?
            .ok_or(Error::NoConsensus(period))?;
        self.record_watched(InsertableWatchedMovie::from_pick(&pick, period, notes))
            .await
    }
}
