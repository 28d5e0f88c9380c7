/*!
 * Picking, voting on and remembering Thursday movie nights for two people.
 *
 * Rows come from whatever implements the traits in [`store`]; everything
 * derived from them (shared picks, who has voted, whether both agreed) is
 * recomputed on each call.
 */

pub mod api_models;
pub mod calendar;
pub mod config;
pub mod error;
pub mod journal;
pub mod memory;
pub mod models;
pub mod picks;
pub mod service;
pub mod store;
pub mod voting;

pub use crate::api_models::{Ballot, Consensus, Countdown, VoteStatus, VotingState};
pub use crate::calendar::{Clock, FixedClock, SystemClock};
pub use crate::config::Config;
pub use crate::error::{Error, Result, StoreError};
pub use crate::memory::MemoryStore;
pub use crate::models::{
    InsertablePick, InsertableVote, InsertableWatchedMovie, MoviePick, Person, ThursdayVote,
    WatchedMovie,
};
pub use crate::service::MovieNight;
