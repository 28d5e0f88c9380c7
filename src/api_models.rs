use serde::Serialize;
use uuid::Uuid;

use crate::models::{MoviePick, Person, ThursdayVote};

/**
 * Picks in the order they should be offered for voting
 */
#[derive(Clone, Debug, Default, Serialize)]
pub struct Ballot {
    /**
     * Movies both people want to see
     */
    pub shared: Vec<MoviePick>,
    pub others: Vec<MoviePick>,
}

/**
 * Outcome of a Thursday's votes
 */
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Consensus {
    /**
     * At least one person has not voted yet
     */
    NoResult,
    /**
     * Both voted, for different picks
     */
    Pending { dherru: ThursdayVote, nivi: ThursdayVote },
    /**
     * Both voted for the same pick row
     */
    Resolved { movie_pick_id: Uuid },
}

impl Consensus {
    pub fn chosen(&self) -> Option<Uuid> {
        match self {
            Consensus::Resolved { movie_pick_id } => Some(*movie_pick_id),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum VotingState {
    NoVotes,
    PartiallyVoted,
    Pending,
    Resolved,
}

/**
 * Who has voted so far
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct VoteStatus {
    pub dherru: bool,
    pub nivi: bool,
}

impl VoteStatus {
    pub fn has_voted(&self, person: Person) -> bool {
        match person {
            Person::Dherru => self.dherru,
            Person::Nivi => self.nivi,
        }
    }
}

/**
 * Time left until voting opens
 */
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}
