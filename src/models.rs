use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/**
 * Generate a new identifier for a row
 */
pub fn generate_uuid() -> Uuid {
    Uuid::new_v4()
}

/**
 * One of the two people sharing movie night
 */
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    Dherru,
    Nivi,
}

impl Person {
    pub const ALL: [Person; 2] = [Person::Dherru, Person::Nivi];

    /**
     * The other half of the couple
     */
    pub fn partner(self) -> Person {
        match self {
            Person::Dherru => Person::Nivi,
            Person::Nivi => Person::Dherru,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Person::Dherru => "dherru",
            Person::Nivi => "nivi",
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
#[error("unknown person `{0}`")]
pub struct UnknownPerson(pub String);

impl FromStr for Person {
    type Err = UnknownPerson;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dherru" => Ok(Person::Dherru),
            "nivi" => Ok(Person::Nivi),
            other => Err(UnknownPerson(other.to_string())),
        }
    }
}

/**
 * A movie one person would like to watch
 *
 * Several picks may share a `tmdb_id` when both people (or one person, twice)
 * added the same movie. Each is still its own row.
 */
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MoviePick {
    pub id: Uuid,
    pub tmdb_id: i64,
    pub title: String,
    pub poster_path: Option<String>,
    pub overview: Option<String>,
    pub release_year: Option<i32>,
    pub added_by: Person,
    pub created_at: DateTime<Utc>,
}

/**
 * User-provided details for a new pick, typically copied from a search result
 */
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct InsertablePick {
    pub tmdb_id: i64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    pub added_by: Person,
}

impl InsertablePick {
    pub fn into_pick(self, id: Uuid, created_at: DateTime<Utc>) -> MoviePick {
        MoviePick {
            id,
            tmdb_id: self.tmdb_id,
            title: self.title,
            poster_path: self.poster_path,
            overview: self.overview,
            release_year: self.release_year,
            added_by: self.added_by,
            created_at,
        }
    }
}

/**
 * One person's vote for a given Thursday
 *
 * There is at most one of these per (voted_by, thursday_date); re-voting moves
 * `movie_pick_id` and stamps `updated_at`.
 */
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ThursdayVote {
    pub id: Uuid,
    pub movie_pick_id: Uuid,
    pub voted_by: Person,
    pub thursday_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct InsertableVote {
    pub movie_pick_id: Uuid,
    pub voted_by: Person,
    pub thursday_date: NaiveDate,
}

impl InsertableVote {
    pub fn into_vote(self, id: Uuid, created_at: DateTime<Utc>) -> ThursdayVote {
        ThursdayVote {
            id,
            movie_pick_id: self.movie_pick_id,
            voted_by: self.voted_by,
            thursday_date: self.thursday_date,
            created_at,
            updated_at: None,
        }
    }
}

/**
 * A movie night that actually happened
 */
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct WatchedMovie {
    pub id: Uuid,
    pub tmdb_id: i64,
    pub title: String,
    pub poster_path: Option<String>,
    pub watched_on: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct InsertableWatchedMovie {
    pub tmdb_id: i64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    pub watched_on: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

impl InsertableWatchedMovie {
    /**
     * Journal entry for watching `pick` on `watched_on`
     */
    pub fn from_pick(pick: &MoviePick, watched_on: NaiveDate, notes: Option<String>) -> Self {
        Self {
            tmdb_id: pick.tmdb_id,
            title: pick.title.clone(),
            poster_path: pick.poster_path.clone(),
            watched_on,
            notes,
        }
    }

    pub fn into_watched(self, id: Uuid, created_at: DateTime<Utc>) -> WatchedMovie {
        WatchedMovie {
            id,
            tmdb_id: self.tmdb_id,
            title: self.title,
            poster_path: self.poster_path,
            watched_on: self.watched_on,
            notes: self.notes,
            created_at,
        }
    }
}
