//! Derived views over the full collection of picks.
//!
//! Nothing here is cached; every view is recomputed from the slice it is given.
use std::collections::HashSet;

use crate::api_models::Ballot;
use crate::models::{MoviePick, Person};

/**
 * The picks added by `owner`, in input order
 *
 * With no person selected there is nothing to show.
 */
pub fn picks_by_owner(picks: &[MoviePick], owner: Option<Person>) -> Vec<MoviePick> {
    match owner {
        Some(owner) => picks
            .iter()
            .filter(|p| p.added_by == owner)
            .cloned()
            .collect(),
        None => vec![],
    }
}

fn catalog_ids(picks: &[MoviePick], owner: Person) -> HashSet<i64> {
    picks
        .iter()
        .filter(|p| p.added_by == owner)
        .map(|p| p.tmdb_id)
        .collect()
}

/**
 * Movies both people picked independently, one row per `tmdb_id`
 *
 * The representative is the first matching row in input order, whoever
 * added it.
 */
pub fn shared_picks(picks: &[MoviePick]) -> Vec<MoviePick> {
    let dherru = catalog_ids(picks, Person::Dherru);
    let nivi = catalog_ids(picks, Person::Nivi);
    let shared: HashSet<i64> = dherru.intersection(&nivi).copied().collect();

    let mut seen = HashSet::new();
    picks
        .iter()
        .filter(|p| shared.contains(&p.tmdb_id) && seen.insert(p.tmdb_id))
        .cloned()
        .collect()
}

/**
 * Order picks for voting: shared picks first, then everything else
 *
 * Only the shared representatives are lifted out of `others`. A second row for
 * a shared movie still shows up there, as it is a separate thing to vote on.
 */
pub fn ballot(picks: &[MoviePick]) -> Ballot {
    let shared = shared_picks(picks);
    let shared_ids: HashSet<_> = shared.iter().map(|p| p.id).collect();
    let others = picks
        .iter()
        .filter(|p| !shared_ids.contains(&p.id))
        .cloned()
        .collect();
    Ballot { shared, others }
}
