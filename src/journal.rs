use crate::models::WatchedMovie;

/**
 * Past movie nights, latest first
 */
pub fn timeline(mut watched: Vec<WatchedMovie>) -> Vec<WatchedMovie> {
    watched.sort_by(|a, b| {
        b.watched_on
            .cmp(&a.watched_on)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    watched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InsertableWatchedMovie, Person};
    use crate::picks::tests::pick;
    use chrono::{NaiveDate, TimeZone, Utc};
    use uuid::Uuid;

    fn watched(day: u32, hour: u32) -> WatchedMovie {
        InsertableWatchedMovie {
            tmdb_id: 76,
            title: "Before Sunset".to_string(),
            poster_path: None,
            watched_on: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            notes: None,
        }
        .into_watched(
            Uuid::new_v4(),
            Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_timeline_order() {
        let older = watched(4, 22);
        let newer = watched(11, 22);
        let same_night_later = watched(11, 23);

        let ordered = timeline(vec![older.clone(), newer.clone(), same_night_later.clone()]);
        assert_eq!(ordered, vec![same_night_later, newer, older]);
    }

    #[test]
    fn test_entry_from_pick() {
        let pick = pick(42, Person::Nivi);
        let night = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
        let entry = InsertableWatchedMovie::from_pick(&pick, night, Some("cried".to_string()));

        assert_eq!(entry.tmdb_id, 42);
        assert_eq!(entry.title, pick.title);
        assert_eq!(entry.watched_on, night);
        assert_eq!(entry.notes.as_deref(), Some("cried"));
    }
}
