use chrono::{DateTime, Utc};

use crate::database::Show;

/// Shows split around a single reference instant.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PartitionedShows {
    pub past: Vec<Show>,
    pub upcoming: Vec<Show>,
}

/// Split `shows` into those that started before `now` and those that start after it.
///
/// A show starting exactly at `now` is in neither list. Both lists keep the input order.
pub fn partition(shows: Vec<Show>, now: DateTime<Utc>) -> PartitionedShows {
    let mut partitioned = PartitionedShows::default();

    for show in shows {
        if show.start_time < now {
            partitioned.past.push(show);
        } else if show.start_time > now {
            partitioned.upcoming.push(show);
        }
    }

    partitioned
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn show(id: i64, start_time: DateTime<Utc>) -> Show {
        Show {
            id,
            start_time,
            artist_id: 1,
            venue_id: 1,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 20, 0, 0).unwrap()
    }

    #[test]
    fn test_partition_empty() {
        let result = partition(Vec::new(), now());
        assert!(result.past.is_empty());
        assert!(result.upcoming.is_empty());
    }

    #[test]
    fn test_partition_splits_around_now() {
        let shows = vec![
            show(1, now() - Duration::days(1)),
            show(2, now() + Duration::days(1)),
        ];

        let result = partition(shows, now());
        assert_eq!(result.past.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(result.upcoming.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_partition_excludes_show_starting_now() {
        let shows = vec![
            show(1, now() - Duration::seconds(1)),
            show(2, now()),
            show(3, now() + Duration::seconds(1)),
        ];

        let result = partition(shows, now());
        assert_eq!(result.past.len(), 1);
        assert_eq!(result.upcoming.len(), 1);
        assert!(result.past.iter().chain(&result.upcoming).all(|s| s.id != 2));
    }

    #[test]
    fn test_partition_is_stable() {
        // Input deliberately out of chronological order
        let shows = vec![
            show(1, now() + Duration::days(3)),
            show(2, now() - Duration::days(5)),
            show(3, now() + Duration::days(1)),
            show(4, now() - Duration::days(1)),
            show(5, now() + Duration::days(2)),
        ];

        let result = partition(shows, now());
        assert_eq!(result.past.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(
            result.upcoming.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![1, 3, 5]
        );
    }

    #[test]
    fn test_partition_neither_drops_nor_duplicates() {
        let offsets = [-90, -3, 0, 0, 2, 45, -1, 0, 600];
        let shows: Vec<Show> = offsets
            .iter()
            .enumerate()
            .map(|(i, minutes)| show(i as i64, now() + Duration::minutes(*minutes)))
            .collect();
        let at_now = shows.iter().filter(|s| s.start_time == now()).count();

        let result = partition(shows.clone(), now());

        assert_eq!(result.past.len() + result.upcoming.len() + at_now, shows.len());
        let mut ids: Vec<i64> = result
            .past
            .iter()
            .chain(&result.upcoming)
            .map(|s| s.id)
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), shows.len() - at_now);
        assert!(result.past.iter().all(|s| s.start_time < now()));
        assert!(result.upcoming.iter().all(|s| s.start_time > now()));
    }
}
