use std::collections::BTreeSet;

pub mod artist;
pub mod partition;
pub mod search;
pub mod show;
pub mod validate;
pub mod venue;
pub mod views;

/// Deduplicated ids, ready for a single batch lookup.
pub(crate) fn distinct_ids(ids: impl Iterator<Item = i64>) -> Vec<i64> {
    ids.collect::<BTreeSet<_>>().into_iter().collect()
}
