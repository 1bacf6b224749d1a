//! Cross-source reconciliation and final ordering.
//!
//! Reconciliation is a global merge-by-title: entries from every provider go
//! into one list with unique titles, and a title offered by several providers
//! is credited to the provider holding its highest rating.

use std::collections::HashMap;

use crate::extractor::Entry;

/// Merge entries from all sources into one list with unique titles.
///
/// The first occurrence of a title claims its slot; a later occurrence takes
/// the slot over only with a strictly higher rating, carrying its own source
/// id with it. Ties keep the earlier entry, so titles stay in first-seen
/// order, which is also the tie-break order for the final sort.
pub fn reconcile(entries: impl IntoIterator<Item = Entry>) -> Vec<Entry> {
    let mut merged: Vec<Entry> = Vec::new();
    let mut slot_by_title: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        match slot_by_title.get(&entry.title) {
            Some(&slot) => {
                if entry.rating > merged[slot].rating {
                    merged[slot] = entry;
                }
            }
            None => {
                slot_by_title.insert(entry.title.clone(), merged.len());
                merged.push(entry);
            }
        }
    }

    merged
}

/// Sort by rating, descending. The sort is stable, so entries with equal
/// ratings keep their reconciliation (first-seen) order.
pub fn rank(mut entries: Vec<Entry>) -> Vec<Entry> {
    entries.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    entries
}
