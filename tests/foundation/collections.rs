//! Integration tests for persistent collections
//!
//! Tests structural sharing and order preservation.

use std::sync::Arc;

use worksurvey_foundation::{SharedSet, SharedVec};

#[test]
fn clones_share_contents() {
    let rows: SharedVec<&str> = ["r1", "r2"].into_iter().collect();
    let view = rows.clone();

    assert!(SharedVec::<&str>::new().is_empty());
    assert_eq!(view, rows);
    assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec!["r1", "r2"]);
}

#[test]
fn retain_keeps_order() {
    let ids: SharedVec<u32> = (0..10).collect();
    let odd = ids.retain(|n| n % 2 == 1);
    assert_eq!(odd.into_iter().collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
    assert_eq!(ids.len(), 10);
}

#[test]
fn id_sets() {
    let all: SharedSet<Arc<str>> = ["1", "2", "3"].into_iter().map(Arc::from).collect();
    let some: SharedSet<Arc<str>> = std::iter::once(Arc::from("2")).collect();

    assert!(some.is_subset(&all));
    assert!(!all.is_subset(&some));
    assert!(all.contains(&Arc::from("3")));
    assert_eq!(some.len(), 1);
}
