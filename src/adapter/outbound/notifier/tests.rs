use std::sync::Arc;

use super::rotation::TokenRotation;

#[test]
fn test_rotation_cycles_through_entries() {
    let rotation = TokenRotation::new(vec!["a", "b", "c"]).unwrap();

    let picked: Vec<&str> = (0..7).map(|_| *rotation.next()).collect();

    assert_eq!(picked, vec!["a", "b", "c", "a", "b", "c", "a"]);
}

#[test]
fn test_rotation_rejects_empty() {
    assert!(TokenRotation::<String>::new(Vec::new()).is_none());
}

#[test]
fn test_rotation_shared_across_threads_stays_balanced() {
    let rotation = Arc::new(TokenRotation::new(vec![0usize, 1]).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let rotation = Arc::clone(&rotation);
            std::thread::spawn(move || (0..50).map(|_| *rotation.next()).sum::<usize>())
        })
        .collect();

    let ones: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

    assert_eq!(ones, 100);
}
