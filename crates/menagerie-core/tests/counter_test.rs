//! Process-wide creature counter
//!
//! Kept in its own test binary so no other test constructs creatures
//! concurrently.

use menagerie_core::{total_creatures, Lion, Parrot, Zoo};

#[test]
fn test_counter_tracks_successful_constructions_only() {
    let start = total_creatures();

    let _simba = Lion::new("Simba", 5, 190.0).unwrap();
    let _polly = Parrot::new("Polly", 3, 0.4, 0.6).unwrap();
    assert_eq!(total_creatures(), start + 2);

    assert!(Lion::new("Ghost", -1, 190.0).is_err());
    assert!(Parrot::new("Feather", 1, 0.0, 0.6).is_err());
    assert_eq!(total_creatures(), start + 2);

    // Every record in a zoo was counted once and has its own id
    let before = total_creatures();
    let mut zoo = Zoo::new("Counting Zoo");
    let first = zoo.add(Lion::new("Simba", 5, 190.0).unwrap());
    let second = zoo.add(Lion::new("Simba", 5, 190.0).unwrap());
    assert_ne!(first, second);
    assert_eq!(total_creatures() - before, zoo.count() as u64);
}
