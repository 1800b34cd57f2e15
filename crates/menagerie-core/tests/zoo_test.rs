//! Integration tests for the zoo registry
//!
//! Covers:
//! - Registration count and indexed lookup by identity
//! - Insertion-order visiting for the feeding and activity passes
//! - Species breakdown totals
//! - Checkup passes with random and scripted status sources

use menagerie_core::roster::stock;
use menagerie_core::{
    Creature, Elephant, Lion, MenagerieError, Parrot, RandomStatus, ScriptedStatus, Snake,
    Transcript, Zoo,
};

/// Helper to build a zoo holding the given creatures, returning their ids in order
fn zoo_with(creatures: Vec<Box<dyn Creature>>) -> (Zoo, Vec<menagerie_core::CreatureId>) {
    let mut zoo = Zoo::new("Test Zoo");
    let ids = creatures.into_iter().map(|c| zoo.add_boxed(c)).collect();
    (zoo, ids)
}

#[test]
fn test_lion_and_elephant_scenario() {
    let mut zoo = Zoo::new("City Zoo");
    zoo.add(Lion::new("Simba", 5, 190.0).unwrap());
    zoo.add(Elephant::new("Dumbo", 12, 5000.0).unwrap());

    assert_eq!(zoo.count(), 2);

    let breakdown = zoo.species_breakdown();
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown["Lion"], 1);
    assert_eq!(breakdown["Elephant"], 1);

    assert_eq!(zoo.at(0).unwrap().produce_sound(), Lion::SOUND);
    assert_eq!(zoo.at(1).unwrap().produce_sound(), Elephant::SOUND);
}

#[test]
fn test_count_matches_successful_adds() {
    let mut zoo = Zoo::new("City Zoo");
    let attempts: Vec<menagerie_core::Result<Lion>> = vec![
        Lion::new("A", 1, 10.0),
        Lion::new("B", -1, 10.0),
        Lion::new("C", 2, 0.0),
        Lion::new("D", 3, 30.0),
    ];

    let mut added = 0;
    for attempt in attempts {
        if let Ok(lion) = attempt {
            zoo.add(lion);
            added += 1;
        }
    }

    assert_eq!(added, 2);
    assert_eq!(zoo.count(), added);
}

#[test]
fn test_duplicates_are_allowed() {
    let mut zoo = Zoo::new("City Zoo");
    let first = zoo.add(Lion::new("Simba", 5, 190.0).unwrap());
    let second = zoo.add(Lion::new("Simba", 5, 190.0).unwrap());

    assert_eq!(zoo.count(), 2);
    assert_eq!(zoo.species_breakdown()["Lion"], 2);

    // Same data, distinct records
    assert_ne!(first, second);
    assert_eq!(zoo.at(0).unwrap().id(), first);
    assert_eq!(zoo.at(1).unwrap().id(), second);
    assert_eq!(zoo.get(second).unwrap().id(), second);
}

#[test]
fn test_at_returns_records_by_identity() {
    let creatures: Vec<Box<dyn Creature>> = vec![
        Box::new(Lion::new("Simba", 5, 190.0).unwrap()),
        Box::new(Parrot::new("Polly", 3, 0.4, 0.6).unwrap()),
        Box::new(Snake::new("Verdi", 4, 2.5, 2.3).unwrap()),
    ];
    let (zoo, ids) = zoo_with(creatures);

    for (i, id) in ids.iter().enumerate() {
        assert_eq!(zoo.at(i).unwrap().id(), *id);
    }

    match zoo.at(3) {
        Err(MenagerieError::IndexOutOfRange { index, len }) => {
            assert_eq!(index, 3);
            assert_eq!(len, 3);
        }
        other => panic!("expected index error, got {:?}", other.map(|c| c.label())),
    }
    assert!(zoo.at(usize::MAX).is_err());
}

#[test]
fn test_feeding_visits_each_once_in_order() {
    let mut zoo = Zoo::new("City Zoo");
    stock(&mut zoo).unwrap();

    let mut t = Transcript::new();
    zoo.for_each_feed(&mut t);

    let feeding_lines = [
        "Feeding mammal Simba:",
        "Feeding mammal Dumbo:",
        "Feeding bird Polly:",
        "Feeding reptile Verdi:",
    ];
    for line in feeding_lines {
        assert_eq!(t.count(line), 1, "{} should appear exactly once", line);
    }

    let positions: Vec<usize> = feeding_lines
        .iter()
        .map(|line| t.position(line).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(t.count("Feeding "), 4);
}

#[test]
fn test_activity_pass_sound_then_activity() {
    let mut zoo = Zoo::new("City Zoo");
    stock(&mut zoo).unwrap();

    let mut t = Transcript::new();
    zoo.for_each_activity(&mut t);

    assert_eq!(t.count("Sound: "), 4);

    let roar = t.position(Lion::SOUND).unwrap();
    let patrol = t.position("Simba is patrolling").unwrap();
    let trumpet = t.position(Elephant::SOUND).unwrap();
    let hiss = t.position(Snake::SOUND).unwrap();
    assert!(roar < patrol);
    assert!(patrol < trumpet);
    assert!(trumpet < hiss);
}

#[test]
fn test_breakdown_sums_to_count() {
    let mut zoo = Zoo::new("City Zoo");
    stock(&mut zoo).unwrap();
    zoo.add(Lion::new("Nala", 4, 130.0).unwrap());
    zoo.add(Parrot::new("Kiwi", 2, 0.3, 0.5).unwrap());

    let breakdown = zoo.species_breakdown();
    assert_eq!(breakdown.values().sum::<usize>(), zoo.count());
    assert_eq!(breakdown["Lion"], 2);
    assert_eq!(breakdown["Parrot"], 2);
}

#[test]
fn test_random_checkup_stays_in_candidate_set() {
    let mut zoo = Zoo::new("City Zoo");
    stock(&mut zoo).unwrap();

    let mut t = Transcript::new();
    zoo.checkup_all(&mut RandomStatus::new(), &mut t).unwrap();

    let candidates = zoo.candidate_statuses().to_vec();
    for creature in zoo.iter() {
        assert!(candidates.iter().any(|s| s == creature.health_status()));
        assert!(creature.last_checkup().is_some());
    }
    assert_eq!(t.count("completed a health checkup"), 4);
}

#[test]
fn test_scripted_checkup_is_exact() {
    let mut zoo = Zoo::new("City Zoo")
        .with_candidate_statuses(vec!["healthy".to_string(), "mild cold".to_string()])
        .unwrap();
    stock(&mut zoo).unwrap();

    let mut source = ScriptedStatus::new(["healthy", "mild cold", "mild cold", "healthy"]);
    zoo.checkup_all(&mut source, &mut Transcript::new()).unwrap();

    let statuses: Vec<_> = zoo.iter().map(|c| c.health_status().to_string()).collect();
    assert_eq!(statuses, ["healthy", "mild cold", "mild cold", "healthy"]);
}

#[test]
fn test_invariants_hold_after_mutation() {
    let mut zoo = Zoo::new("City Zoo");
    stock(&mut zoo).unwrap();

    for i in 0..zoo.count() {
        let creature = zoo.at_mut(i).unwrap();
        assert!(creature.set_age(-5).unwrap_err().is_validation());
        assert!(creature.set_weight(-1.0).unwrap_err().is_validation());
        assert!(creature.set_weight(f64::NAN).is_err());
        creature.set_age(i as i64 + 1).unwrap();
    }

    for creature in zoo.iter() {
        assert!(creature.weight() > 0.0);
        assert!(creature.age() >= 1);
    }
}

#[test]
fn test_special_behavior_showcase() {
    let mut zoo = Zoo::new("City Zoo");
    stock(&mut zoo).unwrap();

    let mut t = Transcript::new();
    zoo.show_special_behaviors(&mut t);

    assert!(t.contains("Simba is hunting, pride size: 3"));
    assert!(t.contains("Dumbo sprays water"));
    assert!(t.contains("Polly mimics: \"Hello!\""));
    assert!(t.contains("Verdi is shedding its skin (non-venomous)"));
    assert_eq!(t.count("is nursing its young"), 2);
}
