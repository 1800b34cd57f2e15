//! The shared creature record and the behavior contract every species implements

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::narration::Narrator;
use crate::types::{AnimalClass, CreatureId, Ration, DEFAULT_HEALTH_STATUS};
use crate::{MenagerieError, Result};

/// Successful constructions across the whole process
static CREATURES_CREATED: AtomicU64 = AtomicU64::new(0);

/// Number of creature records constructed so far in this process
pub fn total_creatures() -> u64 {
    CREATURES_CREATED.load(Ordering::Relaxed)
}

/// Fields every creature carries, whatever its species
///
/// Age and weight are only reachable through validated setters; health
/// status only changes through a checkup. Not `Clone`: every record has its
/// own id and is counted exactly once.
#[derive(Debug)]
pub struct CreatureProfile {
    id: CreatureId,
    name: String,
    species: String,
    age: u32,
    weight: f64,
    health_status: String,
    last_checkup: Option<DateTime<Utc>>,
}

impl CreatureProfile {
    /// Validate and build a profile
    ///
    /// Fails with [`MenagerieError::Validation`] on a negative age or a
    /// weight that is not a positive finite number. Nothing is counted on
    /// failure.
    pub fn new(
        name: impl Into<String>,
        species: impl Into<String>,
        age: i64,
        weight: f64,
    ) -> Result<Self> {
        let age = validate_age(age)?;
        let weight = validate_weight(weight)?;

        let profile = Self {
            id: CreatureId::new(),
            name: name.into(),
            species: species.into(),
            age,
            weight,
            health_status: DEFAULT_HEALTH_STATUS.to_string(),
            last_checkup: None,
        };

        CREATURES_CREATED.fetch_add(1, Ordering::Relaxed);
        debug!(
            "Created {} {} ({})",
            profile.species, profile.name, profile.id
        );
        Ok(profile)
    }

    pub fn id(&self) -> CreatureId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_age(&mut self, age: i64) -> Result<()> {
        self.age = validate_age(age)?;
        Ok(())
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) -> Result<()> {
        self.weight = validate_weight(weight)?;
        Ok(())
    }

    pub fn health_status(&self) -> &str {
        &self.health_status
    }

    pub fn last_checkup(&self) -> Option<DateTime<Utc>> {
        self.last_checkup
    }

    /// Status is free-form text and deliberately not validated.
    fn record_checkup(&mut self, status: &str) {
        self.health_status = status.to_string();
        self.last_checkup = Some(Utc::now());
    }
}

fn validate_age(age: i64) -> Result<u32> {
    if age < 0 {
        return Err(MenagerieError::validation(format!(
            "age cannot be negative: {}",
            age
        )));
    }
    u32::try_from(age)
        .map_err(|_| MenagerieError::validation(format!("age out of range: {}", age)))
}

fn validate_weight(weight: f64) -> Result<f64> {
    // `!(weight > 0.0)` also rejects NaN
    if !(weight > 0.0) || !weight.is_finite() {
        return Err(MenagerieError::validation(format!(
            "weight must be greater than 0: {}",
            weight
        )));
    }
    Ok(weight)
}

/// Behavior contract shared by every species
///
/// Implementors supply the record accessors, their class, and the three
/// overridable behaviors (sound, daily activity, special behavior). Feeding,
/// checkups and the descriptive accessors are provided.
pub trait Creature: std::fmt::Debug {
    fn profile(&self) -> &CreatureProfile;

    fn profile_mut(&mut self) -> &mut CreatureProfile;

    fn class(&self) -> AnimalClass;

    /// Fixed per species, independent of state
    fn produce_sound(&self) -> &'static str;

    fn daily_activity(&self, out: &mut dyn Narrator);

    /// Behavior only this species has
    fn special_behavior(&self, out: &mut dyn Narrator);

    /// Behavior every member of the species' class has
    fn class_behavior(&self, out: &mut dyn Narrator);

    /// Feed an explicit ration. Narration only; no state changes.
    fn feed_with(&self, food: &str, amount: f64, out: &mut dyn Narrator) {
        let class = self.class();
        out.say(format!(
            "  {} Feeding {} {}: {} {:.1}kg",
            class.emoji(),
            class,
            self.name(),
            food,
            amount
        ));
        out.say(format!("     {} {}", self.name(), class.eating_style()));
    }

    /// Feed the class default ration
    fn feed(&self, out: &mut dyn Narrator) {
        let Ration { food, amount } = self.class().default_ration();
        self.feed_with(&food, amount, out);
    }

    fn health_checkup(&mut self, status: &str, out: &mut dyn Narrator) {
        self.profile_mut().record_checkup(status);
        out.say(format!(
            "  ✓ {} completed a health checkup, status: {}",
            self.name(),
            status
        ));
    }

    fn id(&self) -> CreatureId {
        self.profile().id()
    }

    fn name(&self) -> &str {
        self.profile().name()
    }

    fn species(&self) -> &str {
        self.profile().species()
    }

    fn age(&self) -> u32 {
        self.profile().age()
    }

    fn weight(&self) -> f64 {
        self.profile().weight()
    }

    fn health_status(&self) -> &str {
        self.profile().health_status()
    }

    fn last_checkup(&self) -> Option<DateTime<Utc>> {
        self.profile().last_checkup()
    }

    fn set_age(&mut self, age: i64) -> Result<()> {
        self.profile_mut().set_age(age)
    }

    fn set_weight(&mut self, weight: f64) -> Result<()> {
        self.profile_mut().set_weight(weight)
    }

    /// One-line summary of the record
    fn info(&self) -> String {
        format!(
            "{}: {}, {} yrs, {:.1}kg, health: {}",
            self.species(),
            self.name(),
            self.age(),
            self.weight(),
            self.health_status()
        )
    }

    /// Short `Species(Name)` label
    fn label(&self) -> String {
        format!("{}({})", self.species(), self.name())
    }
}

impl std::fmt::Display for dyn Creature + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults() {
        let profile = CreatureProfile::new("Simba", "Lion", 5, 190.0).unwrap();
        assert_eq!(profile.name(), "Simba");
        assert_eq!(profile.species(), "Lion");
        assert_eq!(profile.age(), 5);
        assert_eq!(profile.health_status(), DEFAULT_HEALTH_STATUS);
        assert!(profile.last_checkup().is_none());
    }

    #[test]
    fn test_profile_rejects_negative_age() {
        let err = CreatureProfile::new("Simba", "Lion", -1, 190.0).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_profile_rejects_bad_weight() {
        for weight in [0.0, -3.5, f64::NAN, f64::INFINITY] {
            let err = CreatureProfile::new("Simba", "Lion", 5, weight).unwrap_err();
            assert!(err.is_validation(), "weight {} should be rejected", weight);
        }
    }

    #[test]
    fn test_setters_keep_old_value_on_failure() {
        let mut profile = CreatureProfile::new("Dumbo", "Elephant", 12, 5000.0).unwrap();

        assert!(profile.set_age(-4).is_err());
        assert_eq!(profile.age(), 12);
        assert!(profile.set_weight(0.0).is_err());
        assert_eq!(profile.weight(), 5000.0);

        profile.set_age(13).unwrap();
        profile.set_weight(5100.0).unwrap();
        assert_eq!(profile.age(), 13);
        assert_eq!(profile.weight(), 5100.0);
    }

    #[test]
    fn test_zero_age_is_valid() {
        let profile = CreatureProfile::new("Cub", "Lion", 0, 1.5).unwrap();
        assert_eq!(profile.age(), 0);
    }

    #[test]
    fn test_checkup_records_timestamp() {
        let mut profile = CreatureProfile::new("Polly", "Parrot", 3, 0.4).unwrap();
        let before = Utc::now();
        profile.record_checkup("mild cold");
        assert_eq!(profile.health_status(), "mild cold");
        assert!(profile.last_checkup().unwrap() >= before);
    }
}
