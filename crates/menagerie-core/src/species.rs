//! Class specializations (mammal, bird, reptile) and the leaf species
//!
//! Class traits carry the fields and behavior a whole class shares; each leaf
//! struct owns a [`CreatureProfile`] plus its own fields and implements both
//! [`Creature`] and its class trait.

use crate::creature::{Creature, CreatureProfile};
use crate::narration::Narrator;
use crate::types::AnimalClass;
use crate::Result;

/// Fur-bearing creatures that nurse their young
pub trait Mammal: Creature {
    fn fur_color(&self) -> &str;

    fn nurse_young(&self, out: &mut dyn Narrator) {
        out.say(format!("  🍼 {} is nursing its young", self.name()));
    }
}

/// Winged creatures
pub trait Bird: Creature {
    /// Metres
    fn wingspan(&self) -> f64;

    fn fly(&self, out: &mut dyn Narrator) {
        out.say(format!(
            "  🦅 {} spreads its {:.1}m wings and takes flight",
            self.name(),
            self.wingspan()
        ));
    }
}

/// Scaled, cold-blooded creatures
pub trait Reptile: Creature {
    fn scale_type(&self) -> &str;

    fn bask_in_sun(&self, out: &mut dyn Narrator) {
        out.say(format!(
            "  ☀️ {} is basking in the sun to warm up",
            self.name()
        ));
    }
}

// =============================================================================
// Lion
// =============================================================================

#[derive(Debug)]
pub struct Lion {
    profile: CreatureProfile,
    fur_color: String,
    pride_size: u32,
}

impl Lion {
    pub const SPECIES: &'static str = "Lion";
    pub const SOUND: &'static str = "Roar: ROAR!!!";

    pub fn new(name: impl Into<String>, age: i64, weight: f64) -> Result<Self> {
        Ok(Self {
            profile: CreatureProfile::new(name, Self::SPECIES, age, weight)?,
            fur_color: "golden".to_string(),
            pride_size: 1,
        })
    }

    pub fn with_fur_color(mut self, fur_color: impl Into<String>) -> Self {
        self.fur_color = fur_color.into();
        self
    }

    pub fn with_pride_size(mut self, pride_size: u32) -> Self {
        self.pride_size = pride_size;
        self
    }

    pub fn pride_size(&self) -> u32 {
        self.pride_size
    }

    pub fn hunt(&self, out: &mut dyn Narrator) {
        out.say(format!(
            "  🎯 {} is hunting, pride size: {}",
            self.name(),
            self.pride_size
        ));
    }
}

impl Creature for Lion {
    fn profile(&self) -> &CreatureProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut CreatureProfile {
        &mut self.profile
    }

    fn class(&self) -> AnimalClass {
        AnimalClass::Mammal
    }

    fn produce_sound(&self) -> &'static str {
        Self::SOUND
    }

    fn daily_activity(&self, out: &mut dyn Narrator) {
        out.say(format!("  🦁 {} is patrolling its territory", self.name()));
    }

    fn special_behavior(&self, out: &mut dyn Narrator) {
        self.hunt(out);
    }

    fn class_behavior(&self, out: &mut dyn Narrator) {
        self.nurse_young(out);
    }
}

impl Mammal for Lion {
    fn fur_color(&self) -> &str {
        &self.fur_color
    }
}

// =============================================================================
// Elephant
// =============================================================================

#[derive(Debug)]
pub struct Elephant {
    profile: CreatureProfile,
    fur_color: String,
    /// Metres
    tusk_length: f64,
}

impl Elephant {
    pub const SPECIES: &'static str = "Elephant";
    pub const SOUND: &'static str = "Trumpet: Pawoooo~~~";

    pub fn new(name: impl Into<String>, age: i64, weight: f64) -> Result<Self> {
        Ok(Self {
            profile: CreatureProfile::new(name, Self::SPECIES, age, weight)?,
            fur_color: "grey".to_string(),
            tusk_length: 1.0,
        })
    }

    pub fn with_fur_color(mut self, fur_color: impl Into<String>) -> Self {
        self.fur_color = fur_color.into();
        self
    }

    pub fn with_tusk_length(mut self, tusk_length: f64) -> Self {
        self.tusk_length = tusk_length;
        self
    }

    pub fn tusk_length(&self) -> f64 {
        self.tusk_length
    }

    pub fn spray_water(&self, out: &mut dyn Narrator) {
        out.say(format!("  💦 {} sprays water from its trunk", self.name()));
    }
}

impl Creature for Elephant {
    fn profile(&self) -> &CreatureProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut CreatureProfile {
        &mut self.profile
    }

    fn class(&self) -> AnimalClass {
        AnimalClass::Mammal
    }

    fn produce_sound(&self) -> &'static str {
        Self::SOUND
    }

    fn daily_activity(&self, out: &mut dyn Narrator) {
        out.say(format!(
            "  🐘 {} is showering itself with its trunk",
            self.name()
        ));
    }

    fn special_behavior(&self, out: &mut dyn Narrator) {
        self.spray_water(out);
    }

    fn class_behavior(&self, out: &mut dyn Narrator) {
        self.nurse_young(out);
    }
}

impl Mammal for Elephant {
    fn fur_color(&self) -> &str {
        &self.fur_color
    }
}

// =============================================================================
// Parrot
// =============================================================================

#[derive(Debug)]
pub struct Parrot {
    profile: CreatureProfile,
    wingspan: f64,
    vocabulary_size: u32,
}

impl Parrot {
    pub const SPECIES: &'static str = "Parrot";
    pub const SOUND: &'static str = "Squawk: Squawk squawk!";

    /// Phrase used when the parrot shows off in a special-behavior pass
    pub const SHOWCASE_PHRASE: &'static str = "Hello!";

    pub fn new(name: impl Into<String>, age: i64, weight: f64, wingspan: f64) -> Result<Self> {
        Ok(Self {
            profile: CreatureProfile::new(name, Self::SPECIES, age, weight)?,
            wingspan,
            vocabulary_size: 0,
        })
    }

    pub fn with_vocabulary_size(mut self, vocabulary_size: u32) -> Self {
        self.vocabulary_size = vocabulary_size;
        self
    }

    pub fn vocabulary_size(&self) -> u32 {
        self.vocabulary_size
    }

    pub fn mimic_speech(&self, phrase: &str, out: &mut dyn Narrator) {
        out.say(format!("  🗣️ {} mimics: \"{}\"", self.name(), phrase));
    }
}

impl Creature for Parrot {
    fn profile(&self) -> &CreatureProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut CreatureProfile {
        &mut self.profile
    }

    fn class(&self) -> AnimalClass {
        AnimalClass::Bird
    }

    fn produce_sound(&self) -> &'static str {
        Self::SOUND
    }

    fn daily_activity(&self, out: &mut dyn Narrator) {
        out.say(format!("  🦜 {} is hopping between branches", self.name()));
    }

    fn special_behavior(&self, out: &mut dyn Narrator) {
        self.mimic_speech(Self::SHOWCASE_PHRASE, out);
    }

    fn class_behavior(&self, out: &mut dyn Narrator) {
        self.fly(out);
    }
}

impl Bird for Parrot {
    fn wingspan(&self) -> f64 {
        self.wingspan
    }
}

// =============================================================================
// Snake
// =============================================================================

#[derive(Debug)]
pub struct Snake {
    profile: CreatureProfile,
    scale_type: String,
    /// Metres
    length: f64,
    is_venomous: bool,
}

impl Snake {
    pub const SPECIES: &'static str = "Snake";
    pub const SOUND: &'static str = "Hiss: Ssssss...";

    pub fn new(name: impl Into<String>, age: i64, weight: f64, length: f64) -> Result<Self> {
        Ok(Self {
            profile: CreatureProfile::new(name, Self::SPECIES, age, weight)?,
            scale_type: "smooth scales".to_string(),
            length,
            is_venomous: false,
        })
    }

    pub fn with_scale_type(mut self, scale_type: impl Into<String>) -> Self {
        self.scale_type = scale_type.into();
        self
    }

    pub fn venomous(mut self, is_venomous: bool) -> Self {
        self.is_venomous = is_venomous;
        self
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn is_venomous(&self) -> bool {
        self.is_venomous
    }

    pub fn shed_skin(&self, out: &mut dyn Narrator) {
        let venom = if self.is_venomous {
            "venomous"
        } else {
            "non-venomous"
        };
        out.say(format!("  🔄 {} is shedding its skin ({})", self.name(), venom));
    }
}

impl Creature for Snake {
    fn profile(&self) -> &CreatureProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut CreatureProfile {
        &mut self.profile
    }

    fn class(&self) -> AnimalClass {
        AnimalClass::Reptile
    }

    fn produce_sound(&self) -> &'static str {
        Self::SOUND
    }

    fn daily_activity(&self, out: &mut dyn Narrator) {
        out.say(format!(
            "  🐍 {} is slithering through the grass, length: {:.1}m",
            self.name(),
            self.length
        ));
    }

    fn special_behavior(&self, out: &mut dyn Narrator) {
        self.shed_skin(out);
    }

    fn class_behavior(&self, out: &mut dyn Narrator) {
        self.bask_in_sun(out);
    }
}

impl Reptile for Snake {
    fn scale_type(&self) -> &str {
        &self.scale_type
    }
}
