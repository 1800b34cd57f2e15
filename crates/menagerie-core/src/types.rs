//! Core type definitions shared across the creature hierarchy

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status every creature starts with before its first checkup
pub const DEFAULT_HEALTH_STATUS: &str = "healthy";

/// Taxonomic class a species belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalClass {
    Mammal,
    Bird,
    Reptile,
}

impl AnimalClass {
    /// Food and amount handed out when a feeding pass supplies no explicit ration
    pub fn default_ration(self) -> Ration {
        match self {
            Self::Mammal => Ration::new("meat or plants", 2.0),
            Self::Bird => Ration::new("seeds or insects", 0.5),
            Self::Reptile => Ration::new("meat", 1.5),
        }
    }

    /// How a member of this class eats, used as the second feeding line
    pub fn eating_style(self) -> &'static str {
        match self {
            Self::Mammal => "is chewing the food with its teeth",
            Self::Bird => "is pecking at the food with its beak",
            Self::Reptile => "is swallowing the prey whole",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Mammal => "🥩",
            Self::Bird => "🌾",
            Self::Reptile => "🦎",
        }
    }
}

impl std::fmt::Display for AnimalClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mammal => write!(f, "mammal"),
            Self::Bird => write!(f, "bird"),
            Self::Reptile => write!(f, "reptile"),
        }
    }
}

impl std::str::FromStr for AnimalClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mammal" | "mammals" => Ok(Self::Mammal),
            "bird" | "birds" => Ok(Self::Bird),
            "reptile" | "reptiles" => Ok(Self::Reptile),
            _ => Err(format!("Invalid animal class: {}", s)),
        }
    }
}

/// A single portion of food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ration {
    pub food: String,
    /// Kilograms
    pub amount: f64,
}

impl Ration {
    pub fn new(food: impl Into<String>, amount: f64) -> Self {
        Self {
            food: food.into(),
            amount,
        }
    }
}

/// Stable identity of a creature record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatureId(Uuid);

impl CreatureId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CreatureId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CreatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "creature-{}", &self.0.to_string()[..8])
    }
}
