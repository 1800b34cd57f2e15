//! Giving `+` and `*` a domain meaning: pairing two pets yields offspring

use menagerie_core::{Narrator, Result};
use std::ops::{Add, Mul};

/// Offspring produced by `*`
pub const LITTER_SIZE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    pub name: String,
    pub age: u32,
}

impl Pet {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl std::fmt::Display for Pet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} yrs)", self.name, self.age)
    }
}

/// One offspring: names concatenated, lifespan of the older parent
impl Add for &Pet {
    type Output = Pet;

    fn add(self, other: Self) -> Pet {
        Pet::new(
            format!("{}{}", self.name, other.name),
            self.age.max(other.age),
        )
    }
}

/// A litter of [`LITTER_SIZE`] numbered offspring
impl Mul for &Pet {
    type Output = Vec<Pet>;

    fn mul(self, other: Self) -> Vec<Pet> {
        (1..=LITTER_SIZE)
            .map(|i| {
                Pet::new(
                    format!("{}{}_{}", self.name, other.name, i),
                    self.age.max(other.age),
                )
            })
            .collect()
    }
}

pub fn demo(out: &mut dyn Narrator) -> Result<()> {
    let max = Pet::new("Max", 5);
    let pumpkin = Pet::new("Pumpkin", 8);
    out.say(format!("Parent: {}", max));
    out.say(format!("Parent: {}", pumpkin));

    let child = &max + &pumpkin;
    out.say(format!("✓ {} and {} produced offspring!", max.name, pumpkin.name));
    out.say(format!("Offspring: {}", child));

    out.blank();
    let litter = &max * &pumpkin;
    out.say(format!(
        "✓ {} and {} produced {} offspring!",
        max.name,
        pumpkin.name,
        litter.len()
    ));
    for pet in &litter {
        out.say(format!("  - {}", pet));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_combines_names_and_keeps_older_age() {
        let child = &Pet::new("Max", 5) + &Pet::new("Pumpkin", 8);
        assert_eq!(child, Pet::new("MaxPumpkin", 8));
        assert_eq!(child.to_string(), "MaxPumpkin (8 yrs)");
    }

    #[test]
    fn test_mul_produces_numbered_litter() {
        let litter = &Pet::new("Max", 5) * &Pet::new("Pumpkin", 3);
        assert_eq!(litter.len(), LITTER_SIZE);
        assert_eq!(litter[0].name, "MaxPumpkin_1");
        assert_eq!(litter[1].name, "MaxPumpkin_2");
        assert!(litter.iter().all(|p| p.age == 5));
    }
}
