//! Method polymorphism: one interface, a different implementation per type
//!
//! [`interact`] handles every [`Speaker`] the same way and never asks which
//! concrete type it was given.

use menagerie_core::{Narrator, Result};

pub trait Speaker {
    fn name(&self) -> &str;

    fn speak(&self) -> String;

    /// How the animal gets around
    fn move_about(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct Dog {
    name: String,
}

impl Dog {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone)]
pub struct Cat {
    name: String,
}

impl Cat {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone)]
pub struct Bird {
    name: String,
}

impl Bird {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone)]
pub struct Fish {
    name: String,
}

impl Fish {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Speaker for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self) -> String {
        format!("{} says: Woof woof!", self.name)
    }

    fn move_about(&self) -> String {
        format!("{} is running", self.name)
    }
}

impl Speaker for Cat {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self) -> String {
        format!("{} says: Meow meow!", self.name)
    }

    fn move_about(&self) -> String {
        format!("{} is strolling gracefully", self.name)
    }
}

impl Speaker for Bird {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self) -> String {
        format!("{} says: Tweet tweet!", self.name)
    }

    fn move_about(&self) -> String {
        format!("{} is flying", self.name)
    }
}

impl Speaker for Fish {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self) -> String {
        format!("{} cannot make a sound underwater", self.name)
    }

    fn move_about(&self) -> String {
        format!("{} is swimming", self.name)
    }
}

pub fn interact(animal: &dyn Speaker, out: &mut dyn Narrator) {
    out.say(format!("Interacting with {}:", animal.name()));
    out.say(format!("  - {}", animal.speak()));
    out.say(format!("  - {}", animal.move_about()));
}

pub fn demo(out: &mut dyn Narrator) -> Result<()> {
    let animals: Vec<Box<dyn Speaker>> = vec![
        Box::new(Dog::new("Buddy")),
        Box::new(Cat::new("Whiskers")),
        Box::new(Bird::new("Tweety")),
        Box::new(Fish::new("Nemo")),
    ];

    out.say("One function, every kind of animal:".to_string());
    for animal in &animals {
        out.blank();
        interact(animal.as_ref(), out);
    }
    out.blank();
    out.say(format!(
        "✓ {} animals handled without checking their type",
        animals.len()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use menagerie_core::Transcript;

    #[test]
    fn test_each_type_answers_in_its_own_way() {
        assert_eq!(Dog::new("Buddy").speak(), "Buddy says: Woof woof!");
        assert_eq!(Cat::new("Whiskers").move_about(), "Whiskers is strolling gracefully");
        assert_eq!(Bird::new("Tweety").move_about(), "Tweety is flying");
        assert_eq!(
            Fish::new("Nemo").speak(),
            "Nemo cannot make a sound underwater"
        );
    }

    #[test]
    fn test_interact_is_uniform() {
        let mut t = Transcript::new();
        interact(&Fish::new("Nemo"), &mut t);
        assert_eq!(
            t.lines(),
            &[
                "Interacting with Nemo:",
                "  - Nemo cannot make a sound underwater",
                "  - Nemo is swimming",
            ]
        );
    }

    #[test]
    fn test_demo_visits_every_animal_in_order() {
        let mut t = Transcript::new();
        demo(&mut t).unwrap();

        assert_eq!(t.count("Interacting with "), 4);
        assert_eq!(t.count("  - "), 8);
        let buddy = t.position("Interacting with Buddy").unwrap();
        let nemo = t.position("Interacting with Nemo").unwrap();
        assert!(buddy < nemo);
        assert!(t.contains("✓ 4 animals handled"));
    }
}
