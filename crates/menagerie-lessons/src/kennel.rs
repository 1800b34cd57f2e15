//! Reuse without inheritance
//!
//! [`Companion`] supplies shared behavior through provided methods. Richer
//! dogs wrap a simpler one and delegate to it: [`PedigreeDog`] extends its
//! base dog's feeding, [`ServiceDog`] layers a job on top of a pedigree, and
//! [`WildDog`] replaces feeding and sleeping outright.

use menagerie_core::{Narrator, Result};

/// Behavior every household mammal shares
pub trait Companion {
    fn name(&self) -> &str;

    fn age(&self) -> u32;

    /// Label used in [`Companion::info`]
    fn kind(&self) -> &'static str;

    fn feed(&self, out: &mut dyn Narrator) {
        out.say(format!("Feeding {} some nutritious food", self.name()));
    }

    fn sleep(&self, out: &mut dyn Narrator) {
        out.say(format!("{} is sleeping Zzz...", self.name()));
    }

    fn breathe(&self, out: &mut dyn Narrator) {
        out.say(format!("{} is breathing", self.name()));
    }

    fn info(&self) -> String {
        format!("{}: {}, {} yrs", self.kind(), self.name(), self.age())
    }
}

#[derive(Debug, Clone)]
pub struct Dog {
    name: String,
    age: u32,
}

impl Dog {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn bark(&self, out: &mut dyn Narrator) {
        out.say(format!("{} barks: Woof woof!", self.name));
    }

    pub fn fetch(&self, out: &mut dyn Narrator) {
        out.say(format!("{} is fetching the ball", self.name));
    }
}

impl Companion for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn kind(&self) -> &'static str {
        "Dog"
    }
}

#[derive(Debug, Clone)]
pub struct Cat {
    name: String,
    age: u32,
}

impl Cat {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn meow(&self, out: &mut dyn Narrator) {
        out.say(format!("{} meows: Meow!", self.name));
    }

    pub fn scratch(&self, out: &mut dyn Narrator) {
        out.say(format!("{} is scratching the sofa", self.name));
    }
}

impl Companion for Cat {
    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn kind(&self) -> &'static str {
        "Cat"
    }
}

/// A dog with a recorded breed
#[derive(Debug, Clone)]
pub struct PedigreeDog {
    dog: Dog,
    breed: String,
}

impl PedigreeDog {
    pub fn new(name: impl Into<String>, age: u32, breed: impl Into<String>) -> Self {
        Self {
            dog: Dog::new(name, age),
            breed: breed.into(),
        }
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn dog(&self) -> &Dog {
        &self.dog
    }
}

impl Companion for PedigreeDog {
    fn name(&self) -> &str {
        self.dog.name()
    }

    fn age(&self) -> u32 {
        self.dog.age()
    }

    fn kind(&self) -> &'static str {
        "PedigreeDog"
    }

    fn feed(&self, out: &mut dyn Narrator) {
        self.dog.feed(out);
        out.say(format!("  with food prepared specially for a {}", self.breed));
    }

    fn info(&self) -> String {
        format!(
            "{}: {}, {} yrs, breed: {}",
            self.kind(),
            self.name(),
            self.age(),
            self.breed
        )
    }
}

/// A pedigree dog trained for a job
#[derive(Debug, Clone)]
pub struct ServiceDog {
    pedigree: PedigreeDog,
    service: String,
}

impl ServiceDog {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        breed: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            pedigree: PedigreeDog::new(name, age, breed),
            service: service.into(),
        }
    }

    pub fn work(&self, out: &mut dyn Narrator) {
        out.say(format!(
            "{} is on duty as a {}",
            self.name(),
            self.service
        ));
    }

    pub fn pedigree(&self) -> &PedigreeDog {
        &self.pedigree
    }
}

impl Companion for ServiceDog {
    fn name(&self) -> &str {
        self.pedigree.name()
    }

    fn age(&self) -> u32 {
        self.pedigree.age()
    }

    fn kind(&self) -> &'static str {
        "ServiceDog"
    }

    fn feed(&self, out: &mut dyn Narrator) {
        self.pedigree.feed(out);
    }

    fn info(&self) -> String {
        format!(
            "{}: {}, {} yrs, breed: {}, service: {}",
            self.kind(),
            self.name(),
            self.age(),
            self.pedigree.breed(),
            self.service
        )
    }
}

/// Replaces feeding and sleeping without consulting any shared version
#[derive(Debug, Clone)]
pub struct WildDog {
    name: String,
    age: u32,
}

impl WildDog {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl Companion for WildDog {
    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn kind(&self) -> &'static str {
        "WildDog"
    }

    fn feed(&self, out: &mut dyn Narrator) {
        out.say(format!("{} is hunting for food in the wild", self.name));
    }

    fn sleep(&self, out: &mut dyn Narrator) {
        out.say(format!("{} rests warily in its den", self.name));
    }
}

pub fn demo(out: &mut dyn Narrator) -> Result<()> {
    out.say("【1. Shared behavior through provided methods】".to_string());
    let buddy = Dog::new("Buddy", 3);
    let whiskers = Cat::new("Whiskers", 2);
    buddy.feed(out);
    buddy.sleep(out);
    buddy.breathe(out);
    buddy.bark(out);
    buddy.fetch(out);
    whiskers.feed(out);
    whiskers.meow(out);
    whiskers.scratch(out);
    out.say(buddy.info());
    out.say(whiskers.info());

    out.blank();
    out.say("【2. Extending a base through delegation】".to_string());
    let max = PedigreeDog::new("Max", 5, "Golden Retriever");
    max.feed(out);
    out.say(max.info());

    out.blank();
    out.say("【3. Multiple layers】".to_string());
    let lucy = ServiceDog::new("Lucy", 4, "Labrador", "guide dog");
    lucy.breathe(out);
    lucy.feed(out);
    lucy.work(out);
    out.say(lucy.info());

    out.blank();
    out.say("【4. Replacing shared behavior】".to_string());
    let shadow = WildDog::new("Shadow", 6);
    shadow.feed(out);
    shadow.sleep(out);
    shadow.breathe(out);

    out.blank();
    let pack: [&dyn Companion; 5] = [&buddy, &whiskers, &max, &lucy, &shadow];
    out.say(format!("The kennel holds {} companions:", pack.len()));
    for companion in pack {
        out.say(format!("  - {}", companion.info()));
    }
    Ok(())
}
