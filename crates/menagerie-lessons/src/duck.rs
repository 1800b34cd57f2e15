//! Duck typing, Rust style: unrelated types share an interface by
//! implementing the same trait

use menagerie_core::{Narrator, Result};

pub trait Quacker {
    fn kind(&self) -> &'static str;

    fn swim(&self) -> &'static str;

    fn quack(&self) -> &'static str;
}

#[derive(Debug, Default)]
pub struct Duck;

#[derive(Debug, Default)]
pub struct Person;

#[derive(Debug, Default)]
pub struct Robot;

impl Quacker for Duck {
    fn kind(&self) -> &'static str {
        "Duck"
    }

    fn swim(&self) -> &'static str {
        "The duck paddles across the pond"
    }

    fn quack(&self) -> &'static str {
        "Quack quack!"
    }
}

impl Quacker for Person {
    fn kind(&self) -> &'static str {
        "Person"
    }

    fn swim(&self) -> &'static str {
        "The person swims a few laps"
    }

    fn quack(&self) -> &'static str {
        "(imitating) Quack quack!"
    }
}

impl Quacker for Robot {
    fn kind(&self) -> &'static str {
        "Robot"
    }

    fn swim(&self) -> &'static str {
        "The robot propels itself through the water"
    }

    fn quack(&self) -> &'static str {
        "Synthesized: QUACK QUACK!"
    }
}

/// Anything that can quack and swim gets the same treatment
pub fn make_it_quack(subject: &dyn Quacker, out: &mut dyn Narrator) {
    out.say(format!("{}:", subject.kind()));
    out.say(format!("  - {}", subject.quack()));
    out.say(format!("  - {}", subject.swim()));
}

pub fn demo(out: &mut dyn Narrator) -> Result<()> {
    out.say("If it walks like a duck and quacks like a duck...".to_string());
    let subjects: [&dyn Quacker; 3] = [&Duck, &Person, &Robot];
    for subject in subjects {
        out.blank();
        make_it_quack(subject, out);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use menagerie_core::Transcript;

    #[test]
    fn test_every_quacker_is_handled_alike() {
        let mut t = Transcript::new();
        demo(&mut t).unwrap();
        assert_eq!(t.count("  - "), 6);
        assert!(t.contains("Synthesized: QUACK QUACK!"));
        assert!(t.position("Duck:").unwrap() < t.position("Robot:").unwrap());
    }
}
