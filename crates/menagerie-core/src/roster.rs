//! Built-in sample roster used by the zoo tour

use crate::creature::Creature;
use crate::species::{Elephant, Lion, Parrot, Snake};
use crate::zoo::Zoo;
use crate::Result;

/// The four residents of the demo zoo, in the order they arrive
pub fn sample_roster() -> Result<Vec<Box<dyn Creature>>> {
    let roster: Vec<Box<dyn Creature>> = vec![
        Box::new(
            Lion::new("Simba", 5, 190.0)?
                .with_fur_color("golden")
                .with_pride_size(3),
        ),
        Box::new(
            Elephant::new("Dumbo", 12, 5000.0)?
                .with_fur_color("grey")
                .with_tusk_length(1.5),
        ),
        Box::new(Parrot::new("Polly", 3, 0.4, 0.6)?.with_vocabulary_size(50)),
        Box::new(
            Snake::new("Verdi", 4, 2.5, 2.3)?
                .with_scale_type("smooth scales")
                .venomous(false),
        ),
    ];
    Ok(roster)
}

/// Add the sample roster to `zoo`, returning how many arrived
pub fn stock(zoo: &mut Zoo) -> Result<usize> {
    let roster = sample_roster()?;
    let n = roster.len();
    for creature in roster {
        zoo.add_boxed(creature);
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_sample_zoo() {
        let mut zoo = Zoo::new("City Zoo");
        assert_eq!(stock(&mut zoo).unwrap(), 4);

        let names: Vec<_> = zoo.iter().map(|c| c.name().to_string()).collect();
        assert_eq!(names, ["Simba", "Dumbo", "Polly", "Verdi"]);
        assert_eq!(zoo.species_breakdown().values().sum::<usize>(), 4);
    }
}
