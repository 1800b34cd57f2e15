//! The zoo: an insertion-ordered registry of creatures
//!
//! The zoo owns its creatures as boxed trait objects and never branches on
//! species; every pass dispatches through [`Creature`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::checkup::{default_candidate_statuses, StatusSource};
use crate::creature::Creature;
use crate::narration::Narrator;
use crate::types::CreatureId;
use crate::{MenagerieError, Result};

/// Summary of a zoo's current population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZooStatistics {
    pub name: String,
    pub total: usize,
    pub breakdown: HashMap<String, usize>,
}

/// Registry of creatures in insertion order
#[derive(Debug)]
pub struct Zoo {
    name: String,
    creatures: Vec<Box<dyn Creature>>,
    candidate_statuses: Vec<String>,
}

impl Zoo {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        info!("Opened zoo {}", name);
        Self {
            name,
            creatures: Vec::new(),
            candidate_statuses: default_candidate_statuses(),
        }
    }

    /// Replace the statuses a checkup pass draws from
    pub fn with_candidate_statuses(mut self, statuses: Vec<String>) -> Result<Self> {
        if statuses.is_empty() {
            return Err(MenagerieError::Config(
                "candidate status list cannot be empty".to_string(),
            ));
        }
        self.candidate_statuses = statuses;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn candidate_statuses(&self) -> &[String] {
        &self.candidate_statuses
    }

    /// Append a creature. No duplicate check and no capacity limit.
    pub fn add(&mut self, creature: impl Creature + 'static) -> CreatureId {
        self.add_boxed(Box::new(creature))
    }

    pub fn add_boxed(&mut self, creature: Box<dyn Creature>) -> CreatureId {
        let id = creature.id();
        debug!("Adding {} to {}", creature.label(), self.name);
        self.creatures.push(creature);
        id
    }

    pub fn count(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Bounds-checked lookup
    pub fn at(&self, index: usize) -> Result<&dyn Creature> {
        self.creatures
            .get(index)
            .map(|c| c.as_ref())
            .ok_or(MenagerieError::IndexOutOfRange {
                index,
                len: self.creatures.len(),
            })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut (dyn Creature + 'static)> {
        let len = self.creatures.len();
        match self.creatures.get_mut(index) {
            Some(c) => Ok(c.as_mut()),
            None => Err(MenagerieError::IndexOutOfRange { index, len }),
        }
    }

    /// Look a creature up by identity
    pub fn get(&self, id: CreatureId) -> Option<&dyn Creature> {
        self.creatures
            .iter()
            .find(|c| c.id() == id)
            .map(|c| c.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Creature> {
        self.creatures.iter().map(|c| c.as_ref())
    }

    /// Feed every creature its class default ration, in insertion order
    pub fn for_each_feed(&self, out: &mut dyn Narrator) {
        out.blank();
        out.say(format!("📋 {} starts the daily feeding:", self.name));
        for creature in &self.creatures {
            out.blank();
            out.say(creature.info());
            creature.feed(out);
        }
        debug!("Fed {} creatures", self.creatures.len());
    }

    /// Sound then daily activity for every creature, in insertion order
    pub fn for_each_activity(&self, out: &mut dyn Narrator) {
        out.blank();
        out.say(format!("🌅 {} morning activities:", self.name));
        for creature in &self.creatures {
            out.blank();
            out.say(format!("{}:", creature.label()));
            out.say(format!("  Sound: {}", creature.produce_sound()));
            creature.daily_activity(out);
        }
    }

    /// Give every creature a checkup with a status chosen by `source`
    ///
    /// Every status is drawn before any record changes. A status outside the
    /// candidate set fails the whole pass with [`MenagerieError::Validation`]
    /// and leaves every record untouched.
    pub fn checkup_all(
        &mut self,
        source: &mut dyn StatusSource,
        out: &mut dyn Narrator,
    ) -> Result<()> {
        let statuses: Vec<String> = self
            .creatures
            .iter()
            .map(|_| source.choose(&self.candidate_statuses))
            .collect();

        if let Some(bad) = statuses
            .iter()
            .find(|s| !self.candidate_statuses.contains(s))
        {
            warn!("Rejected checkup status {:?} for {}", bad, self.name);
            return Err(MenagerieError::validation(format!(
                "checkup status {:?} is not one of {:?}",
                bad, self.candidate_statuses
            )));
        }

        out.blank();
        out.say(format!("🏥 {} runs a full health checkup:", self.name));
        for (creature, status) in self.creatures.iter_mut().zip(statuses) {
            creature.health_checkup(&status, out);
        }
        Ok(())
    }

    /// Class and species behaviors for every creature, in insertion order
    pub fn show_special_behaviors(&self, out: &mut dyn Narrator) {
        out.blank();
        out.say(format!("🎪 {} special behavior showcase:", self.name));
        for creature in &self.creatures {
            out.blank();
            out.say(format!("{}:", creature.label()));
            creature.class_behavior(out);
            creature.special_behavior(out);
        }
    }

    /// Count of creatures per species name
    pub fn species_breakdown(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for creature in &self.creatures {
            *counts.entry(creature.species().to_string()).or_insert(0) += 1;
        }
        counts
    }

    pub fn statistics(&self) -> ZooStatistics {
        ZooStatistics {
            name: self.name.clone(),
            total: self.count(),
            breakdown: self.species_breakdown(),
        }
    }

    /// Narrate the population summary
    pub fn report_statistics(&self, out: &mut dyn Narrator) {
        let stats = self.statistics();
        out.blank();
        out.say(format!("📊 {} statistics:", stats.name));
        out.say(format!("  Total animals: {}", stats.total));
        out.say("  Distribution:".to_string());

        let mut species: Vec<_> = stats.breakdown.into_iter().collect();
        species.sort();
        for (name, count) in species {
            out.say(format!("    - {}: {}", name, count));
        }
    }
}

impl std::fmt::Display for Zoo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} animals)", self.name, self.count())
    }
}
