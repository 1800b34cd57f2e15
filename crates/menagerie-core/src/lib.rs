//! # menagerie-core
//!
//! Core types for the Menagerie taxonomy demo.
//!
//! A zoo is a registry of creatures. Every creature shares one validated
//! record (name, species, age, weight, health) and supplies its own behavior
//! through the [`Creature`] trait; the zoo runs feeding, activity and checkup
//! passes by dispatching through that trait, never by inspecting species.
//!
//! ## Layout
//!
//! - [`creature`]: the shared record and the behavior contract
//! - [`species`]: mammal / bird / reptile class traits and the leaf species
//! - [`zoo`]: the registry and its aggregate passes
//! - [`checkup`]: injectable status sources for health checkups
//! - [`narration`]: where descriptive output goes
//! - [`config`]: `.menagerie/config.toml`

pub mod checkup;
pub mod config;
pub mod creature;
mod error;
pub mod narration;
pub mod roster;
pub mod species;
mod types;
pub mod zoo;

pub use checkup::{RandomStatus, ScriptedStatus, StatusSource};
pub use config::MenagerieConfig;
pub use creature::{total_creatures, Creature, CreatureProfile};
pub use error::{MenagerieError, Result};
pub use narration::{ConsoleNarrator, Narrator, Transcript};
pub use species::{Bird, Elephant, Lion, Mammal, Parrot, Reptile, Snake};
pub use types::*;
pub use zoo::{Zoo, ZooStatistics};
