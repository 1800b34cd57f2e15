//! Menagerie CLI - narrated object-oriented programming lessons
//!
//! Usage:
//!   menagerie tour [--seed N] [--json]   Run the zoo management tour
//!   menagerie accounts                   Encapsulation with bank accounts
//!   menagerie kennel                     Reuse through traits and delegation
//!   menagerie vectors                    Operator overloading
//!   menagerie lineage                    Operators with a domain meaning
//!   menagerie polymorphism               One method interface, many animals
//!   menagerie ducks                      Duck typing with traits
//!   menagerie all                        Every lesson, then the tour
//!   menagerie init                       Write a default config file

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use menagerie_core::roster::sample_roster;
use menagerie_core::{
    total_creatures, ConsoleNarrator, Creature, MenagerieConfig, Narrator, RandomStatus, Transcript,
};
use menagerie_lessons::{account, duck, kennel, lineage, polymorphism, vector};
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "menagerie")]
#[command(author, version, about = "Narrated object-oriented programming lessons")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Directory containing .menagerie/config.toml
    #[arg(long, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the sample zoo and run every zoo-wide pass
    Tour {
        /// Seed for reproducible health checkups (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Print final statistics as JSON instead of narrating
        #[arg(long)]
        json: bool,
    },

    /// Encapsulation and access control with bank accounts
    Accounts,

    /// Reuse through provided trait methods and delegation
    Kennel,

    /// Operator overloading on a 2-D vector
    Vectors,

    /// Pairing pets with `+` and `*`
    Lineage,

    /// One method interface, a different implementation per animal
    Polymorphism,

    /// Unrelated types sharing one interface
    Ducks,

    /// Run every lesson followed by the tour
    All {
        /// Seed for reproducible health checkups (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Write the default configuration file
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let root = cli.root;
    match cli.command {
        Commands::Init => cmd_init(&root),
        Commands::Tour { seed, json } => cmd_tour(&load_config(&root)?, seed, json),
        Commands::Accounts => cmd_lesson(&root, "Encapsulation: bank accounts", account::demo),
        Commands::Kennel => cmd_lesson(&root, "Reuse: the kennel", kennel::demo),
        Commands::Vectors => cmd_lesson(&root, "Operator overloading: vectors", vector::demo),
        Commands::Lineage => cmd_lesson(&root, "Operators with meaning: lineage", lineage::demo),
        Commands::Polymorphism => cmd_lesson(
            &root,
            "Method polymorphism: one interface",
            polymorphism::demo,
        ),
        Commands::Ducks => cmd_lesson(&root, "Duck typing", duck::demo),
        Commands::All { seed } => cmd_all(&load_config(&root)?, seed),
    }
}

type Demo = fn(&mut dyn Narrator) -> menagerie_core::Result<()>;

fn load_config(root: &Path) -> Result<MenagerieConfig> {
    let config = MenagerieConfig::load_or_default(root)
        .with_context(|| format!("Failed to load config under {:?}", root))?;
    debug!("Loaded config: {:?}", config);
    Ok(config)
}

fn cmd_lesson(root: &Path, title: &str, demo: Demo) -> Result<()> {
    let config = load_config(root)?;
    lesson(&mut ConsoleNarrator, config.narration.banner_width, title, demo)
}

fn lesson(out: &mut dyn Narrator, width: usize, title: &str, demo: Demo) -> Result<()> {
    info!("Running lesson: {}", title);
    out.blank();
    out.banner(title, width);
    demo(out).with_context(|| format!("Lesson failed: {}", title))?;
    Ok(())
}

fn cmd_init(root: &Path) -> Result<()> {
    info!("Initializing Menagerie in {:?}", root);
    let path = MenagerieConfig::write_default(root).context("Failed to write config")?;
    println!("Created {:?}", path);
    Ok(())
}

fn cmd_tour(config: &MenagerieConfig, seed: Option<u64>, json: bool) -> Result<()> {
    if json {
        // Narration is discarded; only the statistics reach stdout
        let mut sink = Transcript::new();
        let stats = run_tour(config, seed, &mut sink)?;
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    run_tour(config, seed, &mut ConsoleNarrator)?;
    Ok(())
}

fn run_tour(
    config: &MenagerieConfig,
    seed: Option<u64>,
    out: &mut dyn Narrator,
) -> Result<menagerie_core::ZooStatistics> {
    let width = config.narration.banner_width;

    out.banner("Building the zoo management system", width);
    let mut zoo = config.build_zoo()?;
    out.blank();
    out.say(format!("🏛️ {} is open!", zoo.name()));

    out.blank();
    out.banner("Adding animals to the zoo", width);
    for creature in sample_roster()? {
        out.say(format!(
            "✓ New animal: {} - {}",
            creature.species(),
            creature.name()
        ));
        let label = creature.label();
        zoo.add_boxed(creature);
        out.say(format!("   ✓ {} has joined the zoo", label));
    }

    zoo.for_each_feed(out);
    zoo.for_each_activity(out);

    let seed = seed.or(config.checkup.seed);
    debug!("Checkup seed: {:?}", seed);
    zoo.checkup_all(&mut RandomStatus::from_seed(seed), out)?;

    zoo.show_special_behaviors(out);
    zoo.report_statistics(out);

    out.blank();
    out.say(zoo.to_string());
    out.say(format!("Animal count: {}", zoo.count()));
    out.say(format!("First animal: {}", zoo.at(0)?.label()));
    out.say(format!("Creatures constructed: {}", total_creatures()));

    out.blank();
    out.banner("Zoo management demo complete", width);
    Ok(zoo.statistics())
}

fn cmd_all(config: &MenagerieConfig, seed: Option<u64>) -> Result<()> {
    let mut out = ConsoleNarrator;
    let width = config.narration.banner_width;

    lesson(&mut out, width, "Encapsulation: bank accounts", account::demo)?;
    lesson(&mut out, width, "Reuse: the kennel", kennel::demo)?;
    lesson(&mut out, width, "Operator overloading: vectors", vector::demo)?;
    lesson(&mut out, width, "Operators with meaning: lineage", lineage::demo)?;
    lesson(&mut out, width, "Method polymorphism: one interface", polymorphism::demo)?;
    lesson(&mut out, width, "Duck typing", duck::demo)?;

    out.blank();
    run_tour(config, seed, &mut out)?;
    Ok(())
}
