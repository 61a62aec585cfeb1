mod args;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use typedex_client::{Error, SyncReport, Typedex, load_settings};

use crate::args::{Cli, Command, RosterAction, SyncTarget};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_report(report: &SyncReport) {
    println!("{}: {} records written", report.table, report.written);
}

async fn run(cli: Cli) -> Result<(), Error> {
    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        settings.store.data_dir = dir;
    }
    if cli.cap {
        settings.matchup.cap_at_double = true;
    }

    info!(
        data_dir = %settings.store.data_dir.display(),
        catalog = %settings.catalog.base_url,
        "Opening local store"
    );
    let dex = Typedex::open(&settings).await?;

    match cli.command {
        Command::Sync { target } => match target {
            SyncTarget::Types => print_report(&dex.sync_types().await?),
            SyncTarget::Species => print_report(&dex.sync_species().await?),
            SyncTarget::All => {
                let (types, species) = dex.sync_all().await?;
                print_report(&types);
                print_report(&species);
            }
        },
        Command::Seed => print_report(&dex.seed_builtin_types().await?),
        Command::Matchup {
            attack,
            defend,
            damage,
        } => {
            let matchup = dex.matchup(&attack, defend.as_slice()).await?;
            println!(
                "{} -> {}: x{} ({})",
                matchup.attack_type,
                matchup.defend_types.join("/"),
                matchup.multiplier,
                matchup.band
            );
            if let Some(base) = damage {
                println!("damage: {}", matchup.final_damage(base)?);
            }
        }
        Command::Profile { defend } => {
            let profile = dex.defensive_profile(defend.as_slice()).await?;
            println!("weak to:   {}", profile.weaknesses.join(", "));
            println!("resists:   {}", profile.resistances.join(", "));
            println!("immune to: {}", profile.immunities.join(", "));
        }
        Command::Search { query } => {
            for species in dex.search(&query).await? {
                println!("{:<16} {}", species.name, species.types.join("/"));
            }
        }
        Command::Species { name } => match dex.species(&name).await? {
            Some(species) => println!("{} {}", species.name, species.types.join("/")),
            None => println!("{} is not in the local store; try `typedex sync species`", name),
        },
        Command::Hp { base, level } => println!("{}", dex.total_hp(base, level)?),
        Command::Roster { action } => match action {
            RosterAction::Add { name } => {
                let entry = dex.roster_add(&name).await?;
                println!("added {}", entry.name);
            }
            RosterAction::Remove { name } => {
                if dex.roster_remove(&name).await? {
                    println!("removed {}", name.trim());
                } else {
                    println!("{} was not on the roster", name.trim());
                }
            }
            RosterAction::List => {
                for entry in dex.roster_list().await? {
                    println!("{}", entry.name);
                }
            }
        },
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => Ok(()),
        Err(e) if e.is_user_input() => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
        Err(e) if e.is_store_not_initialized() => {
            eprintln!("error: {}; run `typedex sync` or `typedex seed` first", e);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
