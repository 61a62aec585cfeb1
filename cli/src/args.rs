//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "typedex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Sync the type catalog locally and resolve matchups offline")]
pub struct Cli {
    /// TOML settings file, layered over defaults and under `TYPEDEX__*` env vars
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the local store directory
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Clamp total multipliers at 2x
    #[arg(long, global = true)]
    pub cap: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SyncTarget {
    Types,
    Species,
    All,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the remote catalog into the local store
    Sync {
        #[arg(value_enum, default_value_t = SyncTarget::All)]
        target: SyncTarget,
    },
    /// Write the built-in type chart without network access
    Seed,
    /// Resolve an attacking type against one or two defending types
    Matchup {
        attack: String,
        #[arg(required = true, num_args = 1..=2)]
        defend: Vec<String>,
        /// Also print damage for this base value
        #[arg(long)]
        damage: Option<f64>,
    },
    /// Weaknesses, resistances and immunities of a defending type combination
    Profile {
        #[arg(required = true, num_args = 1..=2)]
        defend: Vec<String>,
    },
    /// Find stored species by name substring
    Search { query: String },
    /// Show the stored types of one species
    Species { name: String },
    /// Level-scaled HP from a base value
    Hp { base: f64, level: f64 },
    /// Manage the local roster
    Roster {
        #[command(subcommand)]
        action: RosterAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum RosterAction {
    Add { name: String },
    Remove { name: String },
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matchup_with_damage() {
        let cli = Cli::try_parse_from([
            "typedex", "--data-dir", "/tmp/dex", "matchup", "fire", "grass", "steel", "--damage",
            "40",
        ])
        .unwrap();

        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/dex")));
        match cli.command {
            Command::Matchup {
                attack,
                defend,
                damage,
            } => {
                assert_eq!(attack, "fire");
                assert_eq!(defend, vec!["grass", "steel"]);
                assert_eq!(damage, Some(40.0));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_matchup_rejects_three_defenders() {
        let result = Cli::try_parse_from(["typedex", "matchup", "fire", "a", "b", "c"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sync_defaults_to_all() {
        let cli = Cli::try_parse_from(["typedex", "sync"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Sync {
                target: SyncTarget::All
            }
        ));
    }

    #[test]
    fn test_roster_subcommands() {
        let cli = Cli::try_parse_from(["typedex", "roster", "add", "eevee"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Roster {
                action: RosterAction::Add { .. }
            }
        ));
    }
}
