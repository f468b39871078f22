//! CLI de simulation de réplication

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

mod commands;
mod display;

use commands::{profiles, replicate};

#[derive(Parser)]
#[command(name = "helix")]
#[command(about = "Simulation de la réplication de l'ADN", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Réplique un brin d'ADN et journalise les événements moléculaires
    Replicate {
        /// Longueur du brin (nt)
        #[arg(short, long, default_value = "10000")]
        length: usize,

        /// Profil d'organisme
        #[arg(short, long, value_enum, default_value = "ecoli")]
        organism: OrganismChoice,

        /// Avancée demandée par pas (nt)
        #[arg(short, long, default_value = "1000")]
        step: i64,

        /// Seed du générateur aléatoire
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Active la relecture sur le brin directeur
        #[arg(short, long)]
        proofreading: bool,

        /// Conserve et affiche l'historique des événements
        #[arg(short = 'd', long)]
        detailed_log: bool,

        /// Exporte statistiques et journal en JSON
        #[arg(short, long)]
        json: Option<PathBuf>,
    },

    /// Liste les profils d'organismes disponibles
    Profiles,
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum OrganismChoice {
    Ecoli,
    Human,
}

fn main() -> anyhow::Result<()> {
    helix_core::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Replicate {
            length,
            organism,
            step,
            seed,
            proofreading,
            detailed_log,
            json,
        } => {
            replicate::run(length, organism, step, seed, proofreading, detailed_log, json)?;
        }
        Commands::Profiles => {
            profiles::run();
        }
    }

    Ok(())
}

/// Crée une barre de progression
pub fn create_progress_bar(length: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );
    pb.set_message(msg.to_string());
    pb
}
