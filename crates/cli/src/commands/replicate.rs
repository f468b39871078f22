//! Commande de réplication

use crate::create_progress_bar;
use crate::display::stats;
use crate::OrganismChoice;
use anyhow::Result;
use console::style;
use helix_replication::{OrganismProfile, Replisome, SimulationConfig};
use std::path::PathBuf;

#[allow(clippy::too_many_arguments)]
pub fn run(
    length: usize,
    organism: OrganismChoice,
    step: i64,
    seed: u64,
    proofreading: bool,
    detailed_log: bool,
    json: Option<PathBuf>,
) -> Result<()> {
    if step <= 0 {
        anyhow::bail!("le pas doit être strictement positif");
    }

    let profile = match organism {
        OrganismChoice::Ecoli => OrganismProfile::e_coli(),
        OrganismChoice::Human => OrganismProfile::human(),
    };

    println!(
        "🧬 {} {} nt (seed {})",
        style("Réplication de").bold(),
        length,
        seed
    );

    // 1. Assembler le réplisome
    let config = SimulationConfig {
        proofreading,
        detailed_logging: detailed_log || json.is_some(),
        seed,
        ..Default::default()
    };
    let mut replisome = Replisome::new(profile, length, config)?;

    // 2. Dérouler la simulation
    let pb = create_progress_bar(length as u64, "Réplication en cours...");
    while !replisome.is_complete() {
        replisome.advance_fork(step)?;
        pb.set_position(replisome.fork().position() as u64);
    }
    pb.finish_with_message(String::from("Réplication terminée"));

    // 3. Afficher les résultats
    let statistics = replisome.statistics();
    println!("\n📊 Résultats de la réplication:");
    stats::display_statistics(&statistics);

    println!("\n🧩 Fragments d'Okazaki:");
    stats::display_fragments(replisome.lagging().fragments());

    if detailed_log {
        println!("\n📜 {} événements journalisés", replisome.event_log().len());
    }

    // 4. Export JSON
    if let Some(path) = json {
        let report = serde_json::json!({
            "statistics": statistics,
            "state": replisome.current_state(),
            "events": replisome.event_log(),
        });
        std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;
        println!("\n💾 Rapport écrit dans {}", path.display());
    }

    println!("\n✅ Réplication terminée!");

    Ok(())
}
