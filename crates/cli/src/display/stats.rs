//! Affichage des statistiques de réplication

use helix_replication::{OkazakiFragment, ReplicationStatistics};
use tabled::{Table, Tabled};

/// Affiche le panneau de statistiques globales
pub fn display_statistics(stats: &ReplicationStatistics) {
    println!("┌──────────────────────────────────────────────┐");
    println!("│ Statistiques de Réplication                  │");
    println!("├──────────────────────────────────────────────┤");
    println!("│ Position de fourche    : {:>10} nt        │", stats.fork_position);
    println!("│ Complétion             : {:>9.1}%          │", stats.completion_percentage);
    println!("│ Brin directeur         : {:>10} nt        │", stats.leading_progress);
    println!("│ Brin retardé           : {:>10} nt        │", stats.lagging_progress);
    println!("│ Fragments d'Okazaki    : {:>10}           │", stats.fragment_count);
    println!("│ Fragments ligaturés    : {:>10}           │", stats.completed_fragments);
    println!("│ Taille moyenne         : {:>10.0} nt        │", stats.average_fragment_size);
    println!("│ Événements émis        : {:>10}           │", stats.event_count);
    println!("└──────────────────────────────────────────────┘");
}

#[derive(Tabled)]
struct FragmentRow {
    #[tabled(rename = "Fragment")]
    id: String,
    #[tabled(rename = "Début")]
    start: usize,
    #[tabled(rename = "Fin")]
    end: usize,
    #[tabled(rename = "Taille (nt)")]
    size: usize,
    #[tabled(rename = "Amorce")]
    primer: String,
    #[tabled(rename = "État")]
    state: String,
}

/// Affiche les premiers fragments en tableau
pub fn display_fragments(fragments: &[OkazakiFragment]) {
    const MAX_ROWS: usize = 10;

    if fragments.is_empty() {
        println!("Aucun fragment créé");
        return;
    }

    let rows: Vec<FragmentRow> = fragments
        .iter()
        .take(MAX_ROWS)
        .map(|frag| FragmentRow {
            id: frag.id.to_string(),
            start: frag.start,
            end: frag.end,
            size: frag.len(),
            primer: frag.primer().sequence().to_string(),
            state: if frag.ligated() {
                "ligaturé".to_string()
            } else if frag.primer_removed() {
                "amorce excisée".to_string()
            } else {
                "en extension".to_string()
            },
        })
        .collect();

    println!("{}", Table::new(rows));

    if fragments.len() > MAX_ROWS {
        println!("… et {} autres fragments", fragments.len() - MAX_ROWS);
    }
}
