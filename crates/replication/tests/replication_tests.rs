//! Tests d'intégration de la simulation de réplication

use helix_replication::{
    EventType, OrganismProfile, ReplicationFork, Replisome, SimulationConfig, Strand,
};
use std::sync::Arc;

fn e_coli_replisome(dna_length: usize) -> Replisome {
    Replisome::new(OrganismProfile::e_coli(), dna_length, SimulationConfig::default()).unwrap()
}

#[test]
fn test_e_coli_first_step_event_content() {
    // Profil E. coli: vitesse 1000 bp/s, fragments [1000, 2000], amorces [3, 10]
    let mut replisome = e_coli_replisome(10_000);
    let events = replisome.advance_fork(500).unwrap();

    // Exactement un unwind de 500 nt
    let unwinds: Vec<_> = events
        .iter()
        .filter(|e| e.event_type == EventType::Unwind)
        .collect();
    assert_eq!(unwinds.len(), 1);
    assert_eq!(unwinds[0].base_pairs, Some(500));

    // Au moins une synthèse de 500 nt sur le brin directeur
    assert!(events.iter().any(|e| {
        e.event_type == EventType::DnaSynthesis
            && e.strand == Strand::Leading
            && e.base_pairs == Some(500)
    }));

    // Au moins une synthèse d'amorce sur le brin retardé
    assert!(events
        .iter()
        .any(|e| e.event_type == EventType::PrimerSynthesis && e.strand == Strand::Lagging));
}

#[test]
fn test_fork_is_capped_at_dna_length() {
    let mut replisome = e_coli_replisome(10_000);
    replisome.advance_fork(9_950).unwrap();
    assert_eq!(replisome.fork().position(), 9_950);

    // 100 demandés, 50 restants: la fourche s'arrête à 10 000
    replisome.advance_fork(100).unwrap();
    assert_eq!(replisome.fork().position(), 10_000);
}

#[test]
fn test_safe_advance_boundary() {
    let mut fork =
        ReplicationFork::new(9_500, 10_000, Arc::new(OrganismProfile::e_coli())).unwrap();
    assert_eq!(fork.remaining(), 500);
    assert_eq!(fork.safe_advance(1_000), 500);
    assert_eq!(fork.position(), 10_000);
}

#[test]
fn test_noop_requests_mutate_nothing() {
    let mut replisome = e_coli_replisome(10_000);
    replisome.advance_fork(1_000).unwrap();
    let before = replisome.current_state();

    assert!(replisome.advance_fork(0).unwrap().is_empty());
    assert!(replisome.advance_fork(-100).unwrap().is_empty());

    let after = replisome.current_state();
    assert_eq!(after.fork_position, before.fork_position);
    assert_eq!(after.leading_progress, before.leading_progress);
    assert_eq!(after.lagging_progress, before.lagging_progress);
    assert_eq!(after.active_fragments, before.active_fragments);
}

#[test]
fn test_leading_strand_tracks_fork_exactly() {
    let mut replisome = e_coli_replisome(10_000);

    for step in [500, 1, 2_000, 137, 999] {
        replisome.advance_fork(step).unwrap();
        let state = replisome.current_state();
        assert_eq!(state.leading_progress, state.fork_position);
    }
}

#[test]
fn test_lagging_strand_never_outruns_fork() {
    let mut replisome = e_coli_replisome(50_000);

    for _ in 0..100 {
        replisome.advance_fork(700).unwrap();
        let state = replisome.current_state();
        assert!(state.lagging_progress <= state.fork_position);
    }
}

#[test]
fn test_fragment_lifecycle_is_monotonic() {
    let mut replisome = e_coli_replisome(30_000);
    let mut seen_complete = std::collections::HashSet::new();

    while !replisome.is_complete() {
        replisome.advance_fork(1_000).unwrap();

        for frag in replisome.lagging().fragments() {
            // ligaturé ⇒ amorce excisée
            if frag.ligated() {
                assert!(frag.primer_removed());
                seen_complete.insert(frag.id);
            }
            // Aucun retour en arrière
            if seen_complete.contains(&frag.id) {
                assert!(frag.ligated());
            }
        }
    }
}

#[test]
fn test_replication_runs_to_completion() {
    let mut replisome = e_coli_replisome(10_000);
    let mut steps = 0;

    while !replisome.is_complete() {
        replisome.advance_fork(1_000).unwrap();
        steps += 1;
        assert!(steps <= 20, "la simulation ne converge pas");
    }

    let stats = replisome.statistics();
    assert_eq!(stats.fork_position, 10_000);
    assert_eq!(stats.completion_percentage, 100.0);
    assert_eq!(stats.fragment_count, stats.completed_fragments);
    assert!(stats.fragment_count >= 4, "10 kb / fragments de 2 kb max");

    // Une fourche complète n'émet plus rien
    assert!(replisome.advance_fork(1_000).unwrap().is_empty());
}

#[test]
fn test_speed_ratios_per_organism() {
    use helix_replication::{Enzyme, EnzymeKind, PolymeraseVariant};

    for organism in [OrganismProfile::e_coli(), OrganismProfile::human()] {
        let pol3 = Enzyme::new(
            EnzymeKind::Polymerase(PolymeraseVariant::PolIII),
            &organism,
        )
        .unwrap();
        let helicase = Enzyme::new(EnzymeKind::Helicase, &organism).unwrap();
        let ligase = Enzyme::new(EnzymeKind::Ligase, &organism).unwrap();
        let primase = Enzyme::new(EnzymeKind::Primase, &organism).unwrap();
        let exo = Enzyme::new(EnzymeKind::Exonuclease, &organism).unwrap();

        let reference = pol3.speed(&organism);
        assert_eq!(helicase.speed(&organism), reference);
        assert_eq!(ligase.speed(&organism), 2.0 * reference);
        assert_eq!(primase.speed(&organism), 0.10 * reference);
        assert_eq!(exo.speed(&organism), primase.speed(&organism));
    }
}

#[test]
fn test_fixed_seed_reproduces_event_sequence() {
    let run = |seed: u64| {
        let config = SimulationConfig {
            seed,
            detailed_logging: true,
            ..Default::default()
        };
        let mut replisome = Replisome::new(OrganismProfile::e_coli(), 20_000, config).unwrap();
        while !replisome.is_complete() {
            replisome.advance_fork(1_500).unwrap();
        }
        replisome.event_log().to_vec()
    };

    assert_eq!(run(42), run(42));
    assert_ne!(run(42), run(1337));
}

#[test]
fn test_human_profile_produces_shorter_fragments() {
    let mut replisome =
        Replisome::new(OrganismProfile::human(), 5_000, SimulationConfig::default()).unwrap();

    while !replisome.is_complete() {
        replisome.advance_fork(250).unwrap();
    }

    let stats = replisome.statistics();
    // Fragments eucaryotes: [100, 200] nt (le dernier peut être tronqué)
    assert!(stats.average_fragment_size <= 200.0);
    assert!(stats.fragment_count >= 15);
}
