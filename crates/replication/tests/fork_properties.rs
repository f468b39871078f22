//! Propriétés de la fourche et du réplisome (proptest)

use helix_replication::{OrganismProfile, ReplicationFork, Replisome, SimulationConfig};
use proptest::prelude::*;
use std::sync::Arc;

proptest! {
    /// 0 ≤ position ≤ dna_length quelle que soit la suite d'avancées
    #[test]
    fn fork_position_stays_in_bounds(
        dna_length in 1usize..100_000,
        steps in proptest::collection::vec(0usize..10_000, 0..50),
    ) {
        let mut fork =
            ReplicationFork::new(0, dna_length, Arc::new(OrganismProfile::e_coli())).unwrap();

        for step in steps {
            let actual = fork.safe_advance(step);
            prop_assert!(actual <= step);
            prop_assert!(fork.position() <= fork.dna_length());
            prop_assert!(fork.completion_percentage() <= 100.0);
        }
    }

    /// safe_advance retourne exactement l'avancée réalisée
    #[test]
    fn safe_advance_reports_actual(
        dna_length in 1usize..50_000,
        requested in 0usize..100_000,
    ) {
        let mut fork =
            ReplicationFork::new(0, dna_length, Arc::new(OrganismProfile::e_coli())).unwrap();

        let before = fork.position();
        let actual = fork.safe_advance(requested);
        prop_assert_eq!(fork.position(), before + actual);
        prop_assert_eq!(actual, requested.min(dna_length));
    }

    /// Le brin directeur suit la fourche, le brin retardé ne la dépasse jamais
    #[test]
    fn strand_progress_invariants(
        seed in any::<u64>(),
        steps in proptest::collection::vec(-100i64..3_000, 1..40),
    ) {
        let config = SimulationConfig { seed, ..Default::default() };
        let mut replisome =
            Replisome::new(OrganismProfile::e_coli(), 20_000, config).unwrap();

        for step in steps {
            replisome.advance_fork(step).unwrap();
            let state = replisome.current_state();
            prop_assert_eq!(state.leading_progress, state.fork_position);
            prop_assert!(state.lagging_progress <= state.fork_position);
            prop_assert!(state.fork_position <= state.dna_length);
        }
    }
}
