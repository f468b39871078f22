//! Réplisome: orchestration d'un pas de simulation
//!
//! La machinerie moléculaire est logiquement concurrente mais simulée comme
//! une fonction de pas séquentielle et déterministe: chaque appel à
//! `advance_fork` mute l'état dans un ordre fixe puis rend la main.

use crate::enzyme::{Enzyme, EnzymeKind, PolymeraseVariant};
use crate::event::{ReplicationEvent, Strand};
use crate::fork::ReplicationFork;
use crate::fragment::FragmentId;
use crate::lagging::{LaggingStrandSynthesis, SynthesisTuning};
use crate::organism::OrganismProfile;
use chrono::{DateTime, Utc};
use helix_core::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Configuration d'une simulation de réplication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Variante de polymérase du brin directeur
    pub leading_polymerase: PolymeraseVariant,

    /// Variante de polymérase du brin retardé
    pub lagging_polymerase: PolymeraseVariant,

    /// Relecture systématique sur le brin directeur
    pub proofreading: bool,

    /// Conservation de l'historique complet des événements
    pub detailed_logging: bool,

    /// Seed du RNG (reproductibilité)
    pub seed: u64,

    /// Réglages de la synthèse retardée
    pub tuning: SynthesisTuning,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            leading_polymerase: PolymeraseVariant::PolIII,
            lagging_polymerase: PolymeraseVariant::PolIII,
            proofreading: false,
            detailed_logging: false,
            seed: 42,
            tuning: SynthesisTuning::default(),
        }
    }
}

/// Instantané d'une enzyme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnzymeSnapshot {
    pub kind: EnzymeKind,
    pub position: usize,
    pub strand: Strand,
    pub active: bool,
}

/// Instantané de l'état de la simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplisomeState {
    pub fork_position: usize,
    pub dna_length: usize,
    pub completion_percentage: f64,
    pub leading_progress: usize,
    pub lagging_progress: usize,
    pub active_fragments: Vec<FragmentId>,
    pub enzymes: Vec<EnzymeSnapshot>,
}

/// Statistiques agrégées d'une simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplicationStatistics {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub fork_position: usize,
    pub dna_length: usize,
    pub completion_percentage: f64,
    pub leading_progress: usize,
    pub lagging_progress: usize,
    pub fragment_count: usize,
    pub completed_fragments: usize,
    pub average_fragment_size: f64,
    pub event_count: usize,
}

/// Réplisome: propriétaire exclusif de la fourche, des enzymes et du
/// gestionnaire du brin retardé
#[derive(Debug)]
pub struct Replisome {
    config: SimulationConfig,
    fork: ReplicationFork,
    helicase: Enzyme,
    leading_polymerase: Enzyme,
    lagging: LaggingStrandSynthesis,
    leading_progress: usize,
    event_count: usize,
    event_log: Vec<ReplicationEvent>,
    run_id: Uuid,
    started_at: DateTime<Utc>,
}

impl Replisome {
    /// Assemble un réplisome
    ///
    /// Fail-fast: les six enzymes sont construites d'emblée, dans l'ordre
    /// hélicase, primase, polymérase directrice, polymérase retardée, ligase,
    /// exonucléase; le premier échec interrompt l'assemblage avec l'erreur de
    /// l'enzyme fautive.
    pub fn new(organism: OrganismProfile, dna_length: usize, config: SimulationConfig) -> Result<Self> {
        let organism = Arc::new(organism);
        let fork = ReplicationFork::new(0, dna_length, Arc::clone(&organism))?;

        let helicase = Enzyme::new(EnzymeKind::Helicase, &organism)?;
        let primase = Enzyme::new(EnzymeKind::Primase, &organism)?;
        let leading_polymerase = Enzyme::new(
            EnzymeKind::Polymerase(config.leading_polymerase),
            &organism,
        )?;
        let lagging_polymerase = Enzyme::new(
            EnzymeKind::Polymerase(config.lagging_polymerase),
            &organism,
        )?;
        let ligase = Enzyme::new(EnzymeKind::Ligase, &organism)?;
        let exonuclease = Enzyme::new(EnzymeKind::Exonuclease, &organism)?;

        let lagging = LaggingStrandSynthesis::new(
            Arc::clone(&organism),
            dna_length,
            primase,
            lagging_polymerase,
            ligase,
            exonuclease,
            config.tuning,
            config.seed,
        );

        Ok(Self {
            config,
            fork,
            helicase,
            leading_polymerase,
            lagging,
            leading_progress: 0,
            event_count: 0,
            event_log: Vec::new(),
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
        })
    }

    /// Avance la simulation d'un pas de `requested` nt au plus
    ///
    /// Ordre fixe: fourche et hélicase, brin directeur, brin retardé. Une
    /// demande nulle ou négative, ou une fourche déjà complète, est un no-op
    /// qui retourne une liste vide sans rien muter.
    pub fn advance_fork(&mut self, requested: i64) -> Result<Vec<ReplicationEvent>> {
        let actual = requested.min(self.fork.remaining() as i64);
        if actual <= 0 {
            return Ok(Vec::new());
        }
        let actual = actual as usize;

        // 1. Fourche et hélicase avancent du même pas
        self.fork.advance(actual);
        let mut events = vec![self.helicase.unwind(actual)];

        // 2. Brin directeur: la synthèse continue suit exactement la fourche
        events.push(self.leading_polymerase.synthesize(actual, Strand::Leading));
        self.leading_progress += actual;
        debug_assert_eq!(self.leading_progress, self.fork.position());

        if self.config.proofreading {
            events.push(self.leading_polymerase.proofread(Strand::Leading));
        }

        // 3. Brin retardé
        if !self.lagging.is_active() {
            events.extend(self.lagging.initiate_synthesis(self.fork.position())?);
        }
        events.extend(self.lagging.advance(self.fork.position(), actual)?);

        self.event_count += events.len();
        if self.config.detailed_logging {
            self.event_log.extend(events.iter().cloned());
        }

        tracing::debug!(
            step = actual,
            fork = self.fork.position(),
            events = events.len(),
            "pas de réplication"
        );

        Ok(events)
    }

    /// Instantané complet de l'état courant
    pub fn current_state(&self) -> ReplisomeState {
        let snapshot = |enzyme: &Enzyme, strand: Strand| EnzymeSnapshot {
            kind: enzyme.kind,
            position: enzyme.position,
            strand,
            active: enzyme.active,
        };

        ReplisomeState {
            fork_position: self.fork.position(),
            dna_length: self.fork.dna_length(),
            completion_percentage: self.fork.completion_percentage(),
            leading_progress: self.leading_progress,
            lagging_progress: self.lagging.synthesized(),
            active_fragments: self.lagging.active_fragments().iter().map(|f| f.id).collect(),
            enzymes: vec![
                snapshot(&self.helicase, Strand::Leading),
                snapshot(&self.leading_polymerase, Strand::Leading),
                snapshot(self.lagging.primase(), Strand::Lagging),
                snapshot(self.lagging.polymerase(), Strand::Lagging),
                snapshot(self.lagging.ligase(), Strand::Lagging),
                snapshot(self.lagging.exonuclease(), Strand::Lagging),
            ],
        }
    }

    /// La réplication est-elle terminée
    ///
    /// Vrai ssi la fourche a atteint la fin du brin et qu'aucun fragment
    /// n'attend encore sa ligature.
    pub fn is_complete(&self) -> bool {
        self.fork.is_complete() && self.lagging.active_fragments().is_empty()
    }

    /// Statistiques agrégées
    pub fn statistics(&self) -> ReplicationStatistics {
        let fragments = self.lagging.fragments();
        let average_fragment_size = if fragments.is_empty() {
            0.0
        } else {
            fragments.iter().map(|f| f.len()).sum::<usize>() as f64 / fragments.len() as f64
        };

        ReplicationStatistics {
            run_id: self.run_id,
            started_at: self.started_at,
            fork_position: self.fork.position(),
            dna_length: self.fork.dna_length(),
            completion_percentage: self.fork.completion_percentage(),
            leading_progress: self.leading_progress,
            lagging_progress: self.lagging.synthesized(),
            fragment_count: fragments.len(),
            completed_fragments: self.lagging.completed_count(),
            average_fragment_size,
            event_count: self.event_count,
        }
    }

    /// Historique complet des événements (vide si `detailed_logging` est
    /// désactivé)
    pub fn event_log(&self) -> &[ReplicationEvent] {
        &self.event_log
    }

    /// Fourche de réplication
    pub fn fork(&self) -> &ReplicationFork {
        &self.fork
    }

    /// Gestionnaire du brin retardé
    pub fn lagging(&self) -> &LaggingStrandSynthesis {
        &self.lagging
    }
}
