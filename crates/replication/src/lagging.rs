//! Synthèse discontinue du brin retardé
//!
//! Gère le cycle de vie des fragments d'Okazaki: initiation sur amorce ARN,
//! extension par la polymérase, excision de l'amorce puis ligature une fois
//! la fourche passée.

use crate::enzyme::Enzyme;
use crate::event::{ReplicationEvent, Strand};
use crate::fragment::{FragmentId, OkazakiFragment};
use crate::organism::OrganismProfile;
use crate::primer::RnaPrimer;
use helix_core::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Constantes de réglage de la synthèse retardée
///
/// Valeurs empiriques sans référence biologique établie, d'où leur exposition
/// en configuration plutôt qu'en dur.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SynthesisTuning {
    /// Fraction de la taille du fragment courant en dessous de laquelle un
    /// nouveau fragment est initié (évite les trous et les doublons)
    pub fragment_slack: f64,

    /// Avancée minimale (nt) déclenchant une relecture sur le brin retardé
    pub proofread_threshold: usize,
}

impl Default for SynthesisTuning {
    fn default() -> Self {
        Self {
            fragment_slack: 0.10,
            proofread_threshold: 100,
        }
    }
}

/// Gestionnaire de la synthèse du brin retardé
///
/// Possède ses quatre enzymes et la liste de tous les fragments créés; les
/// fragments ligaturés sont conservés pour les statistiques.
#[derive(Debug)]
pub struct LaggingStrandSynthesis {
    organism: Arc<OrganismProfile>,
    dna_length: usize,
    tuning: SynthesisTuning,

    primase: Enzyme,
    polymerase: Enzyme,
    ligase: Enzyme,
    exonuclease: Enzyme,

    fragments: Vec<OkazakiFragment>,
    /// Index du fragment en cours d'extension
    current: Option<usize>,
    /// Taille tirée au sort pour le fragment courant
    current_size: usize,
    synthesized: usize,
    active: bool,
    next_id: u64,
    rng: ChaCha8Rng,
}

impl LaggingStrandSynthesis {
    /// Crée un gestionnaire inactif
    ///
    /// Les enzymes sont construites par le réplisome (ordre de création
    /// fail-fast) puis confiées ici.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        organism: Arc<OrganismProfile>,
        dna_length: usize,
        primase: Enzyme,
        polymerase: Enzyme,
        ligase: Enzyme,
        exonuclease: Enzyme,
        tuning: SynthesisTuning,
        seed: u64,
    ) -> Self {
        Self {
            organism,
            dna_length,
            tuning,
            primase,
            polymerase,
            ligase,
            exonuclease,
            fragments: Vec::new(),
            current: None,
            current_size: 0,
            synthesized: 0,
            active: false,
            next_id: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Démarre la synthèse retardée au passage de la fourche
    pub fn initiate_synthesis(&mut self, fork_position: usize) -> Result<Vec<ReplicationEvent>> {
        self.active = true;
        tracing::debug!(fork_position, "initiation de la synthèse retardée");
        self.start_fragment(fork_position)
    }

    /// Fait progresser la synthèse d'un pas de `base_pairs` nt
    ///
    /// No-op si le gestionnaire est inactif ou si l'avancée est nulle. Sinon,
    /// dans l'ordre: extension du fragment courant, complétion s'il est
    /// dépassé par la fourche, puis initiation d'un nouveau fragment si la
    /// politique le demande.
    pub fn advance(&mut self, fork_position: usize, base_pairs: usize) -> Result<Vec<ReplicationEvent>> {
        if !self.active || base_pairs == 0 {
            return Ok(Vec::new());
        }

        let mut events = Vec::new();

        // a. Extension du fragment courant
        if let Some(idx) = self.current {
            let id = self.fragments[idx].id;
            events.push(self.polymerase.synthesize(base_pairs, Strand::Lagging).with_fragment(id));
            self.synthesized += base_pairs;

            if base_pairs >= self.tuning.proofread_threshold {
                events.push(self.polymerase.proofread(Strand::Lagging).with_fragment(id));
            }
        }

        // b. Fragment dépassé par la fourche: complétion
        if let Some(idx) = self.current {
            if self.fragments[idx].end <= fork_position {
                events.extend(self.complete_fragment(idx));
                self.current = None;
            }
        }

        // c. Politique d'initiation
        let should_start = match self.current {
            None => true,
            Some(idx) => {
                let end = self.fragments[idx].end;
                let slack = (self.current_size as f64 * self.tuning.fragment_slack) as usize;
                end.saturating_sub(fork_position) <= slack
            }
        };

        if should_start {
            // Un fragment courant presque terminé est complété avant d'être
            // remplacé: aucun fragment ne reste orphelin.
            if let Some(idx) = self.current.take() {
                events.extend(self.complete_fragment(idx));
            }
            events.extend(self.start_fragment(fork_position)?);
        }

        Ok(events)
    }

    /// Initie un fragment à la position de la fourche
    ///
    /// Taille de fragment et longueur d'amorce sont tirées uniformément dans
    /// les plages de l'organisme: c'est la variabilité biologique voulue.
    fn start_fragment(&mut self, fork_position: usize) -> Result<Vec<ReplicationEvent>> {
        // Plus de place en fin de brin
        if fork_position >= self.dna_length {
            return Ok(Vec::new());
        }

        let (fmin, fmax) = self.organism.fragment_size_range;
        let (pmin, pmax) = self.organism.primer_length_range;
        let size = self.rng.gen_range(fmin..=fmax);
        let primer_len = self.rng.gen_range(pmin..=pmax);

        let primer = RnaPrimer::generate_random(primer_len, fork_position, &mut self.rng)?;
        let id = FragmentId::new(self.next_id);
        self.next_id += 1;

        let end = (fork_position + size).min(self.dna_length);
        let fragment = OkazakiFragment::new(id, fork_position, end, primer)?;

        self.primase.move_to(fork_position);
        self.polymerase.move_to(fork_position);
        let event = self
            .primase
            .synthesize_primer(primer_len, Strand::Lagging)?
            .with_fragment(id);

        tracing::debug!(%id, start = fork_position, end, size, "nouveau fragment d'Okazaki");

        self.fragments.push(fragment);
        self.current = Some(self.fragments.len() - 1);
        self.current_size = size;

        Ok(vec![event])
    }

    /// Excise l'amorce puis ligature le fragment `idx`
    fn complete_fragment(&mut self, idx: usize) -> Vec<ReplicationEvent> {
        let (id, start, end, primer_len) = {
            let frag = &self.fragments[idx];
            (frag.id, frag.start, frag.end, frag.primer().len())
        };

        self.exonuclease.move_to(start);
        let removal = self.exonuclease.remove_primer(primer_len, id);
        self.fragments[idx].remove_primer();

        self.ligase.move_to(end);
        let ligation = self.ligase.ligate(id);
        self.fragments[idx].ligate();

        tracing::debug!(%id, start, end, "fragment complété");

        vec![removal, ligation]
    }

    /// La synthèse est-elle démarrée
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Longueur cumulée synthétisée sur le brin retardé (nt)
    pub fn synthesized(&self) -> usize {
        self.synthesized
    }

    /// Tous les fragments créés, ligaturés compris
    pub fn fragments(&self) -> &[OkazakiFragment] {
        &self.fragments
    }

    /// Fragments non encore ligaturés
    pub fn active_fragments(&self) -> Vec<&OkazakiFragment> {
        self.fragments.iter().filter(|f| !f.is_complete()).collect()
    }

    /// Nombre de fragments ligaturés
    pub fn completed_count(&self) -> usize {
        self.fragments.iter().filter(|f| f.is_complete()).count()
    }

    pub(crate) fn primase(&self) -> &Enzyme {
        &self.primase
    }

    pub(crate) fn polymerase(&self) -> &Enzyme {
        &self.polymerase
    }

    pub(crate) fn ligase(&self) -> &Enzyme {
        &self.ligase
    }

    pub(crate) fn exonuclease(&self) -> &Enzyme {
        &self.exonuclease
    }
}
