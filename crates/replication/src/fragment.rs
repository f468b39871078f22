//! Fragments d'Okazaki

use crate::primer::RnaPrimer;
use helix_core::{ReplicationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifiant de fragment, unique au sein d'une simulation
///
/// Compteur monotone plutôt qu'UUID: un seed fixe doit reproduire la séquence
/// d'événements à l'identique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FragmentId(u64);

impl FragmentId {
    /// Crée un identifiant depuis sa valeur brute
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Valeur brute
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FragmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "okazaki-{}", self.0)
    }
}

/// Fragment du brin retardé
///
/// Cycle de vie strict: initié → en extension → fin atteinte → amorce excisée
/// → ligaturé. Les deux drapeaux sont monotones (faux → vrai, jamais
/// l'inverse); violer l'ordre est une erreur de programmation et panique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkazakiFragment {
    /// Identifiant unique
    pub id: FragmentId,

    /// Position de départ (nt)
    pub start: usize,

    /// Position de fin (nt), strictement supérieure au départ
    pub end: usize,

    primer: RnaPrimer,
    primer_removed: bool,
    ligated: bool,
}

impl OkazakiFragment {
    /// Crée un fragment validé
    pub fn new(id: FragmentId, start: usize, end: usize, primer: RnaPrimer) -> Result<Self> {
        if end <= start {
            return Err(ReplicationError::InvalidFragmentBounds { start, end });
        }

        Ok(Self {
            id,
            start,
            end,
            primer,
            primer_removed: false,
            ligated: false,
        })
    }

    /// Longueur du fragment (nt)
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Toujours faux: la construction impose end > start
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Amorce ARN du fragment
    pub fn primer(&self) -> &RnaPrimer {
        &self.primer
    }

    /// L'amorce a-t-elle été excisée
    pub fn primer_removed(&self) -> bool {
        self.primer_removed
    }

    /// Le fragment a-t-il été ligaturé
    pub fn ligated(&self) -> bool {
        self.ligated
    }

    /// Un fragment est complet ssi il est ligaturé
    pub fn is_complete(&self) -> bool {
        self.ligated
    }

    /// Excise l'amorce (étape 4 du cycle de vie)
    pub fn remove_primer(&mut self) {
        assert!(
            !self.primer_removed,
            "double excision d'amorce sur {}",
            self.id
        );
        self.primer.mark_removed();
        self.primer_removed = true;
    }

    /// Ligature le fragment au précédent (étape terminale)
    ///
    /// Exige l'excision préalable de l'amorce: ligated ⇒ primer_removed.
    pub fn ligate(&mut self) {
        assert!(
            self.primer_removed,
            "ligature de {} avant excision de l'amorce",
            self.id
        );
        assert!(!self.ligated, "double ligature de {}", self.id);
        self.ligated = true;
    }
}
