//! Journal d'événements moléculaires

use crate::enzyme::EnzymeKind;
use crate::fragment::FragmentId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Type d'événement moléculaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Ouverture de la double hélice
    Unwind,
    /// Synthèse d'une amorce ARN
    PrimerSynthesis,
    /// Synthèse d'ADN
    DnaSynthesis,
    /// Jonction de deux fragments
    Ligation,
    /// Relecture et correction d'erreurs
    Proofreading,
    /// Excision d'une amorce ARN
    PrimerRemoval,
}

/// Brin concerné par un événement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strand {
    /// Brin directeur (synthèse continue)
    Leading,
    /// Brin retardé (synthèse discontinue)
    Lagging,
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Leading => write!(f, "leading"),
            Strand::Lagging => write!(f, "lagging"),
        }
    }
}

/// Événement de réplication
///
/// Enregistrement immuable, émis dans l'ordre causal au sein d'un pas de
/// simulation. `base_pairs` est signé: une valeur négative encode un retrait
/// (excision d'amorce).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicationEvent {
    /// Type d'événement
    pub event_type: EventType,

    /// Position sur le brin au moment de l'émission
    pub position: usize,

    /// Enzyme à l'origine de l'événement
    pub enzyme: EnzymeKind,

    /// Brin concerné
    pub strand: Strand,

    /// Fragment d'Okazaki concerné, le cas échéant
    pub fragment_id: Option<FragmentId>,

    /// Paires de bases ajoutées (négatif pour un retrait)
    pub base_pairs: Option<i64>,

    /// Métadonnées libres (ordre déterministe)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl ReplicationEvent {
    /// Crée un événement sans fragment ni métadonnées
    pub fn new(event_type: EventType, position: usize, enzyme: EnzymeKind, strand: Strand) -> Self {
        Self {
            event_type,
            position,
            enzyme,
            strand,
            fragment_id: None,
            base_pairs: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Associe l'événement à un fragment
    pub fn with_fragment(mut self, id: FragmentId) -> Self {
        self.fragment_id = Some(id);
        self
    }

    /// Renseigne les paires de bases ajoutées (ou retirées si négatif)
    pub fn with_base_pairs(mut self, base_pairs: i64) -> Self {
        self.base_pairs = Some(base_pairs);
        self
    }

    /// Ajoute une métadonnée
    pub fn with_metadata(mut self, key: &str, value: impl Into<String>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }
}
