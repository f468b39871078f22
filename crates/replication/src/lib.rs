//! Helix Replication
//!
//! Simulation de la réplication de l'ADN: fourche, enzymes, fragments
//! d'Okazaki et synthèse asymétrique des deux brins. Le réplisome orchestre
//! chaque pas et produit un journal ordonné d'événements moléculaires.

pub mod enzyme;
pub mod event;
pub mod fork;
pub mod fragment;
pub mod lagging;
pub mod organism;
pub mod primer;
pub mod replisome;

// Réexportations principales
pub use enzyme::{Enzyme, EnzymeKind, PolymeraseVariant};
pub use event::{EventType, ReplicationEvent, Strand};
pub use fork::ReplicationFork;
pub use fragment::{FragmentId, OkazakiFragment};
pub use lagging::{LaggingStrandSynthesis, SynthesisTuning};
pub use organism::{OrganismKind, OrganismProfile, PRIMER_LENGTH_MAX, PRIMER_LENGTH_MIN};
pub use primer::RnaPrimer;
pub use replisome::{
    EnzymeSnapshot, ReplicationStatistics, Replisome, ReplisomeState, SimulationConfig,
};
