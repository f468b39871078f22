//! Helix Core Library
//!
//! Types partagés pour la simulation de réplication: erreurs, alphabets
//! nucléiques et logging.

pub mod error;
pub mod logging;
pub mod sequence;

// Réexportations principales
pub use error::{ReplicationError, Result};
pub use logging::init_logging;
pub use sequence::{random_rna, validate_dna, validate_rna, DnaBase, RnaBase};
