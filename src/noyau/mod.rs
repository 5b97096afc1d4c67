//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - saisie.rs       : assemblage du texte + état de l’exposant (EE)
//! - scientifique.rs : touches scientifiques + modes (2nd, Rad)
//! - memoire.rs      : registre mc / mr / m+ / m-
//! - touches.rs      : libellés -> touches, claviers
//! - session.rs      : état complet d’un écran + "="
//! - eval.rs         : contrat Evaluateur + réécriture du texte affiché
//! - jetons.rs       : tokenisation
//! - rpn.rs          : shunting-yard + évaluation f64
//! - format.rs       : affichage des résultats

pub mod eval;
pub mod format;
pub mod jetons;
pub mod memoire;
pub mod rpn;
pub mod saisie;
pub mod scientifique;
pub mod session;
pub mod touches;

#[cfg(test)]
mod tests_session;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use scientifique::ModeAngle;
pub use session::Session;
pub use touches::{poids, CLAVIER_BASIQUE, CLAVIER_SCIENTIFIQUE};
