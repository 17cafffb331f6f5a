//! Noyau entier (infixe -> postfixe -> entier)
//!
//! Organisation interne :
//! - operateur.rs : table précédence / associativité
//! - jetons.rs    : lexèmes + jetons postfixés
//! - rpn.rs       : shunting-yard (convert)
//! - eval.rs      : pile de valeurs (evaluate) + pipeline complet
//! - erreur.rs    : erreurs rendues à l’appelant

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod operateur;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::Erreur;
pub use eval::{eval_expression, evaluate, DemarcheNoyau};
pub use jetons::{format_jetons, tokenize, Jeton};
pub use operateur::Operateur;
pub use rpn::convert;
