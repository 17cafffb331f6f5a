//! Erreurs du noyau.
//!
//! Toutes les erreurs sont des valeurs rendues à l’appelant (jamais d’abandon du processus).
//! - conversion : parenthèses, nombre mal formé, symbole inconnu
//! - évaluation : opérandes manquantes, expression vide ou mal formée, erreurs numériques

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Erreur {
    /// `)` sans `(` correspondante, ou `(` jamais fermée.
    #[error("parenthèses non équilibrées (position {position})")]
    UnbalancedParens { position: usize },

    #[error("nombre invalide: '{lexeme}' (position {position})")]
    MalformedNumber { lexeme: String, position: usize },

    #[error("caractère inattendu: '{symbole}' (position {position})")]
    UnknownSymbol { symbole: char, position: usize },

    /// Opérateur rencontré avec moins de deux valeurs disponibles.
    #[error("opérandes insuffisantes pour '{operateur}'")]
    InsufficientOperands { operateur: char },

    #[error("Entrée vide")]
    EmptyExpression,

    /// Il reste des valeurs non consommées à la fin.
    #[error("expression invalide: {restantes} valeurs sans opérateur")]
    MalformedExpression { restantes: usize },

    #[error("division par zéro")]
    DivisionByZero,

    #[error("exposant négatif: {exposant}")]
    InvalidExponent { exposant: String },

    #[error("exposant trop grand: {exposant}")]
    ExponentTooLarge { exposant: String },
}

impl Erreur {
    /// Nom stable du genre d’erreur (affiché par la ligne de commande).
    pub fn nom(&self) -> &'static str {
        match self {
            Erreur::UnbalancedParens { .. } => "UnbalancedParens",
            Erreur::MalformedNumber { .. } => "MalformedNumber",
            Erreur::UnknownSymbol { .. } => "UnknownSymbol",
            Erreur::InsufficientOperands { .. } => "InsufficientOperands",
            Erreur::EmptyExpression => "EmptyExpression",
            Erreur::MalformedExpression { .. } => "MalformedExpression",
            Erreur::DivisionByZero => "DivisionByZero",
            Erreur::InvalidExponent { .. } => "InvalidExponent",
            Erreur::ExponentTooLarge { .. } => "ExponentTooLarge",
        }
    }
}
