// src/noyau/operateur.rs
//
// Table des opérateurs binaires : symbole, précédence, associativité.
// Données constantes (aucun état, aucun cycle de vie).

use std::fmt;

/// Associativité utilisée pour départager deux opérateurs de même précédence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

/// Opérateur binaire reconnu par le noyau.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance, // ^
}

impl Operateur {
    /// Tous les opérateurs, dans l’ordre de la table.
    pub const TOUS: [Operateur; 5] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
        Operateur::Puissance,
    ];

    /// Lecture d’un symbole d’un caractère. `None` si ce n’est pas un opérateur.
    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            '^' => Some(Operateur::Puissance),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Puissance => '^',
        }
    }

    /// Force de liaison : `+ -` = 0 ; `* /` = 1 ; `^` = 2.
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 0,
            Operateur::Fois | Operateur::Divise => 1,
            Operateur::Puissance => 2,
        }
    }

    /// `- / ^` sont associatifs à gauche ; `+ *` ne le sont pas.
    ///
    /// NOTE: `^` à gauche est voulu : `2 ^ 3 ^ 2` vaut `(2^3)^2 = 64`.
    pub fn associativite(self) -> Associativite {
        match self {
            Operateur::Moins | Operateur::Divise | Operateur::Puissance => Associativite::Gauche,
            Operateur::Plus | Operateur::Fois => Associativite::Droite,
        }
    }

    /// Vrai si `self`, au sommet de la pile, doit sortir avant d’empiler `entrant`.
    ///
    /// - précédence strictement plus forte, ou
    /// - précédence égale ET `self` associatif à gauche.
    pub fn sort_avant(self, entrant: Operateur) -> bool {
        let p_top = self.precedence();
        let p_tok = entrant.precedence();
        p_top > p_tok || (p_top == p_tok && self.associativite() == Associativite::Gauche)
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}
