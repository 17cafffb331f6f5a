// src/noyau/jetons.rs

use std::fmt;

use num_bigint::BigInt;

use super::erreur::Erreur;
use super::operateur::Operateur;

/// Jeton de la suite postfixée (sortie de `convert`, entrée de `evaluate`).
///
/// Les parenthèses n’y apparaissent jamais : elles sont consommées par la conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    Nombre(BigInt),
    Op(Operateur),
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(n) => write!(f, "{n}"),
            Jeton::Op(op) => write!(f, "{op}"),
        }
    }
}

/// Lexème lu dans la chaîne source (parenthèses comprises).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lexeme {
    Nombre(BigInt),
    ParOuvrante,
    ParFermante,
    Op(Operateur),
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lexeme::Nombre(n) => write!(f, "{n}"),
            Lexeme::ParOuvrante => f.write_str("("),
            Lexeme::ParFermante => f.write_str(")"),
            Lexeme::Op(op) => write!(f, "{op}"),
        }
    }
}

/// Lexème + position (indice de caractère, base 0) pour les messages d’erreur.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexemePos {
    pub lexeme: Lexeme,
    pub position: usize,
}

/// Découpe une chaîne en lexèmes.
/// Supporte:
/// - entiers décimaux non signés (ex: 12, 007)
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - espaces quelconques entre lexèmes (ou aucun)
///
/// Un lexème numérique commence par un chiffre et s’étend sur les caractères
/// alphanumériques, `_` et `.` qui suivent : "3.5" ou "12abc" sont des nombres mal formés,
/// pas deux lexèmes.
pub fn tokenize(s: &str) -> Result<Vec<LexemePos>, Erreur> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let position = i;

        if c.is_ascii_digit() {
            while i < chars.len() && fait_partie_du_nombre(chars[i]) {
                i += 1;
            }
            let texte: String = chars[position..i].iter().collect();
            let n = lire_entier(&texte).ok_or(Erreur::MalformedNumber {
                lexeme: texte,
                position,
            })?;
            out.push(LexemePos {
                lexeme: Lexeme::Nombre(n),
                position,
            });
            continue;
        }

        let lexeme = match c {
            '(' => Lexeme::ParOuvrante,
            ')' => Lexeme::ParFermante,
            _ => match Operateur::depuis_symbole(c) {
                Some(op) => Lexeme::Op(op),
                None => {
                    return Err(Erreur::UnknownSymbol {
                        symbole: c,
                        position,
                    })
                }
            },
        };
        out.push(LexemePos { lexeme, position });
        i += 1;
    }

    Ok(out)
}

fn fait_partie_du_nombre(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Entier décimal strict : uniquement des chiffres ASCII.
fn lire_entier(texte: &str) -> Option<BigInt> {
    if texte.is_empty() || !texte.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigInt::parse_bytes(texte.as_bytes(), 10)
}

/// Format utilitaire (démarche) : suite de jetons en texte, séparés par des espaces.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|j| j.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Même chose pour les lexèmes (entrée normalisée).
pub fn format_lexemes(lexemes: &[LexemePos]) -> String {
    lexemes
        .iter()
        .map(|l| l.lexeme.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
