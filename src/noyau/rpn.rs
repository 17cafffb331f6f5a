// src/noyau/rpn.rs
//
// Shunting-yard : expression infixe -> suite postfixée (RPN)
//
// Règles:
// - Nombre : sortie directe.
// - '(' : empilée (on garde sa position pour l’erreur "jamais fermée").
// - ')' : dépile vers la sortie jusqu’à '(' ; la '(' est jetée.
// - Opérateur : dépile tant que le sommet n’est pas '(' et qu’il doit sortir avant
//   l’entrant (précédence plus forte, ou égale avec sommet associatif à gauche), puis empile.
// - Fin : tout le reste sort ; une '(' restante est une erreur.
//
// NOTE:
// - Pas d’opérateur unaire : "-3" donne "3 -", l’évaluation refusera faute d’opérandes.

use tracing::{debug, trace};

use super::erreur::Erreur;
use super::jetons::{format_jetons, tokenize, Jeton, Lexeme, LexemePos};
use super::operateur::Operateur;

/// Élément de la pile d’opérateurs (les parenthèses ne vivent qu’ici).
#[derive(Clone, Copy, Debug)]
enum EnAttente {
    ParOuvrante { position: usize },
    Op(Operateur),
}

/// Convertit une expression infixe en suite postfixée.
///
/// Exemple:
///   "3 + 4 * (2 - 1)"  ->  [3, 4, 2, 1, -, *, +]
pub fn convert(expression: &str) -> Result<Vec<Jeton>, Erreur> {
    let lexemes = tokenize(expression)?;
    let out = to_rpn(&lexemes)?;
    debug!(expression, rpn = %format_jetons(&out), "conversion postfixée");
    Ok(out)
}

/// Shunting-yard sur une suite de lexèmes déjà découpée.
pub fn to_rpn(lexemes: &[LexemePos]) -> Result<Vec<Jeton>, Erreur> {
    let mut out: Vec<Jeton> = Vec::with_capacity(lexemes.len());
    let mut ops: Vec<EnAttente> = Vec::new();

    for lp in lexemes {
        match &lp.lexeme {
            Lexeme::Nombre(n) => out.push(Jeton::Nombre(n.clone())),

            Lexeme::ParOuvrante => ops.push(EnAttente::ParOuvrante {
                position: lp.position,
            }),

            Lexeme::ParFermante => {
                // dépile jusqu’à '(' ; pile épuisée => ')' orpheline
                loop {
                    match ops.pop() {
                        Some(EnAttente::ParOuvrante { .. }) => break,
                        Some(EnAttente::Op(op)) => out.push(Jeton::Op(op)),
                        None => {
                            return Err(Erreur::UnbalancedParens {
                                position: lp.position,
                            })
                        }
                    }
                }
            }

            Lexeme::Op(entrant) => {
                while let Some(EnAttente::Op(top)) = ops.last().copied() {
                    if !top.sort_avant(*entrant) {
                        break;
                    }
                    trace!(sort = %top, entrant = %entrant, "dépile");
                    ops.pop();
                    out.push(Jeton::Op(top));
                }
                ops.push(EnAttente::Op(*entrant));
            }
        }
    }

    // vide la pile ops
    while let Some(attente) = ops.pop() {
        match attente {
            EnAttente::Op(op) => out.push(Jeton::Op(op)),
            EnAttente::ParOuvrante { position } => {
                return Err(Erreur::UnbalancedParens { position });
            }
        }
    }

    Ok(out)
}
