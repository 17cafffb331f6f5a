//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> pile de valeurs -> entier
//!
//! Remarque : l’ordre des opérandes suit l’ordre d’empilement :
//! la valeur empilée en premier est l’opérande gauche.

use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};
use tracing::{debug, trace};

use super::erreur::Erreur;
use super::jetons::{format_jetons, format_lexemes, tokenize, Jeton};
use super::operateur::Operateur;
use super::rpn::to_rpn;

/// Garde-fou : taille maximale (en bits) d’un résultat de puissance.
pub const MAX_BITS_PUISSANCE: u64 = 1 << 20;

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

/// Réduit une suite postfixée à un entier unique.
pub fn evaluate(jetons: &[Jeton]) -> Result<BigInt, Erreur> {
    let mut pile: Vec<BigInt> = Vec::with_capacity(jetons.len() / 2 + 1);

    for jeton in jetons {
        match jeton {
            Jeton::Nombre(v) => pile.push(v.clone()),
            Jeton::Op(op) => {
                let operandes_manquantes = || Erreur::InsufficientOperands {
                    operateur: op.symbole(),
                };
                let rhs = pile.pop().ok_or_else(operandes_manquantes)?;
                let lhs = pile.pop().ok_or_else(operandes_manquantes)?;
                let r = apply(*op, &lhs, &rhs)?;
                trace!(%lhs, op = %op, %rhs, resultat = %r, "applique");
                pile.push(r);
            }
        }
    }

    match pile.len() {
        0 => Err(Erreur::EmptyExpression),
        1 => pile.pop().ok_or(Erreur::EmptyExpression),
        restantes => Err(Erreur::MalformedExpression { restantes }),
    }
}

/// `lhs op rhs` sur des entiers exacts.
pub fn apply(op: Operateur, lhs: &BigInt, rhs: &BigInt) -> Result<BigInt, Erreur> {
    match op {
        Operateur::Plus => Ok(lhs + rhs),
        Operateur::Moins => Ok(lhs - rhs),
        Operateur::Fois => Ok(lhs * rhs),
        Operateur::Divise => {
            if rhs.is_zero() {
                return Err(Erreur::DivisionByZero);
            }
            // BigInt : division tronquée vers zéro
            Ok(lhs / rhs)
        }
        Operateur::Puissance => puissance(lhs, rhs),
    }
}

/// Puissance entière bornée.
/// - exposant négatif => InvalidExponent
/// - base dans {-1, 0, 1} => calcul direct, quel que soit l’exposant
/// - sinon exposant u32 et résultat estimé <= MAX_BITS_PUISSANCE
fn puissance(base: &BigInt, exposant: &BigInt) -> Result<BigInt, Erreur> {
    if exposant.is_negative() {
        return Err(Erreur::InvalidExponent {
            exposant: exposant.to_string(),
        });
    }

    if base.is_zero() {
        return Ok(if exposant.is_zero() {
            BigInt::one()
        } else {
            BigInt::zero()
        });
    }
    if base.is_one() {
        return Ok(BigInt::one());
    }
    if base.abs().is_one() {
        // base == -1
        let pair = (exposant % 2u32).is_zero();
        return Ok(if pair { BigInt::one() } else { -BigInt::one() });
    }

    let trop_grand = || Erreur::ExponentTooLarge {
        exposant: exposant.to_string(),
    };
    let e = exposant.to_u32().ok_or_else(trop_grand)?;
    let bits_estimes = base.bits().saturating_mul(u64::from(e));
    if bits_estimes > MAX_BITS_PUISSANCE {
        return Err(trop_grand());
    }

    Ok(num_traits::pow::pow(base.clone(), e as usize))
}

/// API publique : évalue une expression et retourne:
/// - le résultat entier
/// - la démarche (lexèmes, RPN)
pub fn eval_expression(expr_str: &str) -> Result<(BigInt, DemarcheNoyau), Erreur> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(Erreur::EmptyExpression);
    }

    // 1) Lexèmes
    let lexemes = tokenize(s)?;
    let jetons_txt = format_lexemes(&lexemes);

    // 2) RPN
    let rpn = to_rpn(&lexemes)?;
    let rpn_txt = format_jetons(&rpn);

    // 3) Pile de valeurs
    let resultat = evaluate(&rpn)?;
    debug!(expression = s, rpn = %rpn_txt, %resultat, "évaluation");

    let d = DemarcheNoyau {
        jetons: jetons_txt,
        rpn: rpn_txt,
    };

    Ok((resultat, d))
}
