//! Tests scientifiques (campagne) : propriétés + robustesse + limites contrôlées.
//!
//! But : vérifier les propriétés attendues sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (profondeur, longueur)
//!
//! Notes importantes (aligné avec l’état actuel du noyau) :
//! - `^` est associatif à gauche : 2^3^2 = (2^3)^2.
//! - `+` et `*` ne sortent pas de la pile sur égalité de précédence : "a * b / c" se lit
//!   a * (b / c). Sans division, la valeur est celle de la lecture usuelle ; avec la division
//!   entière, elle peut différer (testé explicitement plus bas).

use std::time::{Duration, Instant};

use num_bigint::BigInt;

use super::erreur::Erreur;
use super::eval::eval_expression;

fn eval_ok(expr: &str) -> BigInt {
    eval_expression(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
        .0
}

fn assert_val(expr: &str, attendu: i64) {
    assert_eq!(eval_ok(expr), BigInt::from(attendu), "expr={expr:?}");
}

fn assert_err(expr: &str, attendue: &str) {
    match eval_expression(expr) {
        Ok((r, _)) => panic!("expr={expr:?} : attendu {attendue}, obtenu {r}"),
        Err(e) => assert_eq!(e.nom(), attendue, "expr={expr:?} err={e}"),
    }
}

/// Budget global anti-gel (scientifique + safe).
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Propriétés de référence ------------------------ */

#[test]
fn sci_gauche_a_droite() {
    assert_val("8 - 3 - 2", 3);
    assert_val("100 - 10 - 1", 89);
    assert_val("64 / 4 / 2", 8);
}

#[test]
fn sci_precedence() {
    assert_val("3 + 4 * 2", 11);
    assert_val("(3 + 4) * 2", 14);
    assert_val("2 * 3 ^ 2", 18);
    assert_val("1 + 2 ^ 3 * 2", 17);
}

#[test]
fn sci_puissance_associative_a_gauche() {
    assert_val("2 ^ 3 ^ 2", 64);
    assert_val("2 ^ (3 ^ 2)", 512);
}

#[test]
fn sci_division_entiere() {
    assert_val("7 / 2", 3);
    assert_err("5 / 0", "DivisionByZero");
}

#[test]
fn sci_fois_puis_division_groupe_a_droite() {
    // 2 * 6 / 4 => 2 * (6/4) = 2 (la lecture usuelle donnerait 3)
    assert_val("2 * 6 / 4", 2);
    assert_val("(2 * 6) / 4", 3);
    // - et / sortent sur égalité : lecture usuelle
    assert_val("12 / 4 * 3", 9);
}

#[test]
fn sci_parentheses_non_equilibrees() {
    assert_err("(1 + 2", "UnbalancedParens");
    assert_err("1 + 2)", "UnbalancedParens");
    assert_err("((1 + 2)", "UnbalancedParens");
    assert_err(")", "UnbalancedParens");
}

#[test]
fn sci_operandes_insuffisantes() {
    assert_err("+ 1", "InsufficientOperands");
    assert_err("1 +", "InsufficientOperands");
    assert_err("1 + * 2", "InsufficientOperands");
    assert_err("1 2 + 3", "MalformedExpression");
}

#[test]
fn sci_symboles_et_nombres() {
    assert_err("3 !", "UnknownSymbol");
    assert_err("3 % 2", "UnknownSymbol");
    assert_err("2.5 + 1", "MalformedNumber");
    assert_err("", "EmptyExpression");
}

#[test]
fn sci_exemple_du_programme_d_origine() {
    assert_val("3 + 4 * (2 - 1)", 7);
}

/* ------------------------ Sans division : lecture usuelle ------------------------ */

/// Lecture usuelle (gauche à droite, * avant + -) d’une suite plate "n op n op n ...".
fn lecture_usuelle(nombres: &[i64], ops: &[char]) -> BigInt {
    let mut termes: Vec<(char, BigInt)> = vec![('+', BigInt::from(nombres[0]))];
    for (op, n) in ops.iter().zip(&nombres[1..]) {
        let n = BigInt::from(*n);
        if *op == '*' {
            if let Some(dernier) = termes.last_mut() {
                dernier.1 = &dernier.1 * &n;
            }
        } else {
            termes.push((*op, n));
        }
    }
    termes
        .into_iter()
        .fold(BigInt::from(0), |acc, (signe, t)| match signe {
            '-' => acc - t,
            _ => acc + t,
        })
}

#[test]
fn sci_suites_plates_sans_division() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // petite suite pseudo-aléatoire (déterministe)
    let mut etat: u64 = 0xFACE;
    let mut suivant = |n: u64| {
        etat = etat.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (etat >> 33) % n
    };

    for _ in 0..200 {
        budget(t0, max);

        let longueur = 1 + suivant(8) as usize;
        let nombres: Vec<i64> = (0..longueur).map(|_| suivant(50) as i64).collect();
        let ops: Vec<char> = (1..longueur)
            .map(|_| ['+', '-', '*'][suivant(3) as usize])
            .collect();

        let mut expr = nombres[0].to_string();
        for (op, n) in ops.iter().zip(&nombres[1..]) {
            expr.push_str(&format!(" {op} {n}"));
        }

        assert_eq!(eval_ok(&expr), lecture_usuelle(&nombres, &ops), "expr={expr:?}");
    }
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let expr = vec!["1"; 5000].join(" + ");
    budget(t0, max);

    assert_val(&expr, 5000);
    budget(t0, max);
}

#[test]
fn sci_stress_longue_soustraction() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // gauche => pile d’opérateurs toujours courte
    let expr = format!("10000{}", " - 1".repeat(4000));
    assert_val(&expr, 6000);
    budget(t0, max);
}

#[test]
fn sci_stress_imbrication_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // pas de récursion dans convert/evaluate : la profondeur ne menace pas la pile d’appels
    let n = 5_000;
    let expr = format!("{}1{}", "(".repeat(n), " + 1)".repeat(n));
    assert_val(&expr, (n + 1) as i64);
    budget(t0, max);

    let ouvert = format!("{}1", "(".repeat(n));
    assert!(matches!(
        eval_expression(&ouvert),
        Err(Erreur::UnbalancedParens { position }) if position == n - 1
    ));
}

#[test]
fn sci_stress_bigint_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // gros opérandes contrôlés (100 chiffres) : pas de plafond, pas de débordement
    let big = "9".repeat(100);
    let r = eval_ok(&format!("{big} * {big} - {big} * {big}"));
    assert_eq!(r, BigInt::from(0));

    let r = eval_ok(&format!("{big} / {big}"));
    assert_eq!(r, BigInt::from(1));
    budget(t0, max);

    // puissance bornée : refusée avant de calculer
    assert_err(&format!("{big} ^ {big}"), "ExponentTooLarge");
    assert_err("3 ^ 4000000", "ExponentTooLarge");
    budget(t0, max);
}
