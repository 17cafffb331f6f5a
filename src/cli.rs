// src/cli.rs
//
// Ligne de commande (natif seulement)
// -----------------------------------
// - calculatrice_rpn "3 + 4 * (2 - 1)"   => 7 (code 0)
// - calculatrice_rpn --rpn "(1+2)*3"     => rpn: 1 2 + 3 *  puis 9
// - calculatrice_rpn --demo              => l’expression d’exemple + son résultat
// - erreur                               => "erreur: <Genre>: <message>" sur stderr (code 1)
// - sans expression                      => fenêtre (voir main.rs)

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use calculatrice_rpn::noyau::{convert, evaluate, format_jetons, Erreur};

/// Expression d’exemple (celle du programme d’origine).
pub const EXPRESSION_DEMO: &str = "3 + 4 * (2 - 1)";

/// Calculatrice RPN - expressions entières infixes (+ - * / ^ et parenthèses)
#[derive(Parser, Debug)]
#[command(name = "calculatrice_rpn")]
#[command(about = "Évalue une expression entière via shunting-yard + RPN", long_about = None)]
pub struct Args {
    /// Affiche aussi la suite postfixée
    #[arg(long)]
    pub rpn: bool,

    /// Affiche l’expression avant le résultat
    #[arg(long)]
    pub echo: bool,

    /// Évalue l’expression d’exemple "3 + 4 * (2 - 1)"
    #[arg(long, conflicts_with = "expression")]
    pub demo: bool,

    /// Expression à évaluer (sans expression : ouvre la fenêtre)
    #[arg(allow_hyphen_values = true)]
    pub expression: Option<String>,
}

impl Args {
    /// Expression à traiter en ligne de commande ; `None` => mode fenêtre.
    pub fn expression_cli(&self) -> Option<&str> {
        if self.demo {
            Some(EXPRESSION_DEMO)
        } else {
            self.expression.as_deref()
        }
    }
}

/// Journalisation : RUST_LOG, défaut "warn", sur stderr.
pub fn init_journal() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Lignes à afficher en cas de succès (sans effet de bord).
pub fn rendu(args: &Args, expression: &str) -> Result<Vec<String>, Erreur> {
    let rpn = convert(expression)?;
    let resultat = evaluate(&rpn)?;

    let mut lignes = Vec::with_capacity(3);
    if args.echo || args.demo {
        lignes.push(expression.to_string());
    }
    if args.rpn {
        lignes.push(format!("rpn: {}", format_jetons(&rpn)));
    }
    lignes.push(resultat.to_string());
    Ok(lignes)
}

pub fn executer(args: &Args, expression: &str) -> ExitCode {
    debug!(expression, "ligne de commande");
    match rendu(args, expression) {
        Ok(lignes) => {
            for l in lignes {
                println!("{l}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("erreur: {}: {e}", e.nom());
            ExitCode::FAILURE
        }
    }
}
