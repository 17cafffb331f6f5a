//! Calculatrice RPN — noyau entier
//!
//! Expression infixe (`+ - * / ^`, parenthèses) -> suite postfixée -> entier exact.
//!
//! ```
//! use calculatrice_rpn::{convert, evaluate, format_jetons};
//!
//! let rpn = convert("3 + 4 * (2 - 1)").unwrap();
//! assert_eq!(format_jetons(&rpn), "3 4 2 1 - * +");
//! assert_eq!(evaluate(&rpn).unwrap().to_string(), "7");
//! ```

pub mod noyau;

pub use noyau::{
    convert, eval_expression, evaluate, format_jetons, tokenize, DemarcheNoyau, Erreur, Jeton,
    Operateur,
};
