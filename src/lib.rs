//! Calculatrice — noyau d’expressions
//!
//! Texte -> jetons -> garde-fou (≤ 30 nombres) -> AST -> évaluation f64,
//! contre un registre fermé (`pi`, `e`, `sin`, `cos`, `tan`, `sqrt`, `log`,
//! `abs`, `round`, `sum`, `prod`, `avg`). Aucun interpréteur général.
//!
//! ```
//! use calculatrice_noyau::{evaluate, Erreur};
//!
//! assert_eq!(evaluate("2+3*4"), Ok(14.0));
//! assert_eq!(evaluate("-2^2"), Ok(-4.0));
//! assert_eq!(evaluate("5/0"), Err(Erreur::DivisionByZero));
//! ```
//!
//! L’historique et l’état des boutons sont dans `app` (sans fenêtre).

pub mod app;
pub mod noyau;

pub use noyau::{
    evaluate, evaluate_detaille, Demarche, Domaine, EntreeHistorique, Erreur, Historique,
    LexErreur, Registre, Resultat,
};
