//! Noyau de calcul
//!
//! Organisation interne :
//! - jetons.rs     : tokenisation (positions conservées)
//! - limite.rs     : garde-fou ≤ 30 nombres, avant parse
//! - syntaxe.rs    : descente récursive -> Expr
//! - expr.rs       : AST f64 + affichage parenthésé
//! - registre.rs   : constantes / fonctions (fermé, lecture seule)
//! - calcul.rs     : évaluation de l’AST
//! - format.rs     : texte du résultat
//! - historique.rs : journal des calculs réussis
//! - erreur.rs     : erreurs typées
//! - eval.rs       : pipeline complet

pub mod calcul;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod limite;
pub mod registre;
pub mod syntaxe;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{Domaine, Erreur, LexErreur, Resultat};
pub use eval::{evaluate, evaluate_detaille, Demarche};
pub use historique::{EntreeHistorique, Historique};
pub use registre::{Entree, Registre};
