//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> limite (≤ 30 nombres) -> parse -> AST -> calcul (registre) -> f64
//!
//! Remarque : la limite est vérifiée sur les jetons, avant tout parse,
//! pour que le refus reste bon marché même sur une entrée malformée.

use tracing::debug;

use super::calcul;
use super::erreur::Resultat;
use super::expr::Expr;
use super::format::format_resultat;
use super::jetons::{format_tokens, tokenize, Jeton};
use super::limite;
use super::registre::Registre;
use super::syntaxe::parse;

/// Étapes du pipeline, pour un panneau "démarche".
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub arbre: String,
    pub resultat: String,
}

/// API publique : évalue une expression avec le registre standard.
pub fn evaluate(texte: &str) -> Resultat<f64> {
    let (_jetons, _ast, v) = pipeline(texte, Registre::standard())?;
    Ok(v)
}

/// Comme `evaluate`, avec la démarche (jetons, arbre parenthésé, résultat affiché).
pub fn evaluate_detaille(texte: &str) -> Resultat<(f64, Demarche)> {
    let (jetons, ast, v) = pipeline(texte, Registre::standard())?;

    let d = Demarche {
        jetons: format_tokens(&jetons),
        arbre: ast.to_string(),
        resultat: format_resultat(v),
    };
    Ok((v, d))
}

fn pipeline(texte: &str, registre: &Registre) -> Resultat<(Vec<Jeton>, Expr, f64)> {
    // 1) Jetons
    let jetons = tokenize(texte)?;

    // 2) Limite (avant parse)
    let litteraux = limite::verifier(&jetons)?;
    debug!(jetons = jetons.len(), litteraux, "jetons acceptés");

    // 3) AST
    let ast = parse(&jetons)?;

    // 4) Calcul
    let v = calcul::evaluate(&ast, registre)?;
    debug!(resultat = v, "évaluation terminée");

    Ok((jetons, ast, v))
}
