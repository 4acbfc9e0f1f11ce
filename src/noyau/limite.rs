// src/noyau/limite.rs
//
// Garde-fou avant parse : nombre de littéraux numériques borné.
// Appliqué sur le flux de jetons, jamais après une évaluation partielle.

use tracing::debug;

use super::erreur::{Erreur, Resultat};
use super::jetons::{Jeton, Tok};

/// Nombre maximal de littéraux numériques dans une expression.
pub const MAX_LITTERAUX: usize = 30;

pub fn count_literals(jetons: &[Jeton]) -> usize {
    jetons
        .iter()
        .filter(|j| matches!(j.tok, Tok::Num { .. }))
        .count()
}

/// Refuse le flux si plus de `MAX_LITTERAUX` nombres.
pub fn verifier(jetons: &[Jeton]) -> Resultat<usize> {
    let compte = count_literals(jetons);
    if compte > MAX_LITTERAUX {
        debug!(compte, max = MAX_LITTERAUX, "expression refusée: trop de nombres");
        return Err(Erreur::TooManyLiterals {
            compte,
            max: MAX_LITTERAUX,
        });
    }
    Ok(compte)
}
