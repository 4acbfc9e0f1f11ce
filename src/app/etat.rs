//! src/app/etat.rs
//!
//! État de la calculatrice, sans vue.
//!
//! Rôle : contenir l’entrée, le dernier résultat, l’erreur et l’historique,
//! et offrir les actions des boutons (=, C, DEL, réutiliser, effacer l’historique).
//!
//! Contrats :
//! - Pas de parsing ici : tout calcul passe par `noyau::evaluate`.
//! - L’historique ne reçoit que des calculs réussis.
//! - Réutiliser une entrée recopie son EXPRESSION (pas son résultat) pour édition.

use tracing::debug;

use crate::noyau::format::format_resultat;
use crate::noyau::historique::{EntreeHistorique, Historique};
use crate::noyau::{evaluate, Erreur};

#[derive(Clone, Debug, Default)]
pub struct EtatCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // dernier résultat affiché
    pub erreur: String,   // message d’erreur (si le calcul échoue)

    historique: Historique,
}

impl EtatCalc {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Actions "boutons" ------------------------ */

    /// "=" : évalue l’entrée.
    ///
    /// - entrée vide (après trim) : rien ne se passe
    /// - succès : l’entrée devient le résultat, (expression, résultat) va à l’historique
    /// - échec  : l’entrée est conservée, le message d’erreur est posé
    pub fn calculer(&mut self) -> Option<Result<f64, Erreur>> {
        let expression = self.entree.trim().to_string();
        if expression.is_empty() {
            return None;
        }

        let r = evaluate(&expression);
        match &r {
            Ok(v) => {
                let texte = format_resultat(*v);
                self.historique.record(expression, texte.clone());
                self.entree = texte.clone();
                self.resultat = texte;
                self.erreur.clear();
            }
            Err(e) => {
                debug!(erreur = %e, "calcul refusé");
                self.erreur = e.to_string();
            }
        }
        Some(r)
    }

    /// C : efface l’entrée.
    pub fn effacer_entree(&mut self) {
        self.entree.clear();
    }

    /// DEL : retire le dernier caractère de l’entrée.
    pub fn effacer_dernier(&mut self) {
        self.entree.pop();
    }

    /// Recopie l’expression d’une entrée d’historique dans l’entrée.
    /// Renvoie false si l’index n’existe pas (l’entrée reste intacte).
    pub fn reutiliser(&mut self, index: usize) -> bool {
        match self.historique.get(index) {
            Some(h) => {
                self.entree = h.expression().to_string();
                self.erreur.clear();
                true
            }
            None => false,
        }
    }

    pub fn effacer_historique(&mut self) {
        self.historique.clear_all();
    }

    pub fn historique(&self) -> &[EntreeHistorique] {
        self.historique.list()
    }
}
