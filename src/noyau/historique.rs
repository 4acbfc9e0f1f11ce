//! src/noyau/historique.rs
//!
//! Historique des calculs réussis (journal pur, aucun calcul ici).
//!
//! Contrats :
//! - Ajout en fin uniquement, ordre d’arrivée conservé.
//! - Aucune entrée modifiée ni supprimée individuellement : effacement global seulement.
//! - Un seul propriétaire (pas de verrou interne) ; un hôte multi-thread sérialise lui-même.

/// (expression d’origine, résultat affiché). Immuable une fois enregistrée.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    expression: String,
    resultat: String,
}

impl EntreeHistorique {
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn resultat(&self) -> &str {
        &self.resultat
    }
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: Vec<EntreeHistorique>,
}

impl Historique {
    pub fn new() -> Self {
        Self::default()
    }

    /// À appeler seulement après un parse + évaluation réussis.
    pub fn record(&mut self, expression: impl Into<String>, resultat: impl Into<String>) {
        self.entrees.push(EntreeHistorique {
            expression: expression.into(),
            resultat: resultat.into(),
        });
    }

    pub fn clear_all(&mut self) {
        self.entrees.clear();
    }

    /// Entrées dans l’ordre d’insertion.
    pub fn list(&self) -> &[EntreeHistorique] {
        &self.entrees
    }

    pub fn get(&self, index: usize) -> Option<&EntreeHistorique> {
        self.entrees.get(index)
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }
}
