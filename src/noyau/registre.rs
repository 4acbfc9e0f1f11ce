//! src/noyau/registre.rs
//!
//! Registre fermé des constantes et fonctions.
//!
//! Contrats :
//! - Lecture seule : aucune inscription après construction.
//! - Énumérable (ordre alphabétique, déterministe).
//! - Partageable entre threads (`Send + Sync`) : seulement des `f64` et des `fn`.

use std::collections::BTreeMap;

use num_traits::Zero;
use once_cell::sync::Lazy;

use super::erreur::Domaine;

/// Borne haute des fonctions variadiques (sum, prod, avg).
pub const MAX_ARGS_VARIADIQUES: usize = 30;

/// Opération d’une fonction : arguments ordonnés -> nombre, ou échec de domaine.
pub type Operation = fn(&[f64]) -> Result<f64, Domaine>;

#[derive(Clone, Copy, Debug)]
pub enum Entree {
    Const(f64),
    Fonction {
        min: usize,
        max: usize,
        op: Operation,
    },
}

impl Entree {
    fn unaire(op: Operation) -> Self {
        Entree::Fonction { min: 1, max: 1, op }
    }

    fn variadique(op: Operation) -> Self {
        Entree::Fonction {
            min: 1,
            max: MAX_ARGS_VARIADIQUES,
            op,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Registre {
    entrees: BTreeMap<&'static str, Entree>,
}

static STANDARD: Lazy<Registre> = Lazy::new(Registre::construire);

impl Registre {
    /// Registre de la calculatrice, construit une fois par processus.
    pub fn standard() -> &'static Registre {
        &STANDARD
    }

    fn construire() -> Self {
        let mut entrees = BTreeMap::new();

        // Constantes
        entrees.insert("pi", Entree::Const(std::f64::consts::PI));
        entrees.insert("e", Entree::Const(std::f64::consts::E));

        // Unaires (arguments en radians pour la trigo)
        entrees.insert("sin", Entree::unaire(|a| Ok(a[0].sin())));
        entrees.insert("cos", Entree::unaire(|a| Ok(a[0].cos())));
        entrees.insert("tan", Entree::unaire(|a| Ok(a[0].tan())));
        entrees.insert("sqrt", Entree::unaire(racine));
        entrees.insert("log", Entree::unaire(ln));
        entrees.insert("abs", Entree::unaire(|a| Ok(a[0].abs())));
        entrees.insert("round", Entree::unaire(|a| Ok(a[0].round_ties_even())));

        // Variadiques 1..=30
        entrees.insert("sum", Entree::variadique(|a| Ok(a.iter().sum())));
        entrees.insert("prod", Entree::variadique(|a| Ok(a.iter().product())));
        entrees.insert("avg", Entree::variadique(moyenne));

        Self { entrees }
    }

    pub fn get(&self, nom: &str) -> Option<&Entree> {
        self.entrees.get(nom)
    }

    /// Noms connus, ordre alphabétique.
    pub fn noms(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entrees.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }
}

fn racine(a: &[f64]) -> Result<f64, Domaine> {
    let x = a[0];
    if x < 0.0 {
        return Err(Domaine::RacineNegative);
    }
    Ok(x.sqrt())
}

/// Logarithme naturel (le bouton "ln" de l’interface insère `log(`).
fn ln(a: &[f64]) -> Result<f64, Domaine> {
    let x = a[0];
    if x <= 0.0 {
        return Err(Domaine::LogNonPositif);
    }
    Ok(x.ln())
}

/// Moyenne ; 0 pour la liste vide (inaccessible via l’évaluateur, min = 1).
fn moyenne(a: &[f64]) -> Result<f64, Domaine> {
    if a.is_empty() {
        return Ok(f64::zero());
    }
    let somme: f64 = a.iter().sum();
    Ok(somme / a.len() as f64)
}
