//! src/noyau/erreur.rs
//!
//! Erreurs typées du noyau.
//!
//! Contrat : toute entrée produit soit un nombre fini, soit une de ces erreurs.
//! Aucune branche "message générique" : chaque échec du pipeline est énuméré ici.

use thiserror::Error;

use super::jetons::Tok;

/// Sous-type lexical (tokenize).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexErreur {
    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    /// `1.2.3`, `1.` : point sans chiffres derrière ou second point.
    #[error("nombre malformé")]
    NombreMalforme,
}

/// Échecs de domaine levés par une fonction du registre.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Domaine {
    #[error("racine carrée d’un nombre négatif")]
    RacineNegative,

    #[error("logarithme d’un nombre négatif ou nul")]
    LogNonPositif,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum Erreur {
    #[error("{kind} (position {pos})")]
    Lex { kind: LexErreur, pos: usize },

    #[error("{attendu} attendu, trouvé {trouve} (position {pos})")]
    Parse {
        pos: usize,
        trouve: Tok,
        attendu: &'static str,
    },

    #[error("trop de nombres: {compte} (max {max})")]
    TooManyLiterals { compte: usize, max: usize },

    #[error("identifiant inconnu: {nom} (position {pos})")]
    UnknownIdentifier { nom: String, pos: usize },

    #[error("{nom}: {} argument(s) attendu(s), {recu} reçu(s)", plage(.min, .max))]
    ArityMismatch {
        nom: String,
        min: usize,
        max: usize,
        recu: usize,
    },

    #[error("division par zéro")]
    DivisionByZero,

    #[error("{fonction}: {raison}")]
    DomainError { fonction: String, raison: Domaine },

    #[error("résultat indéfini")]
    UndefinedResult,
}

fn plage(min: &usize, max: &usize) -> String {
    if min == max {
        format!("{min}")
    } else {
        format!("{min} à {max}")
    }
}

impl Erreur {
    pub fn lex(kind: LexErreur, pos: usize) -> Self {
        Self::Lex { kind, pos }
    }

    pub fn parse(pos: usize, trouve: Tok, attendu: &'static str) -> Self {
        Self::Parse {
            pos,
            trouve,
            attendu,
        }
    }

    pub fn inconnu(nom: impl Into<String>, pos: usize) -> Self {
        Self::UnknownIdentifier {
            nom: nom.into(),
            pos,
        }
    }

    /// Position (en caractères) à surligner dans l’entrée, si l’erreur en porte une.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Lex { pos, .. } | Self::Parse { pos, .. } | Self::UnknownIdentifier { pos, .. } => {
                Some(*pos)
            }
            _ => None,
        }
    }

    /// Vrai pour les malformations (lexicales / structurelles), faux pour la sémantique.
    pub fn est_syntaxique(&self) -> bool {
        matches!(self, Self::Lex { .. } | Self::Parse { .. })
    }
}

pub type Resultat<T> = std::result::Result<T, Erreur>;
