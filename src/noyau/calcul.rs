// src/noyau/calcul.rs
//
// Évaluation f64 de l’AST (parcours ascendant).
// - ordre fixe : gauche puis droite, arguments de gauche à droite
// - identifiants résolus ici contre le registre (jamais au parse)
// - aucune coercition, aucun effet de bord

use num_traits::{Float, Zero};
use tracing::trace;

use super::erreur::{Erreur, Resultat};
use super::expr::Expr;
use super::jetons::Op;
use super::registre::{Entree, Registre};

/// Évalue un arbre. Le résultat final non fini (NaN / ±inf) devient `UndefinedResult`.
pub fn evaluate(expr: &Expr, registre: &Registre) -> Resultat<f64> {
    let v = evalue(expr, registre)?;
    fini(v)
}

fn fini(v: f64) -> Resultat<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(Erreur::UndefinedResult)
    }
}

fn evalue(expr: &Expr, registre: &Registre) -> Resultat<f64> {
    match expr {
        Expr::Lit(v) => Ok(*v),

        Expr::Const { nom, pos } => match registre.get(nom) {
            Some(Entree::Const(v)) => Ok(*v),
            // fonction nue (ex: "sin") ou absent
            _ => Err(Erreur::inconnu(nom.as_str(), *pos)),
        },

        Expr::Neg(x) => Ok(-evalue(x, registre)?),

        Expr::Bin { op, gauche, droite } => {
            let a = evalue(gauche, registre)?;
            let b = evalue(droite, registre)?;
            binaire(*op, a, b)
        }

        Expr::Appel { nom, args, pos } => {
            let mut valeurs = Vec::with_capacity(args.len());
            for a in args {
                valeurs.push(evalue(a, registre)?);
            }
            appel(registre, nom, *pos, &valeurs)
        }
    }
}

fn binaire(op: Op, a: f64, b: f64) -> Resultat<f64> {
    match op {
        Op::Plus => Ok(a + b),
        Op::Minus => Ok(a - b),
        Op::Star => Ok(a * b),
        Op::Slash => {
            // zéro exact (et -0.0), pas de tolérance
            if b.is_zero() {
                return Err(Erreur::DivisionByZero);
            }
            Ok(a / b)
        }
        // puissance réelle : (-8)^(1/3), 0^-1, 10^400 => indéfini
        Op::Caret => fini(Float::powf(a, b)),
    }
}

fn appel(registre: &Registre, nom: &str, pos: usize, args: &[f64]) -> Resultat<f64> {
    let (min, max, op) = match registre.get(nom) {
        Some(Entree::Fonction { min, max, op }) => (*min, *max, *op),
        // constante appelée (ex: "pi(1)") ou absent
        _ => return Err(Erreur::inconnu(nom, pos)),
    };

    if args.len() < min || args.len() > max {
        return Err(Erreur::ArityMismatch {
            nom: nom.to_string(),
            min,
            max,
            recu: args.len(),
        });
    }

    trace!(fonction = nom, args = args.len(), "appel registre");
    op(args).map_err(|raison| Erreur::DomainError {
        fonction: nom.to_string(),
        raison,
    })
}
