// src/noyau/expr.rs
//
// AST de la calculatrice (f64).
// - Lit   : littéral numérique
// - Const : identifiant nu, résolu à l’évaluation (pas au parse)
// - Neg   : moins unaire
// - Bin   : opérateur binaire
// - Appel : nom(args...), arité vérifiée à l’évaluation
//
// Possession stricte : chaque noeud possède ses enfants (Box / Vec), aucun partage.

use std::fmt;

use super::jetons::Op;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Lit(f64),

    // pos = position de l’identifiant dans l’entrée (pour les erreurs d’évaluation)
    Const {
        nom: String,
        pos: usize,
    },

    Neg(Box<Expr>),

    Bin {
        op: Op,
        gauche: Box<Expr>,
        droite: Box<Expr>,
    },

    Appel {
        nom: String,
        args: Vec<Expr>,
        pos: usize,
    },
}

impl Expr {
    pub fn bin(op: Op, gauche: Expr, droite: Expr) -> Expr {
        Expr::Bin {
            op,
            gauche: Box::new(gauche),
            droite: Box::new(droite),
        }
    }

    pub fn neg(x: Expr) -> Expr {
        Expr::Neg(Box::new(x))
    }

    /// Nombre de noeuds (garde-fous / tests).
    pub fn taille(&self) -> usize {
        match self {
            Expr::Lit(_) | Expr::Const { .. } => 1,
            Expr::Neg(x) => 1 + x.taille(),
            Expr::Bin { gauche, droite, .. } => 1 + gauche.taille() + droite.taille(),
            Expr::Appel { args, .. } => 1 + args.iter().map(Expr::taille).sum::<usize>(),
        }
    }
}

/// Réécriture entièrement parenthésée (panneau "démarche") :
/// `-2^2` s’affiche `(-(2 ^ 2))`, ce qui rend la précédence visible.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Lit(v) => write!(f, "{v}"),
            Expr::Const { nom, .. } => f.write_str(nom),
            Expr::Neg(x) => write!(f, "(-{x})"),
            Expr::Bin { op, gauche, droite } => {
                write!(f, "({gauche} {} {droite})", op.symbole())
            }
            Expr::Appel { nom, args, .. } => {
                write!(f, "{nom}(")?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{a}")?;
                }
                f.write_str(")")
            }
        }
    }
}
