// src/noyau/syntaxe.rs
//
// Jetons -> AST (descente récursive + montée de précédence)
//
// Grammaire (précédence croissante) :
//   expr    := term (('+' | '-') term)*
//   term    := unary (('*' | '/') unary)*
//   unary   := '-' unary | power
//   power   := primary ('^' unary)?          // associatif à droite
//   primary := NUMBER | IDENT ('(' args? ')')? | '(' expr ')'
//   args    := expr (',' expr)*
//
// Règles:
// - Ident nu => Expr::Const (le registre tranchera à l’évaluation)
// - Ident + '(' => Expr::Appel, même avec zéro argument
// - Moins unaire : plus lié que * et /, moins que ^ => "-2^2" = -(2^2)

use tracing::trace;

use super::erreur::{Erreur, Resultat};
use super::expr::Expr;
use super::jetons::{Jeton, Op, Tok};

/// Garde-fou : profondeur d’imbrication ( '(' , appels, '-' ) avant refus.
/// Le nombre de littéraux est borné ailleurs, pas les parenthèses.
pub const MAX_PROFONDEUR: usize = 200;

/// Garde-fou : taille de l’arbre ("pi+pi+pi+..." n’a aucun littéral).
pub const MAX_NOEUDS: usize = 1_000;

/// `attendu` des refus de taille : l’entrée est bien formée, seule la limite est atteinte.
pub const ATTENDU_TAILLE: &str = "au plus 1000 nœuds (limite de taille atteinte)";

static FIN: Tok = Tok::Fin;

/// Précédence des opérateurs binaires gauches ; `None` pour '^' (passe par `power`).
fn precedence(op: Op) -> Option<u8> {
    match op {
        Op::Plus | Op::Minus => Some(1),
        Op::Star | Op::Slash => Some(2),
        Op::Caret => None,
    }
}

/// Construit l’AST d’un flux de jetons (terminé par `Tok::Fin`).
pub fn parse(jetons: &[Jeton]) -> Resultat<Expr> {
    let mut p = Parseur::new(jetons);

    if matches!(p.tok(), Tok::Fin) {
        return Err(Erreur::parse(p.pos(), Tok::Fin, "une expression"));
    }

    let e = p.expr(1)?;

    // jetons en trop ( "1+2)" , "2 3" )
    if !matches!(p.tok(), Tok::Fin) {
        return Err(p.erreur("fin de l’expression"));
    }

    trace!(noeuds = e.taille(), "AST construit");
    Ok(e)
}

struct Parseur<'a> {
    jetons: &'a [Jeton],
    i: usize,
    profondeur: usize,
    noeuds: usize,
    // position de fin si le flux n’a pas de sentinelle
    pos_fin: usize,
}

impl<'a> Parseur<'a> {
    fn new(jetons: &'a [Jeton]) -> Self {
        let pos_fin = jetons.last().map(|j| j.pos + 1).unwrap_or(0);
        Self {
            jetons,
            i: 0,
            profondeur: 0,
            noeuds: 0,
            pos_fin,
        }
    }

    fn tok(&self) -> &'a Tok {
        self.jetons.get(self.i).map(|j| &j.tok).unwrap_or(&FIN)
    }

    fn pos(&self) -> usize {
        self.jetons.get(self.i).map(|j| j.pos).unwrap_or(self.pos_fin)
    }

    fn avance(&mut self) {
        if self.i < self.jetons.len() {
            self.i += 1;
        }
    }

    fn erreur(&self, attendu: &'static str) -> Erreur {
        Erreur::parse(self.pos(), self.tok().clone(), attendu)
    }

    fn compte_noeud(&mut self) -> Resultat<()> {
        self.noeuds += 1;
        if self.noeuds > MAX_NOEUDS {
            return Err(self.erreur(ATTENDU_TAILLE));
        }
        Ok(())
    }

    fn attend_rpar(&mut self) -> Resultat<()> {
        if matches!(self.tok(), Tok::RPar) {
            self.avance();
            Ok(())
        } else {
            Err(self.erreur("')'"))
        }
    }

    /// expr / term : opérateurs binaires associatifs à gauche, précédence >= `min`.
    fn expr(&mut self, min: u8) -> Resultat<Expr> {
        let mut gauche = self.unaire()?;

        loop {
            let (op, p) = match self.tok() {
                Tok::Op(op) => match precedence(*op) {
                    Some(p) if p >= min => (*op, p),
                    _ => break,
                },
                _ => break,
            };
            self.compte_noeud()?;
            self.avance();
            // p + 1 : associativité gauche
            let droite = self.expr(p + 1)?;
            gauche = Expr::bin(op, gauche, droite);
        }

        Ok(gauche)
    }

    fn unaire(&mut self) -> Resultat<Expr> {
        self.profondeur += 1;
        if self.profondeur > MAX_PROFONDEUR {
            return Err(self.erreur("une expression moins imbriquée"));
        }

        let e = if matches!(self.tok(), Tok::Op(Op::Minus)) {
            self.avance();
            self.unaire().map(Expr::neg)
        } else {
            self.puissance()
        };

        self.profondeur -= 1;
        e
    }

    fn puissance(&mut self) -> Resultat<Expr> {
        let base = self.primaire()?;

        if matches!(self.tok(), Tok::Op(Op::Caret)) {
            self.avance();
            // exposant = unary : associatif à droite, "2^-1" accepté
            let exposant = self.unaire()?;
            return Ok(Expr::bin(Op::Caret, base, exposant));
        }

        Ok(base)
    }

    fn primaire(&mut self) -> Resultat<Expr> {
        let pos = self.pos();
        self.compte_noeud()?;

        match self.tok() {
            Tok::Num { valeur, .. } => {
                self.avance();
                Ok(Expr::Lit(*valeur))
            }

            Tok::Ident(nom) => {
                self.avance();
                if !matches!(self.tok(), Tok::LPar) {
                    return Ok(Expr::Const {
                        nom: nom.clone(),
                        pos,
                    });
                }
                self.avance();
                let args = self.arguments()?;
                Ok(Expr::Appel {
                    nom: nom.clone(),
                    args,
                    pos,
                })
            }

            Tok::LPar => {
                self.avance();
                let e = self.expr(1)?;
                self.attend_rpar()?;
                Ok(e)
            }

            _ => Err(self.erreur("un nombre, un identifiant ou '('")),
        }
    }

    /// Après '(' d’un appel : liste éventuellement vide, puis ')'.
    fn arguments(&mut self) -> Resultat<Vec<Expr>> {
        let mut args = Vec::new();

        if matches!(self.tok(), Tok::RPar) {
            self.avance();
            return Ok(args);
        }

        loop {
            args.push(self.expr(1)?);
            match self.tok() {
                Tok::Virgule => self.avance(),
                Tok::RPar => {
                    self.avance();
                    return Ok(args);
                }
                _ => return Err(self.erreur("',' ou ')'")),
            }
        }
    }
}
