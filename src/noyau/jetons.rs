// src/noyau/jetons.rs

use std::fmt;

use super::erreur::{Erreur, LexErreur, Resultat};

/// Opérateurs binaires (et `-` unaire au parse).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^ (puissance, jamais réécrit)
}

impl Op {
    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
            Op::Caret => '^',
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    // texte décimal conservé tel quel + valeur f64
    Num { texte: String, valeur: f64 },

    // Fonctions + constantes : le registre décidera à l’évaluation.
    Ident(String),

    Op(Op),
    Virgule,

    LPar,
    RPar,

    // sentinelle de fin
    Fin,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num { texte, .. } => write!(f, "'{texte}'"),
            Tok::Ident(name) => write!(f, "'{name}'"),
            Tok::Op(op) => write!(f, "'{}'", op.symbole()),
            Tok::Virgule => f.write_str("','"),
            Tok::LPar => f.write_str("'('"),
            Tok::RPar => f.write_str("')'"),
            Tok::Fin => f.write_str("fin de l’expression"),
        }
    }
}

/// Jeton + position (index de caractère dans l’entrée).
#[derive(Clone, Debug, PartialEq)]
pub struct Jeton {
    pub tok: Tok,
    pub pos: usize,
}

impl Jeton {
    fn new(tok: Tok, pos: usize) -> Self {
        Self { tok, pos }
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux sans signe ni exposant (ex: 12, 3.25)
/// - opérateurs + - * / ^
/// - virgule, parenthèses ( )
/// - identifiants [a-zA-Z]+ (casse conservée : les clés du registre sont en minuscules)
///
/// Le dernier jeton est toujours `Tok::Fin`, positionné à la longueur de l’entrée.
pub fn tokenize(s: &str) -> Resultat<Vec<Jeton>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Ponctuation + opérateurs (un caractère)
        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            ',' => Some(Tok::Virgule),
            '+' => Some(Tok::Op(Op::Plus)),
            '-' => Some(Tok::Op(Op::Minus)),
            '*' => Some(Tok::Op(Op::Star)),
            '/' => Some(Tok::Op(Op::Slash)),
            '^' => Some(Tok::Op(Op::Caret)),
            _ => None,
        };
        if let Some(tok) = simple {
            out.push(Jeton::new(tok, i));
            i += 1;
            continue;
        }

        // Identifiants ASCII : [a-zA-Z]+
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Jeton::new(Tok::Ident(word), start));
            continue;
        }

        // Nombre : chiffres ('.' chiffres)?
        if c.is_ascii_digit() {
            let start = i;
            i = avance_chiffres(&chars, i);

            if i < chars.len() && chars[i] == '.' {
                let point = i;
                i += 1;
                if i >= chars.len() || !chars[i].is_ascii_digit() {
                    // "1." ou "1.x"
                    return Err(Erreur::lex(LexErreur::NombreMalforme, point));
                }
                i = avance_chiffres(&chars, i);

                // second point collé : "1.2.3"
                if i < chars.len() && chars[i] == '.' {
                    return Err(Erreur::lex(LexErreur::NombreMalforme, i));
                }
            }

            let texte: String = chars[start..i].iter().collect();
            // chiffres ASCII uniquement => parse f64 infaillible en pratique
            let valeur = texte
                .parse::<f64>()
                .map_err(|_| Erreur::lex(LexErreur::NombreMalforme, start))?;
            out.push(Jeton::new(Tok::Num { texte, valeur }, start));
            continue;
        }

        return Err(Erreur::lex(LexErreur::CaractereInattendu(c), i));
    }

    out.push(Jeton::new(Tok::Fin, chars.len()));
    Ok(out)
}

fn avance_chiffres(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Format utilitaire (démarche) : liste de jetons en texte, sans la sentinelle.
pub fn format_tokens(jetons: &[Jeton]) -> String {
    let mut out = Vec::new();
    for j in jetons {
        let s = match &j.tok {
            Tok::Num { texte, .. } => texte.clone(),
            Tok::Ident(name) => name.clone(),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::Virgule => ",".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Fin => continue,
        };
        out.push(s);
    }
    out.join(" ")
}
