//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : Ok => nombre fini ; Err => une variante typée attendue
//! - entrées "bruit" : jamais de panique, seulement des erreurs

use std::time::{Duration, Instant};

use super::{evaluate, Erreur};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

/// Erreurs *normales* sur des expressions bien formées :
/// le générateur n’émet que des noms du registre et une syntaxe valide.
fn is_erreur_attendue(e: &Erreur) -> bool {
    matches!(
        e,
        Erreur::DivisionByZero
            | Erreur::DomainError { .. }
            | Erreur::UndefinedResult
            | Erreur::TooManyLiterals { .. }
    )
}

fn check_ok_fini(expr: &str, v: f64) {
    assert!(v.is_finite(), "résultat non fini: expr={expr:?} v={v}");
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    // inclut 0 (utile pour tester la division par zéro)
    let a = rng.pick(10);
    if rng.coin() {
        format!("{a}.{}", rng.pick(100))
    } else {
        format!("{a}")
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(5) {
        0 | 1 => gen_nombre(rng),
        2 => "pi".to_string(),
        3 => "e".to_string(),
        _ => format!("(-{})", gen_nombre(rng)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    let d = depth - 1;
    match rng.pick(12) {
        0 => gen_atom(rng),
        1 => format!("({}+{})", gen_expr(rng, d), gen_expr(rng, d)),
        2 => format!("({}-{})", gen_expr(rng, d), gen_expr(rng, d)),
        3 => format!("({}*{})", gen_expr(rng, d), gen_expr(rng, d)),
        4 => format!("({}/{})", gen_expr(rng, d), gen_expr(rng, d)),
        5 => format!("({}^{})", gen_expr(rng, d), gen_atom(rng)),
        6 => format!("-{}", gen_expr(rng, d)),
        7 => {
            let f = ["sin", "cos", "tan", "abs", "round"][rng.pick(5) as usize];
            format!("{f}({})", gen_expr(rng, d))
        }
        8 => {
            // domaine pas garanti : sqrt / log de négatifs attendus
            let f = if rng.coin() { "sqrt" } else { "log" };
            format!("{f}({})", gen_expr(rng, d))
        }
        _ => {
            let f = ["sum", "prod", "avg"][rng.pick(3) as usize];
            let n = 1 + rng.pick(3) as usize;
            let args: Vec<String> = (0..n).map(|_| gen_expr(rng, d)).collect();
            format!("{f}({})", args.join(","))
        }
    }
}

/// Bruit : alphabet du langage + quelques intrus.
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '9', '.', '+', '-', '*', '/', '^', '(', ')', ',', ' ', 's', 'i', 'n', 'p', 'e',
        'q', 'r', 't', '×', '#',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_invariant_fini() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        match evaluate(&expr) {
            Ok(v) => {
                check_ok_fini(&expr, v);
                assert_eq!(evaluate(&expr), Ok(v), "expr={expr:?}");
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let len = 1 + rng.pick(40) as usize;
        let expr = gen_bruit(&mut rng, len);

        // seul contrat : terminer, et Ok => fini
        if let Ok(v) = evaluate(&expr) {
            check_ok_fini(&expr, v);
        }
    }
}

#[test]
fn fuzz_safe_limite_respectee() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..100 {
        budget(t0, max);

        // n nombres séparés par des opérateurs aléatoires
        let n = 25 + rng.pick(12) as usize;
        let mut expr = gen_nombre(&mut rng);
        for _ in 1..n {
            let op = ["+", "-", "*"][rng.pick(3) as usize];
            expr.push_str(op);
            expr.push_str(&gen_nombre(&mut rng));
        }

        match evaluate(&expr) {
            Err(Erreur::TooManyLiterals { compte, max }) => {
                assert_eq!(compte, n);
                assert!(n > max);
            }
            Ok(v) => {
                assert!(n <= 30, "n={n} accepté");
                check_ok_fini(&expr, v);
            }
            Err(e) => panic!("erreur non attendue: expr={expr:?} err={e}"),
        }
    }
}
