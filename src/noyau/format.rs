// src/noyau/format.rs
//
// Affichage du résultat (texte de l’historique / de l’entrée après "=").
// - entier exact : "6"   (pas de ".0")
// - sinon        : plus court décimal qui relit la même valeur
// - zéro négatif : "0"
// - jamais d’exposant : le texte repasse tel quel dans `tokenize`
//   (1e21 => "1000000000000000000000", 1e-20 => "0.00000000000000000001")

pub fn format_resultat(v: f64) -> String {
    // -0.0 == 0.0
    if v == 0.0 {
        return "0".to_string();
    }

    // `Display` de f64 : décimal court, sans notation scientifique
    format!("{v}")
}
