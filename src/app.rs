// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// État de l’application sans fenêtre : la vue (boutons, thème, liste)
// vit chez l’hôte, qui lit/écrit `EtatCalc`.

pub mod etat;

// Ré-export pratique : `use calculatrice_noyau::app::EtatCalc;`
pub use etat::EtatCalc;
