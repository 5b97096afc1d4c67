// src/noyau/touches.rs
//
// Libellés des boutons -> catégories de touches.
// Les claviers sont décrits ici (données), la vue ne fait que les dessiner.

use super::memoire::ActionMemoire;
use super::saisie::Operateur;
use super::scientifique::FonctionSci;

/// Clavier scientifique (paysage) : 5 rangées, '0' double largeur.
pub const CLAVIER_SCIENTIFIQUE: [&[&str]; 5] = [
    &["(", ")", "mc", "m+", "m-", "mr", "AC", "+/-", "%", "÷"],
    &["2nd", "x²", "x³", "xʸ", "eˣ", "10ˣ", "7", "8", "9", "×"],
    &["1/x", "√x", "³√x", "y√x", "ln", "log10", "4", "5", "6", "-"],
    &["x!", "sin", "cos", "tan", "e", "EE", "1", "2", "3", "+"],
    &["Rad", "sinh", "cosh", "tanh", "π", "Rand", "0", ".", "="],
];

/// Clavier de base (portrait).
pub const CLAVIER_BASIQUE: [&[&str]; 5] = [
    &["AC", "÷"],
    &["7", "8", "9", "×"],
    &["4", "5", "6", "-"],
    &["1", "2", "3", "+"],
    &["0", ".", "="],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Point,
    Operateur(Operateur),
    Ouvrir,
    Fermer,
    Sci(FonctionSci),
    Memoire(ActionMemoire),
    Effacer,
    Egal,
}

impl Touche {
    pub fn depuis_label(label: &str) -> Option<Self> {
        let t = match label {
            "." => Touche::Point,
            "+" => Touche::Operateur(Operateur::Plus),
            "-" => Touche::Operateur(Operateur::Moins),
            "×" => Touche::Operateur(Operateur::Fois),
            "÷" => Touche::Operateur(Operateur::Divise),
            "(" => Touche::Ouvrir,
            ")" => Touche::Fermer,
            "mc" => Touche::Memoire(ActionMemoire::Effacer),
            "mr" => Touche::Memoire(ActionMemoire::Rappeler),
            "m+" => Touche::Memoire(ActionMemoire::Ajouter),
            "m-" => Touche::Memoire(ActionMemoire::Soustraire),
            "AC" => Touche::Effacer,
            "=" => Touche::Egal,
            _ => {
                let mut cs = label.chars();
                return match (cs.next(), cs.next()) {
                    (Some(d), None) if d.is_ascii_digit() => Some(Touche::Chiffre(d)),
                    _ => FonctionSci::depuis_label(label).map(Touche::Sci),
                };
            }
        };
        Some(t)
    }
}

/// Largeur relative d’un bouton ('0' occupe deux cases).
pub fn poids(label: &str) -> f32 {
    if label == "0" {
        2.0
    } else {
        1.0
    }
}
