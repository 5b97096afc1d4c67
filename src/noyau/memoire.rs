// src/noyau/memoire.rs
//
// Registre mémoire (mc / mr / m+ / m-).
// Une seule case, durée de vie = la session. Jamais d’erreur levée ici.

use lazy_static::lazy_static;
use regex::Regex;

use super::format::format_nombre;
use super::saisie::Saisie;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionMemoire {
    /// mc
    Effacer,
    /// mr
    Rappeler,
    /// m+
    Ajouter,
    /// m-
    Soustraire,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Memoire {
    valeur: f64,
}

impl Memoire {
    pub fn valeur(&self) -> f64 {
        self.valeur
    }

    pub fn appliquer(&mut self, action: ActionMemoire, saisie: &mut Saisie) {
        match action {
            ActionMemoire::Effacer => self.valeur = 0.0,
            ActionMemoire::Rappeler => {
                if self.valeur.is_finite() {
                    saisie.remplacer(format_nombre(self.valeur));
                } else {
                    saisie.erreur();
                }
            }
            ActionMemoire::Ajouter => {
                if let Some(x) = lire_prefixe_numerique(saisie.texte()) {
                    self.valeur += x;
                }
            }
            ActionMemoire::Soustraire => {
                if let Some(x) = lire_prefixe_numerique(saisie.texte()) {
                    self.valeur -= x;
                }
            }
        }
    }
}

lazy_static! {
    static ref PREFIXE_NUMERIQUE: Regex =
        Regex::new(r"^([+-]?(?:\d+(?:\.\d*)?|\.\d+))(?:EE([+-]?\d+))?")
            .expect("motif numérique valide");
}

/// Lecture “au mieux” : le nombre en tête du texte, le reste est ignoré.
///
/// "12+3" -> 12 ; "-2.5EE3×4" -> -2500 ; "Error" / "(" / "-" -> None
pub fn lire_prefixe_numerique(texte: &str) -> Option<f64> {
    let cap = PREFIXE_NUMERIQUE.captures(texte)?;
    let mantisse = cap.get(1)?.as_str();
    let litteral = match cap.get(2) {
        Some(exp) => format!("{mantisse}e{}", exp.as_str()),
        None => mantisse.to_string(),
    };
    litteral.parse::<f64>().ok()
}
