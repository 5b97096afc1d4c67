// src/app/accueil.rs
//
// Écran d’accueil : titre, auteur, spinner, puis bascule automatique.
//
// Le délai part de la première frame dessinée (pas de la construction) et se
// mesure avec l’horloge egui (`input.time`), disponible en natif comme en wasm.

use eframe::egui;

use super::etat::AppCalc;
use super::vue::{FOND, VERT};

#[derive(Clone, Debug)]
pub struct Accueil {
    debut: Option<f64>,
    delai: f64,
}

impl Accueil {
    pub fn new(delai_ms: u64) -> Self {
        Self {
            debut: None,
            delai: delai_ms as f64 / 1000.0,
        }
    }

    /// true une fois le délai écoulé depuis le premier appel.
    pub fn termine(&mut self, maintenant: f64) -> bool {
        let debut = *self.debut.get_or_insert(maintenant);
        maintenant - debut >= self.delai
    }

    pub fn restant(&self, maintenant: f64) -> f64 {
        match self.debut {
            Some(debut) => (self.delai - (maintenant - debut)).max(0.0),
            None => self.delai,
        }
    }
}

impl AppCalc {
    pub fn ui_accueil(&self, ui: &mut egui::Ui) {
        ui.painter().rect_filled(ui.max_rect(), 0.0, FOND);

        ui.vertical_centered(|ui| {
            ui.add_space((ui.available_height() * 0.35).max(0.0));
            ui.label(
                egui::RichText::new(&self.config.titre_accueil)
                    .size(42.0)
                    .strong()
                    .color(VERT),
            );
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new(&self.config.auteur)
                    .size(22.0)
                    .italics()
                    .color(egui::Color32::WHITE),
            );
            ui.add_space(30.0);
            ui.add(egui::Spinner::new().size(36.0).color(VERT));
        });
    }
}
