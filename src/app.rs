// src/app.rs
//
// Kalkulator — module App (racine)
// --------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + accueil.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod accueil;
pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Ecran;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let maintenant = ctx.input(|i| i.time);
        if let Some(restant) = self.tic_accueil(maintenant) {
            // réveil à l’échéance, même sans événement utilisateur
            ctx.request_repaint_after(std::time::Duration::from_secs_f64(restant));
        }

        // Raccourci clavier global : ESC = AC.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(vue::FOND))
            .show(ctx, |ui| match self.ecran {
                Ecran::Accueil => self.ui_accueil(ui),
                Ecran::Calcul => self.ui(ui),
            });
    }
}
