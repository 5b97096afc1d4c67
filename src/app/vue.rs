// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Écran noir, affichage en haut (30 %), pavé en bas (70 %)
// - Paysage (largeur > hauteur) : clavier scientifique ; portrait : basique
// - '0' double largeur
// - Clavier physique : chiffres/opérateurs tapés, Enter = "=", Échap = AC
//
// La vue ne connaît que des libellés : tout passe par AppCalc::appuyer.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{poids, CLAVIER_BASIQUE, CLAVIER_SCIENTIFIQUE};

pub const FOND: egui::Color32 = egui::Color32::BLACK;
pub const VERT: egui::Color32 = egui::Color32::from_rgb(0xA8, 0xC6, 0x6C);
const GRIS: egui::Color32 = egui::Color32::from_rgb(0xA5, 0xA5, 0xA5);
const FOND_AFFICHAGE: egui::Color32 = egui::Color32::from_rgb(0x1C, 0x1C, 0x1C);

/// Part de la hauteur donnée à l’affichage.
const PART_AFFICHAGE: f32 = 0.3;
const ESPACE: f32 = 1.0;

impl AppCalc {
    /// UI calculatrice : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        self.clavier_physique(ui);

        ui.painter().rect_filled(ui.max_rect(), 0.0, FOND);
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        let taille = ui.available_size();
        let paysage = taille.x > taille.y;

        let h_affichage = taille.y * PART_AFFICHAGE;
        self.ui_affichage(ui, egui::vec2(taille.x, h_affichage));

        let clavier: &[&[&str]] = if paysage {
            &CLAVIER_SCIENTIFIQUE
        } else {
            &CLAVIER_BASIQUE
        };
        let h_pave = ui.available_height();
        self.ui_pave(ui, clavier, h_pave, paysage);
    }

    fn ui_affichage(&self, ui: &mut egui::Ui, taille: egui::Vec2) {
        let (rect, _) = ui.allocate_exact_size(taille, egui::Sense::hover());
        ui.painter().rect_filled(rect, 0.0, FOND_AFFICHAGE);

        let texte = self.session.texte();
        // police réduite pour les longues expressions
        let corps = if texte.chars().count() > 12 { 32.0 } else { 50.0 };

        // témoins : mémoire non nulle, 2nd, exposant en cours
        let mut temoins = Vec::new();
        if self.session.memoire() != 0.0 {
            temoins.push("M");
        }
        if self.session.modes().second {
            temoins.push("2nd");
        }
        if self.session.exposant().est_actif() {
            temoins.push("EE");
        }
        ui.painter().text(
            rect.left_top() + egui::vec2(10.0, 10.0),
            egui::Align2::LEFT_TOP,
            temoins.join("  "),
            egui::FontId::proportional(14.0),
            GRIS,
        );

        ui.painter().text(
            rect.right_bottom() + egui::vec2(-10.0, -20.0),
            egui::Align2::RIGHT_BOTTOM,
            texte,
            egui::FontId::proportional(corps),
            egui::Color32::WHITE,
        );
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, clavier: &[&[&str]], hauteur: f32, paysage: bool) {
        let colonnes: f32 = clavier
            .iter()
            .map(|r| r.iter().map(|l| poids(l)).sum::<f32>())
            .fold(1.0, f32::max);
        let largeur = ui.available_width();
        let w_case = (largeur - ESPACE * (colonnes - 1.0)) / colonnes;
        let h_case = (hauteur - ESPACE * (clavier.len() as f32 - 1.0)) / clavier.len() as f32;
        let corps = if paysage { 16.0 } else { 28.0 };

        for rangee in clavier {
            // rangée courte (AC ÷) : on étire pour remplir la largeur
            let poids_rangee: f32 = rangee.iter().map(|l| poids(l)).sum();
            let etirement = colonnes / poids_rangee;

            ui.horizontal(|ui| {
                for label in rangee.iter() {
                    let w = w_case * poids(label) * etirement
                        + ESPACE * (poids(label) * etirement - 1.0);
                    self.bouton(ui, label, egui::vec2(w, h_case), corps);
                }
            });
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, taille: egui::Vec2, corps: f32) {
        let second_actif = label == "2nd" && self.session.modes().second;
        let fond = if second_actif || matches!(label, "÷" | "×" | "-" | "+" | "=") {
            VERT
        } else {
            GRIS
        };

        let titre = egui::RichText::new(self.titre_bouton(label))
            .size(corps)
            .color(egui::Color32::WHITE);
        let resp = ui.add_sized(
            taille,
            egui::Button::new(titre)
                .fill(fond)
                .stroke(egui::Stroke::new(1.0, FOND)),
        );

        if resp.clicked() {
            self.appuyer(label);
        }
    }

    /// Clavier physique : texte tapé -> libellés de boutons.
    fn clavier_physique(&mut self, ui: &egui::Ui) {
        let mut labels: Vec<&'static str> = Vec::new();

        ui.input(|i| {
            for ev in &i.events {
                match ev {
                    egui::Event::Text(t) => labels.extend(t.chars().filter_map(label_clavier)),
                    egui::Event::Key {
                        key: egui::Key::Enter,
                        pressed: true,
                        ..
                    } => labels.push("="),
                    _ => {}
                }
            }
        });

        for l in labels {
            self.appuyer(l);
        }
    }
}

/// Caractère tapé -> libellé de bouton.
fn label_clavier(c: char) -> Option<&'static str> {
    const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
    let l = match c {
        '0'..='9' => CHIFFRES[c as usize - '0' as usize],
        '.' | ',' => ".",
        '+' => "+",
        '-' => "-",
        '*' | 'x' | '×' => "×",
        '/' | '÷' => "÷",
        '(' => "(",
        ')' => ")",
        '%' => "%",
        '^' => "xʸ",
        '=' => "=",
        _ => return None,
    };
    Some(l)
}
