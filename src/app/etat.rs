//! src/app/etat.rs
//!
//! État UI (sans dessin).
//!
//! Rôle : savoir quel écran est affiché (accueil / calculatrice) et porter la
//! session de calcul. Toute la logique des touches vit dans le noyau.
//!
//! Contrats :
//! - Aucune évaluation ici (on délègue à `Session`).
//! - Le minuteur d’accueil est lu sur l’horloge des frames : fermer la
//!   fenêtre l’annule, rien ne survit à l’application.

use tracing::{debug, info};

use super::accueil::Accueil;
use crate::config::Config;
use crate::noyau::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ecran {
    Accueil,
    Calcul,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub ecran: Ecran,
    pub accueil: Accueil,
    pub session: Session,
    pub config: Config,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AppCalc {
    pub fn new(config: Config) -> Self {
        Self {
            ecran: Ecran::Accueil,
            accueil: Accueil::new(config.delai_accueil_ms),
            session: Session::new(config.mode_angle),
            config,
        }
    }

    /// Avance le minuteur d’accueil. Renvoie le temps restant (s) si encore affiché.
    pub fn tic_accueil(&mut self, maintenant: f64) -> Option<f64> {
        if self.ecran != Ecran::Accueil {
            return None;
        }
        if self.accueil.termine(maintenant) {
            info!("fin de l’accueil");
            self.ecran = Ecran::Calcul;
            return None;
        }
        Some(self.accueil.restant(maintenant))
    }

    /// Bouton (ou raccourci clavier) : route vers la session.
    pub fn appuyer(&mut self, label: &str) {
        if self.ecran != Ecran::Calcul {
            return;
        }
        if !self.session.appuyer(label) {
            debug!(label, "touche sans effet");
        }
    }

    /// AC (clavier : Échap).
    pub fn clear_entree(&mut self) {
        self.appuyer("AC");
    }

    /// Libellé affiché sur un bouton (Rad devient Deg en mode degrés).
    pub fn titre_bouton<'a>(&self, label: &'a str) -> &'a str {
        use crate::noyau::ModeAngle;
        match (label, self.session.modes().angle) {
            ("Rad", ModeAngle::Degres) => "Deg",
            ("Rad", ModeAngle::Radians) => "Rad",
            _ => label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::ModeAngle;

    #[test]
    fn accueil_puis_calcul() {
        let mut app = AppCalc::default();
        assert_eq!(app.tic_accueil(0.0), Some(2.5));

        // touches ignorées pendant l’accueil
        app.appuyer("7");
        assert_eq!(app.session.texte(), "0");

        assert!(app.tic_accueil(1.0).is_some());
        assert_eq!(app.tic_accueil(2.6), None);
        assert_eq!(app.ecran, Ecran::Calcul);

        app.appuyer("7");
        assert_eq!(app.session.texte(), "7");
        app.clear_entree();
        assert_eq!(app.session.texte(), "0");
    }

    #[test]
    fn config_appliquee() {
        let config = Config {
            delai_accueil_ms: 0,
            mode_angle: ModeAngle::Radians,
            ..Config::default()
        };
        let mut app = AppCalc::new(config);
        assert_eq!(app.tic_accueil(0.0), None);
        assert_eq!(app.session.modes().angle, ModeAngle::Radians);
        assert_eq!(app.titre_bouton("Rad"), "Rad");
        app.appuyer("Rad");
        assert_eq!(app.titre_bouton("Rad"), "Deg");
        assert_eq!(app.titre_bouton("7"), "7");
    }
}
