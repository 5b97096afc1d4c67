// src/config.rs
//
// Configuration optionnelle (TOML).
//
// Emplacement :
// - $KALKULATOR_CONFIG si défini
// - sinon <config_dir>/kalkulator/config.toml (dirs::config_dir)
//
// Fichier absent => valeurs par défaut, sans bruit.
// Fichier illisible ou mal formé => avertissement + valeurs par défaut.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::noyau::ModeAngle;

/// Variable d’environnement pour forcer le chemin du fichier.
pub const VAR_CHEMIN: &str = "KALKULATOR_CONFIG";

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("lecture de {chemin}: {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("format de {chemin}: {source}")]
    Format {
        chemin: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Durée de l’écran d’accueil.
    pub delai_accueil_ms: u64,
    /// Mode d’angle au démarrage ("degres" | "radians").
    pub mode_angle: ModeAngle,
    /// Taille initiale de la fenêtre (natif).
    pub largeur: f32,
    pub hauteur: f32,
    pub titre_accueil: String,
    pub auteur: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delai_accueil_ms: 2500,
            mode_angle: ModeAngle::Degres,
            largeur: 420.0,
            hauteur: 740.0,
            titre_accueil: "Kalkulator".to_string(),
            auteur: "Katarzyna".to_string(),
        }
    }
}

impl Config {
    /// Chemin du fichier (None si aucun répertoire de config sur la plateforme).
    pub fn chemin() -> Option<PathBuf> {
        if let Some(p) = std::env::var_os(VAR_CHEMIN) {
            return Some(PathBuf::from(p));
        }
        dirs::config_dir().map(|d| d.join("kalkulator").join("config.toml"))
    }

    /// Charge la config ; ne bloque jamais le démarrage.
    pub fn charger() -> Self {
        let Some(chemin) = Self::chemin() else {
            debug!("pas de répertoire de configuration, valeurs par défaut");
            return Self::default();
        };

        if !chemin.exists() {
            debug!(chemin = %chemin.display(), "pas de fichier de configuration");
            return Self::default();
        }

        match Self::depuis_fichier(&chemin) {
            Ok(c) => {
                debug!(chemin = %chemin.display(), "configuration chargée");
                c
            }
            Err(e) => {
                warn!(erreur = %e, "configuration ignorée");
                Self::default()
            }
        }
    }

    pub fn depuis_fichier(chemin: &Path) -> Result<Self, ErreurConfig> {
        let texte = std::fs::read_to_string(chemin).map_err(|source| ErreurConfig::Lecture {
            chemin: chemin.to_path_buf(),
            source,
        })?;
        Self::depuis_texte(&texte).map_err(|source| ErreurConfig::Format {
            chemin: chemin.to_path_buf(),
            source,
        })
    }

    pub fn depuis_texte(texte: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(texte)
    }
}
