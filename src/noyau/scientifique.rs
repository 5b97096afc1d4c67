//! Fonctions scientifiques (mode paysage).
//!
//! Chaque touche évalue d’abord l’expression affichée, puis :
//! - transforme la valeur (x², sin, x!, ...) et affiche le résultat ;
//! - ou réécrit le texte (EE, xʸ, y√x) ;
//! - ou bascule un mode (2nd, Rad) sans toucher au texte.
//!
//! Tout échec (évaluation, domaine, résultat non fini) affiche "Error".

use std::f64::consts;

use rand::Rng;
use serde::Deserialize;
use tracing::debug;

use super::eval::{evaluer_affichage, Evaluateur};
use super::format::format_nombre;
use super::saisie::Saisie;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

/// Drapeaux de mode de la session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modes {
    pub angle: ModeAngle,
    /// 2nd : bascule réservée à la couche de boutons, sans effet numérique.
    pub second: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FonctionSci {
    Carre,
    Cube,
    RacineCarree,
    RacineCubique,
    ExpE,
    Exp10,
    Ln,
    Log10,
    Inverse,
    Factorielle,
    Sin,
    Cos,
    Tan,
    Sinh,
    Cosh,
    Tanh,
    Pi,
    E,
    Rand,
    Second,
    BasculeAngle,
    Exposant,
    Puissance,
    RacineNieme,
    Pourcent,
    ChangeSigne,
}

impl FonctionSci {
    pub fn depuis_label(label: &str) -> Option<Self> {
        use FonctionSci::*;
        let f = match label {
            "x²" => Carre,
            "x³" => Cube,
            "√x" => RacineCarree,
            "³√x" => RacineCubique,
            "eˣ" => ExpE,
            "10ˣ" => Exp10,
            "ln" => Ln,
            "log10" => Log10,
            "1/x" => Inverse,
            "x!" => Factorielle,
            "sin" => Sin,
            "cos" => Cos,
            "tan" => Tan,
            "sinh" => Sinh,
            "cosh" => Cosh,
            "tanh" => Tanh,
            "π" => Pi,
            "e" => E,
            "Rand" => Rand,
            "2nd" => Second,
            "Rad" => BasculeAngle,
            "EE" => Exposant,
            "xʸ" => Puissance,
            "y√x" => RacineNieme,
            "%" => Pourcent,
            "+/-" => ChangeSigne,
            _ => return None,
        };
        Some(f)
    }
}

/// Applique une touche scientifique à la saisie.
pub fn appliquer<E: Evaluateur, R: Rng>(
    f: FonctionSci,
    saisie: &mut Saisie,
    modes: &mut Modes,
    evaluateur: &E,
    rng: &mut R,
) {
    match f {
        FonctionSci::Second => {
            modes.second = !modes.second;
            return;
        }
        FonctionSci::BasculeAngle => {
            modes.angle = match modes.angle {
                ModeAngle::Degres => ModeAngle::Radians,
                ModeAngle::Radians => ModeAngle::Degres,
            };
            return;
        }
        _ => {}
    }

    if saisie.exposant().est_actif() {
        return;
    }

    let x = match evaluer_affichage(evaluateur, saisie.texte()) {
        Ok(x) if x.is_finite() => x,
        Ok(x) => {
            debug!(texte = saisie.texte(), valeur = x, "valeur non finie");
            saisie.erreur();
            return;
        }
        Err(e) => {
            debug!(texte = saisie.texte(), erreur = %e, "évaluation refusée");
            saisie.erreur();
            return;
        }
    };

    match f {
        FonctionSci::Exposant => {
            saisie.ouvrir_exposant();
            return;
        }
        FonctionSci::Puissance => {
            saisie.puissance();
            return;
        }
        FonctionSci::RacineNieme => {
            saisie.racine_nieme();
            return;
        }
        _ => {}
    }

    let constante = est_constante(saisie.texte());
    match transformer(f, x, modes.angle, constante, rng) {
        Some(v) if v.is_finite() => saisie.remplacer(format_nombre(v)),
        _ => saisie.erreur(),
    }
}

/// Calcul numérique d’une touche. None = hors domaine.
fn transformer<R: Rng>(
    f: FonctionSci,
    x: f64,
    angle: ModeAngle,
    constante: bool,
    rng: &mut R,
) -> Option<f64> {
    use FonctionSci::*;

    // les constantes π / e sont déjà des radians
    let rad = |x: f64| {
        if angle == ModeAngle::Degres && !constante {
            x * consts::PI / 180.0
        } else {
            x
        }
    };

    let v = match f {
        Carre => x.powi(2),
        Cube => x.powi(3),
        RacineCarree => x.sqrt(),
        RacineCubique => x.cbrt(),
        ExpE => x.exp(),
        Exp10 => 10f64.powf(x),

        Ln if x <= 0.0 => return None,
        Ln => x.ln(),
        Log10 if x <= 0.0 => return None,
        Log10 => x.log10(),

        Inverse if x == 0.0 => return None,
        Inverse => 1.0 / x,

        Factorielle => factorielle(x),

        Sin => rad(x).sin(),
        Cos => rad(x).cos(),
        Tan => rad(x).tan(),

        Sinh => x.sinh(),
        Cosh => x.cosh(),
        Tanh => x.tanh(),

        Pi => consts::PI,
        E => consts::E,
        Rand => rng.gen::<f64>(),

        Pourcent => x / 100.0,
        ChangeSigne => -x,

        Second | BasculeAngle | Exposant | Puissance | RacineNieme => return None,
    };
    Some(v)
}

/// n·(n-1)·… tant que n > 1 ; NaN si n < 0.
///
/// Les non-entiers gardent leur partie fractionnaire (2.5! = 2.5·1.5).
/// Le produit s’arrête dès qu’il déborde : l’infini est rejeté par l’appelant.
pub fn factorielle(n: f64) -> f64 {
    if n < 0.0 {
        return f64::NAN;
    }
    let mut acc = 1.0;
    let mut k = n;
    while k > 1.0 {
        acc *= k;
        if !acc.is_finite() {
            break;
        }
        k -= 1.0;
    }
    acc
}

/// Texte reconnu comme la constante π ou e (symbole ou décimal).
pub fn est_constante(texte: &str) -> bool {
    matches!(texte, "π" | "pi" | "e")
        || texte == consts::PI.to_string()
        || texte == consts::E.to_string()
}
