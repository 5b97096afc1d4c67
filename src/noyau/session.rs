//! Session de calcul : tout l’état d’un écran calculatrice.
//!
//! Un seul objet possédé (texte, exposant, modes, mémoire) ; chaque touche le
//! fait évoluer. Pas d’état global.
//!
//! Contrats :
//! - sur "Error", seules AC, 2nd, Rad et mc agissent (AC = seule sortie) ;
//! - "=" remet toujours l’exposant à zéro, succès ou échec.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use super::eval::{evaluer_affichage, Evaluateur, EvaluateurInfixe};
use super::format::format_nombre;
use super::memoire::{ActionMemoire, Memoire};
use super::saisie::{EtatExposant, Saisie};
use super::scientifique::{self, FonctionSci, ModeAngle, Modes};
use super::touches::Touche;

#[derive(Clone, Debug)]
pub struct Session<E: Evaluateur = EvaluateurInfixe> {
    saisie: Saisie,
    memoire: Memoire,
    modes: Modes,
    evaluateur: E,
    rng: StdRng,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ModeAngle::default())
    }
}

impl Session {
    pub fn new(angle: ModeAngle) -> Self {
        Self::avec_evaluateur(EvaluateurInfixe, angle)
    }
}

impl<E: Evaluateur> Session<E> {
    pub fn avec_evaluateur(evaluateur: E, angle: ModeAngle) -> Self {
        Self {
            saisie: Saisie::default(),
            memoire: Memoire::default(),
            modes: Modes {
                angle,
                second: false,
            },
            evaluateur,
            rng: StdRng::from_entropy(),
        }
    }

    /// Graine fixe pour Rand.
    #[cfg(test)]
    pub fn avec_graine(mut self, graine: u64) -> Self {
        self.rng = StdRng::seed_from_u64(graine);
        self
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn texte(&self) -> &str {
        self.saisie.texte()
    }

    pub fn exposant(&self) -> EtatExposant {
        self.saisie.exposant()
    }

    pub fn memoire(&self) -> f64 {
        self.memoire.valeur()
    }

    pub fn modes(&self) -> Modes {
        self.modes
    }

    /* ------------------------ Touches ------------------------ */

    /// Bouton par son libellé. false si le libellé est inconnu.
    pub fn appuyer(&mut self, label: &str) -> bool {
        match Touche::depuis_label(label) {
            Some(t) => {
                self.touche(t);
                true
            }
            None => {
                debug!(label, "libellé inconnu");
                false
            }
        }
    }

    pub fn touche(&mut self, t: Touche) {
        if self.saisie.est_erreur() && !agit_sur_erreur(t) {
            debug!(?t, "ignorée (Error affiché)");
            return;
        }

        match t {
            Touche::Chiffre(d) => self.saisie.chiffre(d),
            Touche::Point => self.saisie.point(),
            Touche::Operateur(op) => self.saisie.operateur(op),
            Touche::Ouvrir => self.saisie.ouvrir(),
            Touche::Fermer => self.saisie.fermer(),
            Touche::Sci(f) => scientifique::appliquer(
                f,
                &mut self.saisie,
                &mut self.modes,
                &self.evaluateur,
                &mut self.rng,
            ),
            Touche::Memoire(action) => self.memoire.appliquer(action, &mut self.saisie),
            Touche::Effacer => self.saisie.effacer(),
            Touche::Egal => self.egal(),
        }

        debug!(?t, texte = self.saisie.texte(), exposant = ?self.saisie.exposant(), "touche");
    }

    /// "=" : réécriture + évaluation, "Error" sur tout échec.
    fn egal(&mut self) {
        let exposant = self.saisie.exposant();
        if exposant.est_actif() && !exposant.chiffres_saisis() {
            debug!(texte = self.saisie.texte(), "exposant sans chiffre");
            self.saisie.erreur();
            return;
        }

        match evaluer_affichage(&self.evaluateur, self.saisie.texte()) {
            Ok(v) if v.is_finite() => self.saisie.remplacer(format_nombre(v)),
            Ok(v) => {
                debug!(texte = self.saisie.texte(), valeur = v, "résultat non fini");
                self.saisie.erreur();
            }
            Err(e) => {
                debug!(texte = self.saisie.texte(), erreur = %e, "évaluation refusée");
                self.saisie.erreur();
            }
        }
    }
}

fn agit_sur_erreur(t: Touche) -> bool {
    matches!(
        t,
        Touche::Effacer
            | Touche::Sci(FonctionSci::Second | FonctionSci::BasculeAngle)
            | Touche::Memoire(ActionMemoire::Effacer)
    )
}
