//! Noyau — évaluation
//!
//! texte affiché -> réécriture (EE, ×, ÷, π, √, log10) -> jetons -> RPN -> f64
//!
//! L’évaluateur est un collaborateur : la session ne le connaît que par le
//! trait `Evaluateur`. `EvaluateurInfixe` est l’implémentation livrée.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::trace;

use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// Échec d’analyse ou d’évaluation d’une expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurEval {
    #[error("entrée vide")]
    Vide,
    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),
    #[error("nombre invalide: {0}")]
    NombreInvalide(String),
    #[error("identifiant inconnu: {0}")]
    IdentifiantInconnu(String),
    #[error("parenthèses non fermées")]
    ParentheseOuverte,
    #[error("parenthèse fermante sans ouvrante")]
    ParentheseFermante,
    #[error("virgule hors d’un appel de fonction")]
    VirguleMalPlacee,
    #[error("opérande manquant")]
    OperandeManquant,
    #[error("{fonction} attend {attendu} argument(s), reçu {recu}")]
    NombreArguments {
        fonction: String,
        attendu: usize,
        recu: usize,
    },
    #[error("expression invalide")]
    ExpressionInvalide,
}

/// Contrat de l’évaluateur : texte infixe (syntaxe machine) -> nombre.
///
/// Doit accepter `+ - * / ^`, les parenthèses, `sqrt`, `pow(b, e)`, `log`
/// et la constante `pi`. Un résultat non fini n’est pas une erreur ici.
pub trait Evaluateur {
    fn evaluer(&self, texte: &str) -> Result<f64, ErreurEval>;
}

/// Évaluateur infixe maison (shunting-yard).
#[derive(Clone, Copy, Debug, Default)]
pub struct EvaluateurInfixe;

impl Evaluateur for EvaluateurInfixe {
    fn evaluer(&self, texte: &str) -> Result<f64, ErreurEval> {
        let s = texte.trim();
        if s.is_empty() {
            return Err(ErreurEval::Vide);
        }

        let jetons = tokenize(s)?;
        let rpn = to_rpn(&jetons)?;
        trace!(jetons = %format_tokens(&jetons), rpn = %format_tokens(&rpn), "évaluation");

        eval_rpn(&rpn)
    }
}

lazy_static! {
    /// `<nombre>EE<entier signé>` (notation scientifique saisie au clavier).
    static ref MOTIF_EE: Regex =
        Regex::new(r"(\d+(?:\.\d*)?|\.\d+)EE(-?\d+)").expect("motif EE valide");
}

/// Réécrit le texte affiché dans la syntaxe de l’évaluateur.
///
/// - `5EE-3`  -> `(5 * pow(10, -3))`
/// - `log10(` -> `log(`
/// - `÷ × π √` -> `/ * pi sqrt`
pub fn vers_syntaxe_evaluateur(affiche: &str) -> String {
    MOTIF_EE
        .replace_all(affiche, "($1 * pow(10, $2))")
        .replace("log10(", "log(")
        .replace('÷', "/")
        .replace('×', "*")
        .replace('π', "pi")
        .replace('√', "sqrt")
}

/// Évalue le texte affiché : réécriture puis évaluateur.
pub fn evaluer_affichage<E: Evaluateur + ?Sized>(
    evaluateur: &E,
    affiche: &str,
) -> Result<f64, ErreurEval> {
    evaluateur.evaluer(&vers_syntaxe_evaluateur(affiche))
}
