// src/noyau/format.rs
//
// Affichage des résultats numériques.
//
// Contrat : le texte produit doit pouvoir être ré-évalué tel quel par la
// session. Les très grands / très petits nombres utilisent donc la notation
// EE de la calculatrice (1EE21) et non `1e21`, que le tokenizer lirait comme
// 1 suivi de la constante e.

/// Bornes de la notation décimale “pleine”.
const SEUIL_GRAND: f64 = 1e21;
const SEUIL_PETIT: f64 = 1e-6;

/// Format d’affichage d’un résultat fini.
///
/// - 0 et -0 -> "0"
/// - entiers sans partie décimale ("5000")
/// - plus courte écriture décimale exacte sinon ("0.30000000000000004")
/// - |x| >= 1e21 ou |x| < 1e-6 -> "mantisseEEexposant"
pub fn format_nombre(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }

    let a = x.abs();
    if a.is_finite() && (a >= SEUIL_GRAND || a < SEUIL_PETIT) {
        return format!("{x:e}").replace('e', "EE");
    }

    format!("{x}")
}
