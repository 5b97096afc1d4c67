//! Tests de session : séquences de touches complètes, comme au doigt.
//!
//! Chaque test part d’une session neuve (texte "0", degrés, mémoire 0) et
//! tape des libellés de boutons exactement comme la vue les envoie.

use super::saisie::EtatExposant;
use super::{ModeAngle, Session};

fn tape(session: &mut Session, touches: &[&str]) {
    for t in touches {
        assert!(session.appuyer(t), "libellé inconnu: {t:?}");
    }
}

fn apres(touches: &[&str]) -> String {
    let mut s = Session::default().avec_graine(1);
    tape(&mut s, touches);
    s.texte().to_string()
}

fn valeur(touches: &[&str]) -> f64 {
    let t = apres(touches);
    t.parse::<f64>()
        .unwrap_or_else(|_| panic!("{touches:?} => {t:?} n’est pas un nombre"))
}

fn assert_proche(touches: &[&str], attendu: f64) {
    let v = valeur(touches);
    assert!(
        (v - attendu).abs() < 1e-9,
        "{touches:?} => {v}, attendu {attendu}"
    );
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn pas_de_zero_en_tete() {
    assert_eq!(apres(&["5"]), "5");
    assert_eq!(apres(&["0", "0", "7"]), "7");
    assert_eq!(apres(&["1", "AC", "4", "2"]), "42");
}

#[test]
fn double_point_ignore() {
    assert_eq!(apres(&["3", ".", "5", "."]), "3.5");
    assert_eq!(apres(&["3", ".", "5", "×", "2", ".", "1"]), "3.5×2.1");
}

#[test]
fn parentheses() {
    assert_eq!(apres(&["(", "1", "+", "2", ")"]), "(1+2)");
    assert_eq!(apres(&["(", "1", "+", ")"]), "(1+");
    assert_eq!(apres(&["2", "(", "3", ")"]), "2*(3)");
    assert_eq!(apres(&["2", "(", "3", ")", "="]), "6");
}

#[test]
fn operateurs_et_priorites() {
    assert_eq!(apres(&["2", "+", "3", "×", "4", "="]), "14");
    assert_eq!(apres(&["9", "÷", "2", "="]), "4.5");
    assert_eq!(apres(&["-", "4", "+", "1", "="]), "-3");
    assert_eq!(apres(&["0", ".", "1", "+", "0", ".", "2", "="]), "0.30000000000000004");
}

/* ------------------------ Notation EE ------------------------ */

#[test]
fn exposant_aller_retour() {
    assert_eq!(apres(&["5", "EE", "3", "="]), "5000");
    assert_eq!(apres(&["5", "EE", "-", "2", "="]), "0.05");
    assert_eq!(apres(&["1", ".", "5", "EE", "2", "+", "1", "="]), "151");
}

#[test]
fn exposant_sans_chiffre() {
    let mut s = Session::default();
    tape(&mut s, &["5", "EE", "-"]);
    assert_eq!(s.exposant(), EtatExposant::AttenteExposant { signe: true });
    tape(&mut s, &["="]);
    assert_eq!(s.texte(), "Error");
    assert_eq!(s.exposant(), EtatExposant::Inactif);
}

#[test]
fn exposant_bloque_les_fonctions() {
    let mut s = Session::default();
    tape(&mut s, &["5", "EE", "x²", "sin", "%", "+/-", "EE"]);
    assert_eq!(s.texte(), "5EE");
    tape(&mut s, &["2", "="]);
    assert_eq!(s.texte(), "500");
}

#[test]
fn bascules_actives_pendant_exposant() {
    let mut s = Session::default();
    tape(&mut s, &["5", "EE", "Rad", "2nd"]);
    assert_eq!(s.texte(), "5EE");
    assert_eq!(s.modes().angle, ModeAngle::Radians);
    assert!(s.modes().second);
    assert!(s.exposant().est_actif());

    tape(&mut s, &["2", "="]);
    assert_eq!(s.texte(), "500");
}

#[test]
fn resultat_en_notation_ee_reutilisable() {
    // 10^21 s’affiche 1EE21 et reste évaluable
    assert_eq!(apres(&["2", "1", "10ˣ"]), "1EE21");
    assert_eq!(apres(&["2", "1", "10ˣ", "÷", "1", "0", "="]), "100000000000000000000");
}

/* ------------------------ Fonctions scientifiques ------------------------ */

#[test]
fn trig_degres_et_radians() {
    assert_proche(&["9", "0", "sin"], 1.0);
    assert_proche(&["Rad", "9", "0", "sin"], 0.8939966636005579);
    assert_proche(&["6", "0", "cos"], 0.5);
    assert_proche(&["4", "5", "tan"], 1.0);
}

#[test]
fn trig_sur_constante() {
    // π reste en radians même en mode degrés : cos(π) = -1
    let v = valeur(&["π", "cos"]);
    assert!((v + 1.0).abs() < 1e-12);
}

#[test]
fn unaires() {
    assert_eq!(apres(&["3", "x²"]), "9");
    assert_eq!(apres(&["2", "x³"]), "8");
    assert_eq!(apres(&["1", "6", "√x"]), "4");
    assert_eq!(apres(&["2", "7", "³√x"]), "3");
    assert_eq!(apres(&["0", "eˣ"]), "1");
    assert_eq!(apres(&["3", "10ˣ"]), "1000");
    assert_eq!(apres(&["4", "1/x"]), "0.25");
    assert_eq!(apres(&["5", "x!"]), "120");
    assert_eq!(apres(&["0", "sinh"]), "0");
    assert_eq!(apres(&["0", "cosh"]), "1");
    assert_eq!(apres(&["1", "0", "0", "log10"]), "2");
    assert_proche(&["e", "ln"], 1.0);
}

#[test]
fn erreurs_de_domaine() {
    assert_eq!(apres(&["0", "1/x"]), "Error");
    assert_eq!(apres(&["0", "ln"]), "Error");
    assert_eq!(apres(&["-", "2", "log10"]), "Error");
    assert_eq!(apres(&["-", "3", "x!"]), "Error");
    assert_eq!(apres(&["2", "0", "0", "x!"]), "Error");
    assert_eq!(apres(&["-", "4", "√x"]), "Error");
    assert_eq!(apres(&["1", "÷", "0", "="]), "Error");
    assert_eq!(apres(&["5", "÷", "(", "2", "-", "2", ")", "="]), "Error");
}

#[test]
fn fonction_sur_expression_invalide() {
    assert_eq!(apres(&["2", "+", "x²"]), "Error");
    assert_eq!(apres(&["2", "+", "π"]), "Error");
}

#[test]
fn constantes_et_rand() {
    assert_eq!(apres(&["π"]), "3.141592653589793");
    assert_eq!(apres(&["e"]), "2.718281828459045");
    let r = valeur(&["Rand"]);
    assert!((0.0..1.0).contains(&r));
}

#[test]
fn puissance_et_racine_nieme() {
    assert_eq!(apres(&["2", "xʸ", "1", "0", "="]), "1024");
    assert_eq!(apres(&["8", "y√x"]), "(8)^(1/");
    assert_proche(&["8", "y√x", "3", ")", "="], 2.0);
    assert_proche(&["1", "+", "2", "7", "y√x", "3", ")", "="], 4.0);
}

#[test]
fn pourcent_et_signe() {
    assert_eq!(apres(&["5", "0", "%"]), "0.5");
    assert_eq!(apres(&["7", "+/-"]), "-7");
    assert_eq!(apres(&["7", "+/-", "+/-"]), "7");
}

#[test]
fn modes() {
    let mut s = Session::new(ModeAngle::Radians);
    tape(&mut s, &["1", "2nd"]);
    assert!(s.modes().second);
    assert_eq!(s.texte(), "1");
    tape(&mut s, &["Rad"]);
    assert_eq!(s.modes().angle, ModeAngle::Degres);
    tape(&mut s, &["2nd"]);
    assert!(!s.modes().second);
}

/* ------------------------ Mémoire ------------------------ */

#[test]
fn memoire_aller_retour() {
    let mut s = Session::default();
    tape(&mut s, &["mc"]);
    assert_eq!(s.memoire(), 0.0);

    tape(&mut s, &["7", "m+"]);
    assert_eq!(s.memoire(), 7.0);

    tape(&mut s, &["mc"]);
    assert_eq!(s.memoire(), 0.0);

    tape(&mut s, &["AC", "3", "m-"]);
    assert_eq!(s.memoire(), -3.0);

    tape(&mut s, &["mr"]);
    assert_eq!(s.texte(), "-3");
}

#[test]
fn memoire_lecture_partielle() {
    let mut s = Session::default();
    tape(&mut s, &["1", "2", "+", "5", "m+"]);
    assert_eq!(s.memoire(), 12.0);
    assert_eq!(s.texte(), "12+5");
}
