// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur f64
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN sur une pile de f64
//
// Règles:
// - Ident(name):
//    - si name est une fonction connue => fonction (postfixée en RPN)
//    - sinon => erreur (pas de variables dans une calculatrice de poche)
// - Moins unaire:
//    - si '-' arrive quand on n’attend PAS une valeur, on pose Tok::Neg
//      (précédence entre * et ^ : -2^2 = -4, 2*-3 = -6)
// - Plus unaire : ignoré.
//
// NOTE:
// - Les fonctions sont traitées comme des opérateurs “collés” à leur argument
//   et sont sorties après la parenthèse fermante.

use super::eval::ErreurEval;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        Tok::Caret => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret)
}

/// Arité des fonctions reconnues (None = identifiant inconnu).
fn arite(name: &str) -> Option<usize> {
    match name {
        "sqrt" | "log" | "ln" | "exp" | "sin" | "cos" | "tan" => Some(1),
        "pow" => Some(2),
        _ => None,
    }
}

fn est_fonction(t: &Tok) -> bool {
    matches!(t, Tok::Ident(_))
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("pow"), LPar, Num(10), Virgule, Minus, Num(3), RPar]
///   rpn:    [Num(10), Num(3), Neg, Ident("pow")]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // Une entrée par '(' ouverte : nombre de virgules vues à ce niveau.
    let mut virgules: Vec<usize> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) | Tok::Pi | Tok::E => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Ident(name) => {
                if arite(&name).is_none() {
                    return Err(ErreurEval::IdentifiantInconnu(name));
                }
                ops.push(Tok::Ident(name));
                prev_was_value = false;
            }

            Tok::LPar => {
                ops.push(tok);
                virgules.push(0);
                prev_was_value = false;
            }

            Tok::Virgule => {
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }
                match virgules.last_mut() {
                    Some(n) => *n += 1,
                    None => return Err(ErreurEval::VirguleMalPlacee),
                }
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(op) => out.push(op),
                        None => return Err(ErreurEval::ParentheseFermante),
                    }
                }
                let nb_virgules = virgules.pop().unwrap_or(0);

                // si une fonction est au sommet, elle prend ses arguments ici
                if let Some(Tok::Ident(name)) = ops.last() {
                    let attendu = arite(name).unwrap_or(1);
                    if nb_virgules + 1 != attendu {
                        return Err(ErreurEval::NombreArguments {
                            fonction: name.clone(),
                            attendu,
                            recu: nb_virgules + 1,
                        });
                    }
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                } else if nb_virgules > 0 {
                    return Err(ErreurEval::VirguleMalPlacee);
                }

                prev_was_value = true;
            }

            Tok::Minus if !prev_was_value => {
                // moins unaire préfixe : rien à dépiler
                ops.push(Tok::Neg);
            }

            Tok::Plus if !prev_was_value => {
                // plus unaire : sans effet
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret | Tok::Neg => {
                if !prev_was_value {
                    return Err(ErreurEval::OperandeManquant);
                }
                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et on ne traverse pas une fonction (fonction reste collée à son argument)
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || est_fonction(top) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::ParentheseOuverte);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN sur une pile de f64.
///
/// Division par zéro : pas d’erreur ici, la valeur infinie remonte à l’appelant.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(*v),
            Tok::Pi => st.push(std::f64::consts::PI),
            Tok::E => st.push(std::f64::consts::E),

            Tok::Neg => {
                let a = st.pop().ok_or(ErreurEval::OperandeManquant)?;
                st.push(-a);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let b = st.pop().ok_or(ErreurEval::OperandeManquant)?;
                let a = st.pop().ok_or(ErreurEval::OperandeManquant)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => a / b,
                    _ => a.powf(b),
                };
                st.push(v);
            }

            Tok::Ident(name) => {
                let v = match name.as_str() {
                    "pow" => {
                        let e = st.pop().ok_or(ErreurEval::OperandeManquant)?;
                        let b = st.pop().ok_or(ErreurEval::OperandeManquant)?;
                        b.powf(e)
                    }
                    _ => {
                        let x = st.pop().ok_or(ErreurEval::OperandeManquant)?;
                        applique_unaire(name, x)?
                    }
                };
                st.push(v);
            }

            Tok::LPar | Tok::RPar | Tok::Virgule => {
                return Err(ErreurEval::ExpressionInvalide);
            }
        }
    }

    if st.len() != 1 {
        return Err(ErreurEval::ExpressionInvalide);
    }
    st.pop().ok_or(ErreurEval::ExpressionInvalide)
}

fn applique_unaire(name: &str, x: f64) -> Result<f64, ErreurEval> {
    let v = match name {
        "sqrt" => x.sqrt(),
        "log" => x.log10(),
        "ln" => x.ln(),
        "exp" => x.exp(),
        "sin" => x.sin(),
        "cos" => x.cos(),
        "tan" => x.tan(),
        _ => return Err(ErreurEval::IdentifiantInconnu(name.to_string())),
    };
    Ok(v)
}
