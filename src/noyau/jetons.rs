// src/noyau/jetons.rs

use super::eval::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Pi,
    E,

    // Fonctions (sqrt, log, pow, ...). Le RPN décide de l’arité.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    // Moins unaire (posé par le RPN, jamais par tokenize)
    Neg,

    LPar,
    RPar,
    Virgule,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3., .5, 1.25)
/// - opérateurs + - * / ^
/// - parenthèses ( ) et virgule (arguments de pow)
/// - π ou pi, e
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (normalisés en minuscules)
/// - √ (équivaut à ident("sqrt"))
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            ',' => Some(Tok::Virgule),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '^' => Some(Tok::Caret),
            'π' => Some(Tok::Pi),
            '√' => Some(Tok::Ident("sqrt".to_string())),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let w = word.to_lowercase();

            match w.as_str() {
                "pi" => out.push(Tok::Pi),
                "e" => out.push(Tok::E),
                _ => out.push(Tok::Ident(w)),
            }
            continue;
        }

        // Nombre décimal : chiffres, au plus un point
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut point = false;
            while i < chars.len() && (chars[i].is_ascii_digit() || (chars[i] == '.' && !point)) {
                point |= chars[i] == '.';
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();
            let v = txt
                .parse::<f64>()
                .map_err(|_| ErreurEval::NombreInvalide(txt.clone()))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurEval::CaractereInattendu(c));
    }

    Ok(out)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Pi => "π".to_string(),
            Tok::E => "e".to_string(),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Virgule => ",".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
