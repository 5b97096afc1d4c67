//! Saisie : assemblage de l’expression, touche par touche.
//!
//! L’expression reste un texte (symboles d’affichage × ÷ π √) : l’évaluation
//! est déléguée. Les gardes ci-dessous empêchent seulement de produire un texte
//! que l’évaluateur refuserait à coup sûr (double point, parenthèse fermante
//! orpheline, opérateur pendant un exposant vide).
//!
//! Invariants :
//! - le texte n’est jamais vide ("0" après effacement) ;
//! - au plus un suffixe EE en attente (porté par `EtatExposant`).

/// Texte affiché pour toute opération invalide.
pub const ERREUR: &str = "Error";

/// Opérateurs terminant un nombre (symboles d’affichage + syntaxe machine).
const OPERATEURS: [char; 7] = ['+', '-', '×', '÷', '*', '/', '^'];

/// Saisie de l’exposant d’une notation scientifique ("EE").
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EtatExposant {
    #[default]
    Inactif,
    /// "EE" posé, aucun chiffre d’exposant encore ; `signe` = '-' déjà utilisé.
    AttenteExposant { signe: bool },
    /// Au moins un chiffre d’exposant saisi.
    ChiffresSaisis,
}

impl EtatExposant {
    pub fn est_actif(self) -> bool {
        !matches!(self, EtatExposant::Inactif)
    }

    pub fn chiffres_saisis(self) -> bool {
        matches!(self, EtatExposant::ChiffresSaisis)
    }
}

/// Les quatre opérateurs du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
        }
    }
}

#[derive(Clone, Debug)]
pub struct Saisie {
    texte: String,
    exposant: EtatExposant,
}

impl Default for Saisie {
    fn default() -> Self {
        Self {
            texte: "0".to_string(),
            exposant: EtatExposant::Inactif,
        }
    }
}

impl Saisie {
    pub fn texte(&self) -> &str {
        &self.texte
    }

    pub fn exposant(&self) -> EtatExposant {
        self.exposant
    }

    pub fn est_erreur(&self) -> bool {
        self.texte == ERREUR
    }

    /// AC : "0", exposant inactif.
    pub fn effacer(&mut self) {
        *self = Self::default();
    }

    /// Dépose un nouveau texte (résultat, rappel mémoire). Clôt l’exposant.
    pub fn remplacer(&mut self, texte: impl Into<String>) {
        let t = texte.into();
        self.texte = if t.is_empty() { "0".to_string() } else { t };
        self.exposant = EtatExposant::Inactif;
    }

    /// Erreur d’affichage : "Error" + abandon de l’exposant en cours.
    pub fn erreur(&mut self) {
        self.remplacer(ERREUR);
    }

    /* ------------------------ Touches ------------------------ */

    pub fn chiffre(&mut self, d: char) {
        debug_assert!(d.is_ascii_digit());

        if self.exposant.est_actif() {
            self.texte.push(d);
            self.exposant = EtatExposant::ChiffresSaisis;
            return;
        }

        if self.texte == "0" {
            self.texte = d.to_string();
        } else {
            self.texte.push(d);
        }
    }

    pub fn point(&mut self) {
        // exposant entier seulement
        if self.exposant.est_actif() {
            return;
        }
        if jeton_courant(&self.texte).contains('.') {
            return;
        }
        self.texte.push('.');
    }

    pub fn operateur(&mut self, op: Operateur) {
        if self.texte == "0" && op == Operateur::Moins {
            self.texte = "-".to_string();
            return;
        }

        match self.exposant {
            EtatExposant::AttenteExposant { signe: false } if op == Operateur::Moins => {
                self.texte.push('-');
                self.exposant = EtatExposant::AttenteExposant { signe: true };
                return;
            }
            // exposant vide : rien ne peut le clore
            EtatExposant::AttenteExposant { .. } => return,
            EtatExposant::ChiffresSaisis => self.exposant = EtatExposant::Inactif,
            EtatExposant::Inactif => {}
        }

        self.texte.push(op.symbole());
    }

    pub fn ouvrir(&mut self) {
        match self.exposant {
            EtatExposant::AttenteExposant { .. } => return,
            EtatExposant::ChiffresSaisis => self.exposant = EtatExposant::Inactif,
            EtatExposant::Inactif => {}
        }

        if self.texte == "0" {
            self.texte = "(".to_string();
            return;
        }

        // multiplication implicite : 2( et )( deviennent 2*( et )*(
        match self.texte.chars().last() {
            Some(c) if c.is_ascii_digit() || c == ')' => self.texte.push_str("*("),
            _ => self.texte.push('('),
        }
    }

    pub fn fermer(&mut self) {
        if self.exposant.est_actif() {
            return;
        }

        let ouvertes = self.texte.matches('(').count();
        let fermees = self.texte.matches(')').count();
        if fermees >= ouvertes {
            return;
        }

        match self.texte.chars().last() {
            Some(c) if OPERATEURS.contains(&c) || c == '(' => {}
            _ => self.texte.push(')'),
        }
    }

    /// EE : seulement derrière un chiffre, et une seule fois par nombre.
    pub fn ouvrir_exposant(&mut self) -> bool {
        if self.exposant.est_actif() {
            return false;
        }
        let apres_chiffre = self
            .texte
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_digit());
        if !apres_chiffre || jeton_courant(&self.texte).contains("EE") {
            return false;
        }

        self.texte.push_str("EE");
        self.exposant = EtatExposant::AttenteExposant { signe: false };
        true
    }

    /// xʸ : l’exposant sera tapé ensuite, évaluation au "=".
    pub fn puissance(&mut self) {
        self.texte.push('^');
    }

    /// y√x : `base` devient `(base)^(1/`, l’indice et la ')' restent à taper.
    pub fn racine_nieme(&mut self) {
        let base = operande_final(&self.texte);
        if base.is_empty() {
            return;
        }
        let base = base.to_string();
        let debut = self.texte.len() - base.len();
        self.texte.truncate(debut);
        self.texte.push_str(&format!("({base})^(1/"));
    }
}

/// Nombre en cours de frappe : ce qui suit le dernier opérateur ou '('.
///
/// Le signe d’un exposant ("EE-") appartient au nombre.
pub fn jeton_courant(texte: &str) -> &str {
    for (i, c) in texte.char_indices().rev() {
        if c == '(' {
            return &texte[i + 1..];
        }
        if OPERATEURS.contains(&c) {
            if c == '-' && texte[..i].ends_with("EE") {
                continue;
            }
            return &texte[i + c.len_utf8()..];
        }
    }
    texte
}

/// Dernier opérande : groupe parenthésé complet si le texte finit par ')',
/// sinon le nombre en cours.
fn operande_final(texte: &str) -> &str {
    if !texte.ends_with(')') {
        return jeton_courant(texte);
    }

    let mut profondeur: usize = 0;
    for (i, c) in texte.char_indices().rev() {
        match c {
            ')' => profondeur += 1,
            '(' => {
                profondeur = profondeur.saturating_sub(1);
                if profondeur == 0 {
                    return &texte[i..];
                }
            }
            _ => {}
        }
    }
    ""
}
