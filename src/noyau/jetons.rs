// src/noyau/jetons.rs

use std::fmt;

use super::variables::Variables;

/// Opérateur binaire (arité 2 : opérande gauche puis droit).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance, // ^
}

impl Operateur {
    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            '^' => Some(Self::Puissance),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
            Self::Puissance => '^',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 1,
            Self::Fois | Self::Divise => 2,
            Self::Puissance => 3,
        }
    }
}

/// Fonction unaire, écrite avant son argument mais appliquée en postfixe (RPN).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sqrt,
    Sin,
    Cos,
    Tan,
    Log, // logarithme naturel
}

impl Fonction {
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        match nom {
            "sqrt" => Some(Self::Sqrt),
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "log" => Some(Self::Log),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
        }
    }

    pub fn appliquer(self, x: f64) -> f64 {
        match self {
            Self::Sqrt => x.sqrt(),
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Log => x.ln(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    /// Littéral ou variable déjà remplacée par sa valeur.
    Nombre(f64),
    Op(Operateur),
    Fonction(Fonction),

    // Tout le reste (mot inconnu, symbole isolé, nombre illisible).
    // NOTE: rien n’est refusé ici ; l’évaluateur échouera avec UnknownOperator.
    Inconnu(String),

    ParG,
    ParD,
}

/// Découpe une expression en jetons.
/// Motif :
/// - suite maximale de minuscules [a-z]+ -> variable liée, fonction, sinon Inconnu
/// - suite maximale de chiffres et de points -> Nombre (ex: 3.14, .5), sinon Inconnu
/// - tout autre caractère non blanc, seul -> opérateur, parenthèse ou Inconnu
///
/// Fonction pure : aucune validation sémantique (`++` passe sans erreur).
pub fn tokenize(s: &str, vars: &Variables) -> Vec<Tok> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Mots : variables d’abord (comme la saisie d’origine), puis fonctions
        if c.is_ascii_lowercase() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_lowercase() {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect();

            let tok = match (vars.valeur(&mot), Fonction::depuis_nom(&mot)) {
                (Some(v), _) => Tok::Nombre(v),
                (None, Some(f)) => Tok::Fonction(f),
                (None, None) => Tok::Inconnu(mot),
            };
            out.push(tok);
            continue;
        }

        // Nombre décimal : le point fait partie de la suite de chiffres
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();
            match txt.parse::<f64>() {
                Ok(v) => out.push(Tok::Nombre(v)),
                Err(_) => out.push(Tok::Inconnu(txt)),
            }
            continue;
        }

        let tok = match c {
            '(' => Tok::ParG,
            ')' => Tok::ParD,
            _ => match Operateur::depuis_symbole(c) {
                Some(op) => Tok::Op(op),
                None => Tok::Inconnu(c.to_string()),
            },
        };
        out.push(tok);
        i += 1;
    }

    out
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Nombre(v) => write!(f, "{v}"),
            Tok::Op(op) => write!(f, "{}", op.symbole()),
            Tok::Fonction(fun) => f.write_str(fun.nom()),
            Tok::Inconnu(s) => f.write_str(s),
            Tok::ParG => f.write_str("("),
            Tok::ParD => f.write_str(")"),
        }
    }
}

/// Format utilitaire (“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
