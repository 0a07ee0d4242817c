//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile numérique -> f64
//!
//! Aucun état entre deux appels : chaque évaluation reconstruit ses jetons et sa pile.

use super::erreur::{EvalError, EvalResult};
use super::jetons::{tokenize, Operateur, Tok};
use super::rpn::to_rpn;
use super::variables::Variables;

/// Que faire si la pile ne contient pas exactement une valeur à la fin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FinDePile {
    /// Profondeur != 1 => `MalformedExpression`.
    #[default]
    Stricte,
    /// Compatibilité : renvoie le fond de pile (ex: "2 3" => 2).
    /// Une pile vide reste une erreur.
    Tolerante,
}

/// Réglages du noyau.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reglages {
    pub fin_de_pile: FinDePile,
}

/// Résultat complet : valeur + traces (jetons, RPN) pour la démarche.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub jetons: Vec<Tok>,
    pub rpn: Vec<Tok>,
}

/// API simple : évaluation stricte.
pub fn evaluate(expr: &str, vars: &Variables) -> EvalResult<f64> {
    eval_expression(expr, vars, &Reglages::default()).map(|e| e.valeur)
}

/// API publique : évalue une expression et retourne la valeur + la démarche.
pub fn eval_expression(expr: &str, vars: &Variables, reglages: &Reglages) -> EvalResult<Evaluation> {
    // 1) Jetons
    let jetons = tokenize(expr, vars);
    if jetons.is_empty() {
        return Err(EvalError::MalformedExpression);
    }

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    // 3) Pile
    let valeur = evaluate_postfix(&rpn, reglages.fin_de_pile)?;

    Ok(Evaluation { valeur, jetons, rpn })
}

/// Évalue une suite RPN avec une seule pile numérique, de gauche à droite.
pub fn evaluate_postfix(rpn: &[Tok], fin: FinDePile) -> EvalResult<f64> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Nombre(v) => pile.push(*v),

            Tok::Fonction(f) => {
                let b = pile.pop().ok_or(EvalError::StackUnderflow)?;
                pile.push(f.appliquer(b));
            }

            Tok::Op(op) => {
                // b = opérande droit (dépilé en premier)
                let b = pile.pop().ok_or(EvalError::StackUnderflow)?;
                let a = pile.pop().ok_or(EvalError::StackUnderflow)?;
                pile.push(appliquer_operateur(*op, a, b)?);
            }

            Tok::Inconnu(s) => return Err(EvalError::UnknownOperator(s.clone())),
            Tok::ParG | Tok::ParD => return Err(EvalError::UnknownOperator(tok.to_string())),
        }
    }

    match (fin, pile.as_slice()) {
        (_, [v]) => Ok(*v),
        (FinDePile::Tolerante, [v, ..]) => Ok(*v),
        _ => Err(EvalError::MalformedExpression),
    }
}

fn appliquer_operateur(op: Operateur, a: f64, b: f64) -> EvalResult<f64> {
    Ok(match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => {
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            a / b
        }
        Operateur::Puissance => a.powf(b),
    })
}
