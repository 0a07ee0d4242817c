//! Noyau RPN
//!
//! Organisation interne :
//! - jetons.rs    : tokenisation (variables remplacées par leur valeur)
//! - variables.rs : liaisons nom -> f64 fournies par l’appelant
//! - rpn.rs       : shunting-yard (infixe -> postfixe)
//! - eval.rs      : pile numérique + pipeline complet
//! - erreur.rs    : erreurs typées

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod rpn;
pub mod variables;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::EvalError;
pub use eval::{eval_expression, evaluate, Evaluation, FinDePile, Reglages};
pub use variables::Variables;
