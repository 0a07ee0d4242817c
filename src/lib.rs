//! Calculatrice RPN — noyau d’évaluation.
//!
//! `expression + variables -> f64 | EvalError`, sans état entre deux appels.
//! L’interface egui (binaire) n’est qu’un appelant parmi d’autres.

pub mod noyau;

pub use noyau::{eval_expression, evaluate, EvalError, Evaluation, FinDePile, Reglages, Variables};
