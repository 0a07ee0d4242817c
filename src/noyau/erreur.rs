// src/noyau/erreur.rs
//
// Erreurs typées du noyau.
// Toute entrée mal formée aboutit à l’une de ces valeurs (jamais de panic).

use thiserror::Error;

/// Échec d’une évaluation. Le message (`Display`) est celui affiché à l’utilisateur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Opérande droit de `/` exactement nul.
    #[error("division par zéro")]
    DivisionByZero,

    /// Opérateur ou fonction sans assez d’opérandes sous lui (ordre RPN).
    #[error("opérande manquant (pile insuffisante)")]
    StackUnderflow,

    /// `)` sans `(` correspondante, ou `(` jamais refermée.
    #[error("parenthèses mal appariées")]
    MismatchedParenthesis,

    /// Jeton ni nombre, ni opérateur, ni fonction.
    #[error("opérateur inconnu: '{0}'")]
    UnknownOperator(String),

    /// Fin d’évaluation avec une profondeur de pile différente de 1.
    #[error("expression mal formée")]
    MalformedExpression,
}

pub type EvalResult<T> = Result<T, EvalError>;
