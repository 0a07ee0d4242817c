// src/noyau/rpn.rs
//
// Shunting-yard : infixe -> RPN (postfixe)
//
// Règles:
// - Nombre : sortie directe.
// - Opérateur : dépile les opérateurs de précédence >= (associativité gauche,
//   y compris pour ^ : 2^3^2 = (2^3)^2).
// - Fonction / Inconnu : empilés avec une précédence 0, jamais dépilés par un
//   opérateur ; ils sortent à la fermeture d’une parenthèse ou en fin d’entrée.
//
// NOTE:
// - Une fonction s’applique donc à l’opérande placé juste sous elle en RPN :
//   "sqrt9" => "9 sqrt", mais "sqrt(9)+1" => "9 1 + sqrt".

use super::erreur::{EvalError, EvalResult};
use super::jetons::Tok;

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Nombre(2), Op(+), Nombre(3), Op(*), Nombre(4)]
///   rpn:    [Nombre(2), Nombre(3), Nombre(4), Op(*), Op(+)]
pub fn to_rpn(tokens: &[Tok]) -> EvalResult<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Nombre(_) => out.push(tok),

            Tok::ParG => ops.push(tok),

            Tok::ParD => {
                // dépile jusqu’à '(' (jetée) ; pile vide avant => erreur
                loop {
                    match ops.pop() {
                        Some(Tok::ParG) => break,
                        Some(top) => out.push(top),
                        None => return Err(EvalError::MismatchedParenthesis),
                    }
                }
            }

            Tok::Op(op) => {
                while let Some(Tok::Op(top)) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    out.push(Tok::Op(*top));
                    ops.pop();
                }
                ops.push(tok);
            }

            Tok::Fonction(_) | Tok::Inconnu(_) => ops.push(tok),
        }
    }

    // vide la pile ops (ordre LIFO)
    while let Some(top) = ops.pop() {
        if matches!(top, Tok::ParG) {
            return Err(EvalError::MismatchedParenthesis);
        }
        out.push(top);
    }

    Ok(out)
}
