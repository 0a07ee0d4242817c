//! Tests scientifiques (campagne) : propriétés du pipeline complet.
//!
//! - précédence et regroupement
//! - associativité gauche (y compris ^)
//! - substitution des variables équivalente au littéral
//! - conservation de la longueur en RPN (nombres et '+')
//! - pureté : aucune dérive d’un appel à l’autre

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::jetons::tokenize;
use super::rpn::to_rpn;
use super::{evaluate, EvalError, Variables};

fn eval_ok(expr: &str, vars: &Variables) -> f64 {
    evaluate(expr, vars).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

/* ------------------------ Précédence ------------------------ */

#[rstest]
#[case("1+2*3", "1+(2*3)")]
#[case("2*3+1", "(2*3)+1")]
#[case("8-2^2", "8-(2^2)")]
#[case("2*3^2", "2*(3^2)")]
#[case("6/3*2", "(6/3)*2")]
#[case("9-3+1", "(9-3)+1")]
#[case("2^2^3", "(2^2)^3")]
fn sci_precedence_equivaut_aux_parentheses(#[case] nu: &str, #[case] groupe: &str) {
    let vars = Variables::default();
    assert_eq!(eval_ok(nu, &vars), eval_ok(groupe, &vars));
}

#[test]
fn sci_puissance_gauche_et_non_droite() {
    let vars = Variables::default();
    assert_eq!(eval_ok("2^3^2", &vars), 64.0);
    assert_eq!(eval_ok("2^(3^2)", &vars), 512.0);
}

/* ------------------------ Variables ------------------------ */

#[test]
fn sci_variable_equivaut_au_litteral() {
    for (a, b) in [(5.0, 7.0), (0.5, 2.0), (10.0, 0.25), (-3.0, 4.0)] {
        let vars = Variables::default().avec("a", a).avec("b", b);
        // pas de littéral négatif sans moins unaire : on compare au calcul direct
        assert_eq!(eval_ok("a*b+a/b", &vars), a * b + a / b, "a={a} b={b}");
    }
}

#[test]
fn sci_variable_inconnue_differee() {
    let vars = Variables::default();
    // z reste sur la pile des opérateurs : RPN "1 + z", le '+' manque d’opérandes d’abord
    assert_eq!(evaluate("z+1", &vars), Err(EvalError::StackUnderflow));
    // RPN "1 z +" : z est atteint avant le '+'
    assert_eq!(
        evaluate("1+z", &vars),
        Err(EvalError::UnknownOperator("z".into()))
    );
    // la même lettre liée par l’appelant devient un nombre
    assert_eq!(evaluate("z+1", &vars.clone().avec("z", 1.0)), Ok(2.0));
}

/* ------------------------ RPN ------------------------ */

#[test]
fn sci_longueur_rpn_conservee() {
    for n in [1usize, 2, 3, 10, 50] {
        let expr = vec!["1.5"; n].join(" + ");
        let t = tokenize(&expr, &Variables::default());
        assert_eq!(t.len(), 2 * n - 1);
        assert_eq!(to_rpn(&t).map(|r| r.len()), Ok(t.len()), "expr={expr:?}");
    }
}

/* ------------------------ Pureté ------------------------ */

#[test]
fn sci_idempotence_et_bindings_intacts() {
    let vars = Variables::default().avec("x", 2.0).avec("y", 3.0);
    let copie = vars.clone();

    let r0 = evaluate("sqrt(x^2+y^2) * cos0 - log1", &vars);
    for _ in 0..20 {
        assert_eq!(evaluate("sqrt(x^2+y^2) * cos0 - log1", &vars), r0);
    }
    // erreurs incluses
    for _ in 0..5 {
        assert_eq!(evaluate("x/(y-3)", &vars), Err(EvalError::DivisionByZero));
    }
    assert_eq!(vars, copie);
}

#[test]
fn sci_appels_paralleles_independants() {
    let handles: Vec<_> = (0..8)
        .map(|k| {
            std::thread::spawn(move || {
                let vars = Variables::default().avec("a", k as f64);
                evaluate("a*a+1", &vars)
            })
        })
        .collect();

    for (k, h) in handles.into_iter().enumerate() {
        let k = k as f64;
        assert_eq!(h.join().unwrap(), Ok(k * k + 1.0));
    }
}
