//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (affichage, variables, messages,
//! historique, démarche) et offrir les actions des boutons.
//!
//! Contrats :
//! - Le noyau ne garde rien : variables et historique vivent ici et lui sont
//!   passés à chaque appel.
//! - Actions déterministes, sans effet de bord caché (hors journal).

use calculatrice_rpn::noyau::jetons::format_tokens;
use calculatrice_rpn::noyau::variables::{lire_saisie, EMPLACEMENTS};
use calculatrice_rpn::{eval_expression, FinDePile, Reglages, Variables};

use super::historique::Historique;

/// Nombre de lignes d’historique affichées.
pub const HISTORIQUE_VISIBLE: usize = 5;

/// Mots retirés d’un bloc par la touche DEL.
const MOTS_FONCTIONS: [&str; 5] = ["sqrt", "sin", "cos", "tan", "log"];

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub affichage: String,

    // --- variables : texte saisi + valeur lue ---
    pub saisies: Vec<(String, String)>,
    pub variables: Variables,

    // --- sorties ---
    pub erreur: String,
    pub succes: String,
    pub demarche: Demarche,
    pub historique: Historique,

    // --- paramètres ---
    pub reglages: Reglages,

    // --- UX ---
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            affichage: String::new(),
            saisies: EMPLACEMENTS
                .iter()
                .map(|nom| (nom.to_string(), "0".to_string()))
                .collect(),
            variables: Variables::default(),
            erreur: String::new(),
            succes: String::new(),
            demarche: Demarche::default(),
            historique: Historique::default(),
            reglages: Reglages::default(),
            focus_entree: true,
        }
    }
}

impl AppCalc {
    pub fn avec_historique(historique: Historique) -> Self {
        Self {
            historique,
            ..Self::default()
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    pub fn ajouter(&mut self, texte: &str) {
        self.affichage.push_str(texte);
        self.focus_entree = true;
    }

    /// Effacer : affichage + messages.
    pub fn effacer(&mut self) {
        self.affichage.clear();
        self.erreur.clear();
        self.succes.clear();
        self.focus_entree = true;
    }

    /// DEL : retire un nom de fonction d’un bloc, sinon un caractère.
    pub fn retour_arriere(&mut self) {
        while self.affichage.ends_with(' ') {
            self.affichage.pop();
        }

        for mot in MOTS_FONCTIONS {
            if self.affichage.ends_with(mot) {
                let reste = self.affichage.len() - mot.len();
                self.affichage.truncate(reste);
                self.focus_entree = true;
                return;
            }
        }

        self.affichage.pop();
        self.focus_entree = true;
    }

    /// Champ de variable modifié : texte invalide => 0.
    pub fn set_saisie(&mut self, nom: &str, texte: String) {
        self.variables.definir(nom, lire_saisie(&texte));
        if let Some((_, t)) = self.saisies.iter_mut().find(|(n, _)| n == nom) {
            *t = texte;
        }
    }

    pub fn set_fin_de_pile(&mut self, fin: FinDePile) {
        self.reglages.fin_de_pile = fin;
    }

    /// "=" : évalue l’affichage avec les variables courantes.
    ///
    /// Succès : l’affichage devient le résultat, une ligne part dans l’historique.
    /// Échec : l’affichage est conservé, seul le message d’erreur change.
    pub fn calculer(&mut self) {
        let expr = self.affichage.trim().to_string();

        match eval_expression(&expr, &self.variables, &self.reglages) {
            Ok(ev) => {
                log::info!("{expr} = {}", ev.valeur);
                self.historique.ajouter(&expr, ev.valeur);
                self.affichage = ev.valeur.to_string();
                self.demarche = Demarche {
                    jetons: format_tokens(&ev.jetons),
                    rpn: format_tokens(&ev.rpn),
                };
                self.succes = "Calcul réussi !".into();
                self.erreur.clear();
            }
            Err(e) => {
                log::warn!("échec de l’évaluation de {expr:?} : {e}");
                self.erreur = format!("Erreur de calcul : {e}");
                self.succes.clear();
                self.demarche = Demarche::default();
            }
        }

        self.focus_entree = true;
    }
}
