//! src/app/historique.rs
//!
//! Historique des calculs ("expr = résultat"), conservé entre deux lancements
//! via le stockage eframe.

use serde::{Deserialize, Serialize};

/// Clé de stockage eframe.
pub const CLE_STOCKAGE: &str = "historique_calculs";

/// Garde-fou : on ne stocke pas un historique infini.
const TAILLE_MAX: usize = 500;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Historique {
    lignes: Vec<String>,
}

impl Historique {
    pub fn ajouter(&mut self, expr: &str, resultat: f64) {
        self.lignes.push(format!("{expr} = {resultat}"));
        if self.lignes.len() > TAILLE_MAX {
            let surplus = self.lignes.len() - TAILLE_MAX;
            self.lignes.drain(..surplus);
        }
    }

    /// Les `n` dernières lignes, de la plus ancienne à la plus récente.
    pub fn recents(&self, n: usize) -> &[String] {
        let debut = self.lignes.len().saturating_sub(n);
        &self.lignes[debut..]
    }

    pub fn len(&self) -> usize {
        self.lignes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lignes.is_empty()
    }

    /// Lecture depuis le stockage eframe (absent ou illisible => vide).
    pub fn charger(stockage: Option<&dyn eframe::Storage>) -> Self {
        let h: Self = stockage
            .and_then(|s| eframe::get_value(s, CLE_STOCKAGE))
            .unwrap_or_default();
        log::debug!("historique chargé : {} ligne(s)", h.len());
        h
    }

    pub fn sauver(&self, stockage: &mut dyn eframe::Storage) {
        eframe::set_value(stockage, CLE_STOCKAGE, self);
    }
}
