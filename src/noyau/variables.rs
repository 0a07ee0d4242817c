// src/noyau/variables.rs
//
// Liaisons de variables : possédées par l’appelant, lues (jamais modifiées) par le noyau.

use std::collections::BTreeMap;

/// Emplacements proposés par la calculatrice (tous à 0 au départ).
pub const EMPLACEMENTS: [&str; 5] = ["a", "b", "c", "x", "y"];

/// Nom (minuscules) -> valeur.
#[derive(Clone, Debug, PartialEq)]
pub struct Variables {
    valeurs: BTreeMap<String, f64>,
}

impl Default for Variables {
    fn default() -> Self {
        EMPLACEMENTS.iter().map(|nom| (*nom, 0.0)).collect()
    }
}

impl Variables {
    /// Aucune liaison (même pas a, b, c, x, y).
    pub fn vide() -> Self {
        Self {
            valeurs: BTreeMap::new(),
        }
    }

    pub fn definir(&mut self, nom: impl Into<String>, valeur: f64) {
        self.valeurs.insert(nom.into(), valeur);
    }

    /// Variante “builder” de `definir`.
    pub fn avec(mut self, nom: impl Into<String>, valeur: f64) -> Self {
        self.definir(nom, valeur);
        self
    }

    pub fn valeur(&self, nom: &str) -> Option<f64> {
        self.valeurs.get(nom).copied()
    }

    /// Parcours dans l’ordre des noms.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.valeurs.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.valeurs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valeurs.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Variables {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            valeurs: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Valeur saisie dans un champ de variable.
/// Lit le plus long préfixe numérique ("2abc" => 2, "1e3x" => 1000) ;
/// texte vide ou sans préfixe lisible => 0.
pub fn lire_saisie(texte: &str) -> f64 {
    let t = texte.trim_start();
    let octets = t.as_bytes();
    let chiffres = |mut i: usize| {
        while i < octets.len() && octets[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    // signe, partie entière, partie décimale
    let mut fin = 0;
    if matches!(octets.first(), Some(b'+' | b'-')) {
        fin = 1;
    }
    fin = chiffres(fin);
    if octets.get(fin) == Some(&b'.') {
        fin = chiffres(fin + 1);
    }

    // exposant seulement s’il est suivi d’au moins un chiffre
    if matches!(octets.get(fin), Some(b'e' | b'E')) {
        let mut j = fin + 1;
        if matches!(octets.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let k = chiffres(j);
        if k > j {
            fin = k;
        }
    }

    match t[..fin].parse::<f64>() {
        Ok(v) if !v.is_nan() => v,
        _ => 0.0,
    }
}
