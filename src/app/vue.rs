// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Pavé identique à la calculatrice d’origine + champs a, b, c, x, y
// - Messages succès/erreur, 5 derniers calculs, démarche (jetons + RPN)

use eframe::egui;

use calculatrice_rpn::FinDePile;

use super::etat::{AppCalc, HISTORIQUE_VISIBLE};

/// Pavé : chaque touche insère son libellé, sauf "=".
const PAVE: [[&str; 4]; 6] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
    ["(", ")", "^", "sqrt"],
    ["sin", "cos", "tan", "log"],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_entree(ui);
                self.ui_variables(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(6.0);
                if ui
                    .add_sized([ui.available_width(), 30.0], egui::Button::new("Effacer"))
                    .clicked()
                {
                    self.effacer();
                }

                self.ui_messages(ui);

                ui.add_space(8.0);
                ui.separator();
                self.ui_historique(ui);

                ui.add_space(8.0);
                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.affichage)
                .desired_width(ui.available_width())
                .hint_text("Ex: (a+b)*2, sqrt9, 2^3^2")
                .horizontal_align(egui::Align::RIGHT)
                .id_salt("affichage_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton, on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.calculer();
        }
    }

    fn ui_variables(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for i in 0..self.saisies.len() {
                let (nom, mut texte) = self.saisies[i].clone();
                ui.label(format!("{nom} ="));
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut texte)
                        .desired_width(56.0)
                        .id_salt(("variable", i)),
                );
                if resp.changed() {
                    self.set_saisie(&nom, texte);
                }
            }
        });

        let mut tolerante = self.reglages.fin_de_pile == FinDePile::Tolerante;
        let resp = ui
            .checkbox(&mut tolerante, "Fin de pile tolérante")
            .on_hover_text("Accepte \"2 3\" (renvoie 2) au lieu de signaler une expression mal formée");
        if resp.changed() {
            self.set_fin_de_pile(if tolerante {
                FinDePile::Tolerante
            } else {
                FinDePile::Stricte
            });
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in ligne {
                        if ui.add_sized([64.0, 32.0], egui::Button::new(touche)).clicked() {
                            if touche == "=" {
                                self.calculer();
                            } else {
                                self.ajouter(touche);
                            }
                        }
                    }
                    ui.end_row();
                }
                if ui.add_sized([64.0, 32.0], egui::Button::new("DEL")).clicked() {
                    self.retour_arriere();
                }
                ui.end_row();
            });
    }

    fn ui_messages(&mut self, ui: &mut egui::Ui) {
        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
        if !self.succes.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(egui::Color32::from_rgb(40, 140, 60), &self.succes);
        }
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.label("Historique :");
        if self.historique.is_empty() {
            ui.weak("aucun calcul");
        }
        for ligne in self.historique.recents(HISTORIQUE_VISIBLE) {
            ui.monospace(ligne);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                ui.label("Jetons :");
                ui.monospace(&self.demarche.jetons);
                ui.label("RPN :");
                ui.monospace(&self.demarche.rpn);
            });
    }
}
