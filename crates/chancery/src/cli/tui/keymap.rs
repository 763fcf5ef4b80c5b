//! Action hints per shell state, rendered in the bottom bar and the help
//! overlay.

use super::app::{App, ShellFocus};
use super::components::action_bar::ActionHint;
use crate::controller::ViewMode;

fn rail_actions() -> Vec<ActionHint> {
    vec![
        ActionHint::new("Up/Down", "Naviguer"),
        ActionHint::new("Enter", "Ouvrir"),
        ActionHint::new("Tab", "Tableau"),
        ActionHint::new("q", "Quitter"),
    ]
}

fn list_actions(app: &App) -> Vec<ActionHint> {
    let mut hints = vec![
        ActionHint::new("Up/Down", "Sélection"),
        ActionHint::new("Left/Right", "Colonne"),
        ActionHint::new("s", "Trier"),
        ActionHint::new("n", "Nouveau"),
        ActionHint::new("e", "Éditer"),
        ActionHint::new("d", "Supprimer"),
        ActionHint::new("f", "Filtrer"),
        ActionHint::new("x", "Réinitialiser"),
    ];
    if app.controller().config().key == "assets" {
        hints.push(ActionHint::new("v", "Inventaire"));
    }
    hints.push(ActionHint::new("Tab", "Menu"));
    hints.push(ActionHint::new("?", "Aide"));
    hints.push(ActionHint::new("q", "Quitter"));
    hints
}

fn filter_actions() -> Vec<ActionHint> {
    vec![
        ActionHint::new("Up/Down", "Filtre"),
        ActionHint::new("Left/Right", "Valeur"),
        ActionHint::new("Enter", "Appliquer"),
        ActionHint::new("Esc", "Fermer"),
    ]
}

fn confirm_actions() -> Vec<ActionHint> {
    vec![
        ActionHint::new("y", "Confirmer"),
        ActionHint::new("n/Esc", "Annuler"),
    ]
}

fn form_actions(app: &App) -> Vec<ActionHint> {
    if app.editing {
        return vec![
            ActionHint::new("Enter", "Valider"),
            ActionHint::new("Esc", "Abandonner la saisie"),
        ];
    }
    vec![
        ActionHint::new("Up/Down", "Champ"),
        ActionHint::new("Enter", "Saisir/Basculer"),
        ActionHint::new("Left/Right", "Options"),
        ActionHint::new("Ctrl+S", "Enregistrer"),
        ActionHint::new("Esc", "Annuler"),
    ]
}

impl App {
    pub fn effective_actions(&self) -> Vec<ActionHint> {
        match self.controller().mode() {
            ViewMode::Form => form_actions(self),
            ViewMode::List => {
                if self.confirm_delete {
                    confirm_actions()
                } else if self.filter_mode {
                    filter_actions()
                } else if self.focus == ShellFocus::Rail {
                    rail_actions()
                } else {
                    list_actions(self)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn list_mode_offers_crud_actions() {
        let app = App::new(AppConfig::default());
        let hints = app.effective_actions();
        let keys: Vec<&str> = hints.iter().map(|hint| hint.key).collect();
        assert!(keys.contains(&"n"));
        assert!(keys.contains(&"d"));
        assert!(keys.contains(&"f"));
    }

    #[test]
    fn inventory_hint_only_shows_on_the_asset_register() {
        let mut app = App::new(AppConfig::default());
        let has_inventory = |app: &App| {
            app.effective_actions()
                .iter()
                .any(|hint| hint.label == "Inventaire")
        };
        assert!(!has_inventory(&app));
        let assets = app
            .nav
            .iter()
            .position(|entry| entry.key == "assets")
            .unwrap();
        app.activate(assets);
        assert!(has_inventory(&app));
    }
}
