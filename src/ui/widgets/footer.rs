use ratatui::{layout::Rect, widgets::Paragraph, Frame};

use crate::app::settings::keybinds::label;
use crate::app::{App, Focus};

/// Key hints for the focused widget, most specific first.
pub fn hints(app: &App) -> String {
    let mut parts: Vec<String> = Vec::new();
    match app.focus {
        Focus::Comment => parts.push("saisir le commentaire".to_string()),
        Focus::Rating => parts.push(format!("{}/{} ou 1-5:note  0:effacer", label("left"), label("right"))),
        Focus::Accept => parts.push(format!("{}:cocher", label("toggle"))),
        Focus::Submit => parts.push(format!("{}:ajouter", label("enter"))),
        Focus::Comments => parts.push(format!(
            "{}/{}:parcourir  {}:supprimer  {}:haut",
            label("up"),
            label("down"),
            label("delete"),
            label("top")
        )),
    }
    parts.push(format!("{}:champ suivant", label("next_field")));
    parts.push(format!("{}:envoyer", label("submit")));
    parts.push(format!("{}:thème", label("toggle_theme")));
    parts.push(format!("{}:aide", label("help")));
    if app.focus.is_text_entry() {
        parts.push("Ctrl-C:quitter".to_string());
    } else {
        parts.push(format!("{}:quitter", label("quit")));
    }
    parts.join("  ")
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = crate::ui::colors::current();
    f.render_widget(Paragraph::new(format!(" {}", hints(app))).style(colors.footer_style), area);
}
