// Plain-text rendering of analogies for the terminal

use chrono::Local;

use crate::analogy::GeneratedAnalogy;

/// Render one analogy as a card. `number` is the 1-based position shown to the user.
pub fn render_card(number: usize, analogy: &GeneratedAnalogy) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "[{}] {}  ({})\n",
        number,
        analogy.concept,
        analogy.created_at.with_timezone(&Local).format("%H:%M:%S")
    ));
    out.push_str(&indent(&analogy.description));
    out.push_str("\n\n");
    out.push_str(&format!("  → Analogie technologique : {}\n", analogy.tech_analogy));
    out.push_str(&indent(&analogy.tech_description));
    out.push_str("\n\n");
    out.push_str(&format!(
        "  Analyse sophistiquée : {}\n",
        analogy.sophistication
    ));
    out
}

/// Render the whole list, newest first, with a blank line between cards.
pub fn render_list<'a>(analogies: impl IntoIterator<Item = &'a GeneratedAnalogy>) -> String {
    analogies
        .into_iter()
        .enumerate()
        .map(|(i, a)| render_card(i + 1, a))
        .collect::<Vec<_>>()
        .join("\n")
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
