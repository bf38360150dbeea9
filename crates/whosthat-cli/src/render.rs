//! Plain-text rendering of quiz state.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use whosthat_core::model::Creature;
use whosthat_core::quiz::Quiz;

/// The open round: silhouette reference and numbered choices.
pub fn round(quiz: &Quiz) -> String {
    let mut out = format!("\n=== Round {} ===\n", quiz.rounds_played());
    out.push_str(&format!(
        "Who's that? [silhouette: {}]\n",
        quiz.image().unwrap_or("(none)")
    ));
    for (i, creature) in quiz.displayed().iter().enumerate() {
        out.push_str(&format!("  {}) {}\n", i + 1, creature.name));
    }
    out
}

/// Feedback after an answer, with the revealed image and running score.
pub fn verdict(quiz: &Quiz) -> String {
    let mut out = format!("{}\n", quiz.feedback());
    if let Some(image) = quiz.image() {
        out.push_str(&format!("[image: {image}]\n"));
    }
    out.push_str(&format!("Score: {}\n", quiz.score()));
    out
}

/// All creatures as a table.
pub fn creature_table(creatures: &[Creature]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Name", "Silhouette", "Image"]);

    for c in creatures {
        table.add_row(vec![
            c.id.clone().unwrap_or_else(|| "-".into()),
            c.name.clone(),
            c.silhouette.clone().unwrap_or_else(|| "-".into()),
            c.image.clone().unwrap_or_else(|| "-".into()),
        ]);
    }
    table
}
