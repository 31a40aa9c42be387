use crate::model::{Board, EntryKind};

fn kind_str(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Meeting => "meeting",
        EntryKind::Focus => "focus",
        EntryKind::Break => "break",
    }
}

/// Plain-text dump of the whole card, ids included so scripts can
/// address records.
pub fn print_card(board: &Board) {
    println!("tasks:");
    for task in &board.tasks {
        let checkbox = if task.completed { "[x]" } else { "[ ]" };
        println!("  {} {:>3}  {}", checkbox, task.id, task.text);
    }

    println!("schedule:");
    for entry in &board.schedule {
        println!(
            "  {:>3}  {:<6} {}  ({})",
            entry.id,
            entry.time,
            entry.title,
            kind_str(entry.kind)
        );
    }

    println!("links:");
    for link in &board.quick_links {
        println!("  {:>3}  {}  {}", link.id, link.title, link.url);
    }

    println!("focus:");
    println!("  week:    {}", board.week_focus);
    println!("  month:   {}", board.month_focus);
    println!("  quarter: {}", board.quarter_focus);
    println!("quote: {}", board.quote);
}

/// The board as pretty JSON (the same shape as the persisted slot).
pub fn print_board_json(board: &Board) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(board)?);
    Ok(())
}
