use auricle::presenter::{self, RankMode, RankedCard, WeightLevel};
use auricle::protocol::{Explanation, UseCaseWeight};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

const BAR_CELLS: usize = 20;

// Scales a 0-100 display width down to a fixed-length glyph strip.
fn bar(width: u32) -> String {
    let filled = (width as usize * BAR_CELLS) / 100;
    let filled = filled.min(BAR_CELLS);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

fn level_cell(level: WeightLevel) -> Cell {
    let cell = Cell::new(level.to_string());
    match level {
        WeightLevel::Critical => cell.fg(Color::Red),
        WeightLevel::Important => cell.fg(Color::Yellow),
        WeightLevel::Secondary => cell.fg(Color::Blue),
    }
}

pub fn print_weight_summary(use_cases: &[UseCaseWeight]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Use Case").add_attribute(Attribute::Bold),
        Cell::new("Weight").add_attribute(Attribute::Bold),
    ]);

    let mut total = 0.0;
    for uc in use_cases {
        total += uc.percentage;
        table.add_row(vec![
            Cell::new(uc.name.label()),
            Cell::new(format!("{:.1}%", uc.percentage)).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}%", total))
            .set_alignment(CellAlignment::Right)
            .fg(if (total - 100.0).abs() < f64::EPSILON {
                Color::Green
            } else {
                Color::Yellow
            }),
    ]);
    println!("\n{}", table);
}

pub fn print_ranking_report(cards: &[RankedCard], mode: RankMode) {
    if cards.is_empty() {
        println!("\nNo results available");
        return;
    }

    let perf_color = if mode == RankMode::Performance {
        Color::Cyan
    } else {
        Color::DarkGrey
    };
    let value_color = if mode == RankMode::Value {
        Color::Green
    } else {
        Color::DarkGrey
    };

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Model").add_attribute(Attribute::Bold),
        Cell::new("Price"),
        Cell::new("Performance").fg(perf_color),
        Cell::new(""),
        Cell::new("Value").fg(value_color),
        Cell::new(""),
    ]);

    for i in [0, 2, 3, 5] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for card in cards {
        let price = card
            .price
            .map(|p| format!("{:.0}", p))
            .unwrap_or_else(|| "N/A".to_string());

        let (value_text, value_bar) = match (card.value_score, card.value_width) {
            (Some(v), Some(w)) => (presenter::format_value_score(v), bar(w)),
            _ => ("-".to_string(), String::new()),
        };

        table.add_row(vec![
            Cell::new(format!("#{}", card.rank)).add_attribute(Attribute::Bold),
            Cell::new(&card.model),
            Cell::new(price),
            Cell::new(format!("{}%", card.score_width)).fg(perf_color),
            Cell::new(bar(card.score_width)).fg(perf_color),
            Cell::new(value_text).fg(value_color),
            Cell::new(value_bar).fg(value_color),
        ]);
    }
    println!("\n{}", table);

    for card in cards {
        print_breakdown(card);
    }
}

fn print_breakdown(card: &RankedCard) {
    let Some(entries) = &card.breakdown else {
        return;
    };

    println!("\n#{} {} breakdown:", card.rank, card.model);
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Criterion").add_attribute(Attribute::Bold),
        Cell::new("Level"),
        Cell::new("Share"),
        Cell::new(""),
    ]);

    if let Some(col) = table.column_mut(2) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for entry in entries {
        let mut label = presenter::criterion_label(&entry.criterion);
        if presenter::is_inverted_criterion(&entry.criterion) {
            label.push_str(" (lower is better)");
        }
        table.add_row(vec![
            Cell::new(label),
            level_cell(entry.level),
            Cell::new(format!("{}%", entry.percent)),
            Cell::new(bar(entry.percent)),
        ]);
    }
    println!("{}", table);
}

pub fn print_explanation(explanation: Option<&Explanation>) {
    if let Some(e) = explanation {
        if !e.reasoning.is_empty() {
            println!("\nHow this works:\n{}", e.reasoning);
        }
    }
}
