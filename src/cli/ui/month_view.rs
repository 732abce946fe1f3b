use colored::Colorize;

use crate::cli::output::section as output_section;
use crate::domain::EntryKind;
use crate::render::{format_amount, Gauge, MonthView};

use super::table::{Table, TableColumn};

const DESCRIPTION_WIDTH: usize = 32;

/// Prints the month table, totals and, when a budget is set, the gauge.
pub fn print(view: &MonthView, gauge: Option<&Gauge>) {
    output_section(view.month.name());
    for line in render_lines(view, gauge) {
        println!("{line}");
    }
}

/// Lines below the section header. Entry rows are tinted by kind.
pub fn render_lines(view: &MonthView, gauge: Option<&Gauge>) -> Vec<String> {
    let mut lines = Vec::new();
    if view.rows.is_empty() {
        lines.push("No transactions recorded for this month.".dimmed().to_string());
    } else {
        let mut table = Table::new(vec![
            TableColumn::right("#"),
            TableColumn::left("Description").capped(DESCRIPTION_WIDTH),
            TableColumn::right("Amount"),
            TableColumn::left("Tags"),
            TableColumn::left("Time"),
        ]);
        for row in &view.rows {
            table.push_row(vec![
                row.index.to_string(),
                row.description.clone(),
                view.amount_display(row),
                row.tags.join(", "),
                row.timestamp.clone(),
            ]);
        }
        let widths = table.widths();
        lines.push(table.header_line(&widths).bold().to_string());
        lines.push(table.rule(&widths));
        for (row, line) in view.rows.iter().zip(table.body_lines(&widths)) {
            lines.push(match row.kind {
                EntryKind::Expense => line.red().to_string(),
                EntryKind::Income => line.green().to_string(),
            });
        }
    }

    lines.push(String::new());
    lines.push(format!("Total: {}", view.total_display()));
    lines.push(format!(
        "Budget: {}",
        view.budget_display()
            .unwrap_or_else(|| "not set".to_string())
    ));
    if let Some(gauge) = gauge {
        let legend: Vec<String> = gauge
            .data
            .segments()
            .iter()
            .map(|(label, value)| format!("{label} {}", format_amount(*value, &view.currency)))
            .collect();
        lines.push(legend.join(" | "));
        lines.push(gauge.bar.clone());
    }
    lines
}
