use crate::core::state::LedgerState;
use crate::domain::{EntryKind, MonthKey};

use super::chart::ChartAdapter;
use super::format_amount;

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub index: usize,
    pub description: String,
    pub amount: f64,
    pub kind: EntryKind,
    pub tags: Vec<String>,
    pub timestamp: String,
}

/// Everything displayed for the selected month, derived fresh on each render.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthView {
    pub month: MonthKey,
    pub currency: String,
    pub rows: Vec<TransactionRow>,
    pub total: f64,
    pub budget: Option<f64>,
}

impl MonthView {
    pub fn derive(state: &LedgerState) -> Self {
        let rows = state
            .selected_transactions()
            .iter()
            .enumerate()
            .map(|(index, txn)| TransactionRow {
                index,
                description: txn.description.clone(),
                amount: txn.amount,
                kind: txn.kind(),
                tags: txn.tags.clone(),
                timestamp: txn.timestamp.clone(),
            })
            .collect();
        Self {
            month: state.selected_month(),
            currency: state.currency().to_string(),
            rows,
            total: state.selected_total(),
            budget: state.selected_budget(),
        }
    }

    pub fn total_display(&self) -> String {
        format_amount(self.total, &self.currency)
    }

    pub fn budget_display(&self) -> Option<String> {
        self.budget.map(|value| format_amount(value, &self.currency))
    }

    pub fn amount_display(&self, row: &TransactionRow) -> String {
        format_amount(row.amount, &self.currency)
    }
}

/// Re-derives the month view and pushes `(total, budget)` into the chart.
pub struct RenderView<A: ChartAdapter> {
    chart: A,
}

impl<A: ChartAdapter> RenderView<A> {
    pub fn new(chart: A) -> Self {
        Self { chart }
    }

    pub fn refresh(&mut self, state: &LedgerState) -> MonthView {
        let view = MonthView::derive(state);
        self.chart.draw(view.total, view.budget);
        view
    }

    pub fn chart(&self) -> &A {
        &self.chart
    }

    pub fn chart_mut(&mut self) -> &mut A {
        &mut self.chart
    }
}
