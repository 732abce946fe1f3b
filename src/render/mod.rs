//! Read-only presentation of the ledger state.

pub mod chart;
pub mod view;

pub use chart::{ChartAdapter, ChartSlot, ChartSurface, DonutData, Gauge, GaugeSurface};
pub use view::{MonthView, RenderView, TransactionRow};

/// Formats a stored amount for display, rounding to cents only here.
pub fn format_amount(value: f64, currency: &str) -> String {
    let cents = (value * 100.0).round();
    // avoid "-0.00" for tiny negative residues
    let rounded = if cents == 0.0 { 0.0 } else { cents / 100.0 };
    format!("{currency}{rounded:.2}")
}

#[cfg(test)]
mod tests {
    use super::format_amount;

    #[test]
    fn rounds_only_for_display() {
        assert_eq!(format_amount(-4.5, "₹"), "₹-4.50");
        assert_eq!(format_amount(0.1 + 0.2, "$"), "$0.30");
        assert_eq!(format_amount(-0.001, "$"), "$0.00");
        assert_eq!(format_amount(1234.567, "€"), "€1234.57");
    }
}
