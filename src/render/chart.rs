//! Spend-versus-budget chart with strict single-instance lifecycle.

/// Two-segment chart input. `remaining` never drops below zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutData {
    pub spent: f64,
    pub budget: f64,
    pub remaining: f64,
}

impl DonutData {
    pub fn new(spent: f64, budget: f64) -> Self {
        Self {
            spent,
            budget,
            remaining: (budget - spent).max(0.0),
        }
    }

    pub fn segments(&self) -> [(&'static str, f64); 2] {
        [("Spent", self.spent), ("Remaining", self.remaining)]
    }
}

/// Sink that accepts `(spent, budget)` and shows the chart for it.
pub trait ChartAdapter {
    fn draw(&mut self, spent: f64, budget: Option<f64>);
}

/// Backend able to build and release chart instances.
pub trait ChartSurface {
    type Instance;

    fn create(&mut self, data: &DonutData) -> Self::Instance;
    fn destroy(&mut self, instance: Self::Instance);
}

/// Holds at most one live chart. Every draw destroys the previous instance
/// before anything new is created.
pub struct ChartSlot<S: ChartSurface> {
    surface: S,
    current: Option<S::Instance>,
}

impl<S: ChartSurface> ChartSlot<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&S::Instance> {
        self.current.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            self.surface.destroy(previous);
        }
    }
}

impl<S: ChartSurface> ChartAdapter for ChartSlot<S> {
    /// No chart is drawn without a non-zero budget.
    fn draw(&mut self, spent: f64, budget: Option<f64>) {
        self.clear();
        let Some(budget) = budget.filter(|value| *value != 0.0) else {
            return;
        };
        let data = DonutData::new(spent, budget);
        self.current = Some(self.surface.create(&data));
    }
}

/// Text gauge drawn as `[#####-----]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    pub data: DonutData,
    pub bar: String,
}

/// Terminal surface. Counts instances so callers can verify nothing leaks.
#[derive(Debug, Clone)]
pub struct GaugeSurface {
    width: usize,
    created: usize,
    destroyed: usize,
}

impl GaugeSurface {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            created: 0,
            destroyed: 0,
        }
    }

    pub fn set_width(&mut self, width: usize) {
        self.width = width.max(1);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn created(&self) -> usize {
        self.created
    }

    pub fn live_instances(&self) -> usize {
        self.created - self.destroyed
    }

    fn bar_for(&self, data: &DonutData) -> String {
        let spent = data.spent.max(0.0);
        let total = spent + data.remaining;
        let filled = if total > 0.0 {
            ((spent / total) * self.width as f64).round() as usize
        } else {
            0
        };
        let filled = filled.min(self.width);
        format!("[{}{}]", "#".repeat(filled), "-".repeat(self.width - filled))
    }
}

impl ChartSurface for GaugeSurface {
    type Instance = Gauge;

    fn create(&mut self, data: &DonutData) -> Gauge {
        self.created += 1;
        Gauge {
            data: *data,
            bar: self.bar_for(data),
        }
    }

    fn destroy(&mut self, _instance: Gauge) {
        self.destroyed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_floors_at_zero() {
        assert_eq!(DonutData::new(30.0, 100.0).remaining, 70.0);
        assert_eq!(DonutData::new(130.0, 100.0).remaining, 0.0);
    }

    #[test]
    fn redraws_never_leave_more_than_one_instance() {
        let mut slot = ChartSlot::new(GaugeSurface::new(10));
        for spent in [10.0, 20.0, 30.0, 40.0] {
            slot.draw(spent, Some(100.0));
            assert_eq!(slot.surface().live_instances(), 1);
        }
        assert_eq!(slot.surface().created(), 4);
        assert_eq!(slot.current().map(|gauge| gauge.data.spent), Some(40.0));
    }

    #[test]
    fn missing_or_zero_budget_releases_chart() {
        let mut slot = ChartSlot::new(GaugeSurface::new(10));
        slot.draw(5.0, Some(50.0));
        slot.draw(5.0, None);
        assert!(slot.current().is_none());
        assert_eq!(slot.surface().live_instances(), 0);
        slot.draw(5.0, Some(0.0));
        assert!(slot.current().is_none());
        assert_eq!(slot.surface().created(), 1);
    }

    #[test]
    fn gauge_fills_proportionally() {
        let mut surface = GaugeSurface::new(10);
        let gauge = surface.create(&DonutData::new(30.0, 100.0));
        assert_eq!(gauge.bar, "[###-------]");
        let over = surface.create(&DonutData::new(150.0, 100.0));
        assert_eq!(over.bar, "[##########]");
        let income = surface.create(&DonutData::new(-20.0, 100.0));
        assert_eq!(income.bar, "[----------]");
    }
}
