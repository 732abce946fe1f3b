//! Runtime state owned by one shell session.

use std::env;

use crate::config::{Config, ConfigManager, MAX_CHART_WIDTH, MIN_CHART_WIDTH};
use crate::core::clock::SystemClock;
use crate::core::confirm::{Confirmer, PresetConfirmer};
use crate::core::errors::BudgetError;
use crate::core::services::ServiceError;
use crate::core::state::LedgerState;
use crate::domain::MonthKey;
use crate::render::{ChartSlot, GaugeSurface, RenderView};
use crate::storage::{JsonFileStore, PersistentStore};

use super::commands;
use super::core::{CliError, CommandResult};
use super::io::{self as cli_io, DialogConfirmer};
use super::output::{self, OutputPreferences};
use super::registry::{CommandEntry, CommandRegistry};
use super::ui::month_view;

pub const SCRIPT_ENV: &str = "POCKET_LEDGER_CLI_SCRIPT";
pub const CONFIRM_ENV: &str = "POCKET_LEDGER_CONFIRM";

const FALLBACK_CHART_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub state: LedgerState,
    pub store: PersistentStore,
    pub confirmer: Box<dyn Confirmer>,
    pub clock: SystemClock,
    pub view: RenderView<ChartSlot<GaugeSurface>>,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub running: bool,
}

impl ShellContext {
    /// Opens the user's data directory and restores the persisted ledger.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let confirmer: Box<dyn Confirmer> = match mode {
            CliMode::Interactive => Box::new(DialogConfirmer::new()),
            CliMode::Script => Box::new(PresetConfirmer {
                answer: cli_io::scripted_answer(env::var(CONFIRM_ENV).ok().as_deref()),
            }),
        };
        Self::with_parts(mode, config_manager, confirmer)
    }

    pub fn with_parts(
        mode: CliMode,
        config_manager: ConfigManager,
        confirmer: Box<dyn Confirmer>,
    ) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled,
        });
        let store_dir = config.resolve_store_dir(config_manager.base_dir());
        let store = PersistentStore::new(Box::new(JsonFileStore::new(store_dir)?));
        let state = LedgerState::load(&store, MonthKey::current(), &config.default_currency)?;

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        Ok(Self {
            mode,
            registry,
            state,
            store,
            confirmer,
            clock: SystemClock::new(config.timestamp_format.clone()),
            view: RenderView::new(ChartSlot::new(GaugeSurface::new(chart_width(&config)))),
            config,
            config_manager,
            running: true,
        })
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        format!("{}> ", self.state.selected_month().name().to_lowercase())
    }

    /// Re-derives the month view, redraws the chart and prints both.
    pub fn refresh_view(&mut self) {
        let view = self.view.refresh(&self.state);
        month_view::print(&view, self.view.chart().current());
    }

    /// Reports an applied-but-unsaved change and re-renders; any other
    /// service error is returned untouched.
    pub fn finish_mutation(&mut self, result: Result<(), ServiceError>) -> CommandResult {
        if let Err(err) = result {
            self.absorb_unpersisted(err)?;
        }
        self.refresh_view();
        Ok(())
    }

    /// Saves `config` and, once it is on disk, makes it the live session's.
    pub fn apply_config(&mut self, config: Config) -> Result<(), BudgetError> {
        self.config_manager.save(&config)?;
        self.config = config;
        output::set_preferences(OutputPreferences {
            color_enabled: self.config.ui_color_enabled,
        });
        self.clock = SystemClock::new(self.config.timestamp_format.clone());
        let width = chart_width(&self.config);
        self.view.chart_mut().surface_mut().set_width(width);
        Ok(())
    }
}

/// Configured width, else half the terminal, clamped to a readable range.
fn chart_width(config: &Config) -> usize {
    if let Some(width) = config.chart_width {
        return width.clamp(MIN_CHART_WIDTH, MAX_CHART_WIDTH);
    }
    crossterm::terminal::size()
        .map(|(columns, _)| (columns as usize / 2).clamp(MIN_CHART_WIDTH, MAX_CHART_WIDTH))
        .unwrap_or(FALLBACK_CHART_WIDTH)
}
