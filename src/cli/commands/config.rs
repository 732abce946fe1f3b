use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output::{self, section as output_section};
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change preferences",
        "config [show|set <currency|timestamp-format|color|chart-width> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        show_config(context);
        return Ok(());
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(
                    "usage: config set <currency|timestamp-format|color|chart-width> <value>"
                        .into(),
                ));
            }
            let key = args[1];
            let value = args[2..].join(" ");
            let mut updated = context.config.clone();
            updated.set_value(key, &value)?;
            context.apply_config(updated)?;
            io::print_success(format!("Updated `{}`.", key.to_ascii_lowercase()));
            if key.eq_ignore_ascii_case("currency") || key.eq_ignore_ascii_case("default-currency") {
                io::print_hint("Applies when no currency has been chosen; use `currency` to change it now.");
            }
            context.refresh_view();
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{other}`; use `config show` or `config set`"
        ))),
    }
}

fn show_config(context: &ShellContext) {
    let config = &context.config;
    output_section("Configuration");
    io::print_info(format!("  Default currency : {}", config.default_currency));
    io::print_info(format!("  Timestamp format : {}", config.timestamp_format));
    let color = match (config.ui_color_enabled, output::colors_active()) {
        (false, _) => "off",
        (true, true) => "on",
        (true, false) => "on (suppressed by NO_COLOR)",
    };
    io::print_info(format!("  Color            : {color}"));
    io::print_info(format!(
        "  Chart width      : {}",
        config
            .chart_width
            .map(|width| width.to_string())
            .unwrap_or_else(|| "auto".into())
    ));
    io::print_info(format!(
        "  Store directory  : {}",
        config
            .resolve_store_dir(context.config_manager.base_dir())
            .display()
    ));
    io::print_info(format!(
        "  Config file      : {}",
        context.config_manager.path().display()
    ));
}
