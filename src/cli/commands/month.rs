use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::domain::{MonthKey, MonthKeyError};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("show", "Show the selected month", "show", cmd_show),
        CommandEntry::new(
            "month",
            "Select the month to view and edit",
            "month [<0-11|name>]",
            cmd_month,
        ),
    ]
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.refresh_view();
    Ok(())
}

fn cmd_month(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(raw) = args.first() else {
        let selected = context.state.selected_month();
        let listing: Vec<String> = MonthKey::all()
            .map(|month| {
                if month == selected {
                    format!("[{} {}]", month.index(), month.name())
                } else {
                    format!("{} {}", month.index(), month.name())
                }
            })
            .collect();
        io::print_info(listing.join(", "));
        return Ok(());
    };

    let month: MonthKey = raw
        .parse()
        .map_err(|err: MonthKeyError| CommandError::InvalidArguments(err.to_string()))?;
    context.state.set_selected_month(month);
    context.refresh_view();
    Ok(())
}
