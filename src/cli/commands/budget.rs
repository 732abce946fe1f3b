use crate::cli::core::CommandResult;
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::core::services::{BudgetService, Outcome};
use crate::render::format_amount;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "budget",
        "Show or set the selected month's budget",
        "budget [<value>]",
        cmd_budget,
    )]
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let month = context.state.selected_month();
    let Some(raw) = args.first() else {
        match context.state.selected_budget() {
            Some(value) => io::print_info(format!(
                "Budget for {}: {}",
                month.name(),
                format_amount(value, context.state.currency())
            )),
            None => io::print_info(format!("No budget set for {}.", month.name())),
        }
        return Ok(());
    };

    let result = BudgetService::set(
        &mut context.state,
        &context.store,
        raw,
        context.confirmer.as_mut(),
    );
    match result {
        Ok(Outcome::Declined) => {
            io::print_info("Budget unchanged.");
            Ok(())
        }
        Ok(Outcome::Applied(change)) => {
            io::print_success(format!(
                "Budget for {} set to {}.",
                month.name(),
                format_amount(change.current, context.state.currency())
            ));
            context.finish_mutation(Ok(()))
        }
        Err(err) => context.finish_mutation(Err(err)),
    }
}
