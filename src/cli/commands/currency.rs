use crate::cli::core::CommandResult;
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::core::services::CurrencyService;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "currency",
        "Show or change the currency symbol",
        "currency [<symbol>]",
        cmd_currency,
    )]
}

fn cmd_currency(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        io::print_info(format!("Currency: {}", context.state.currency()));
        return Ok(());
    }

    let symbol = args.join(" ");
    let result = CurrencyService::set(&mut context.state, &context.store, &symbol);
    if result.is_ok() {
        io::print_success(format!("Currency set to {}.", context.state.currency()));
    }
    context.finish_mutation(result)
}
