use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::core::services::{Outcome, TransactionDraft, TransactionService};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record an entry; negative amounts are expenses",
            "add <description> <amount>",
            cmd_add,
        ),
        CommandEntry::new(
            "remove",
            "Remove an entry by its # in the month view",
            "remove <index>",
            cmd_remove,
        ),
    ]
}

/// The last token is the amount, everything before it the description.
/// Active tag selections are attached to the entry.
fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((amount, words)) = args.split_last() else {
        return Err(CommandError::InvalidArguments(
            "usage: add <description> <amount>".into(),
        ));
    };
    let tags = context.state.tags().captured();
    let draft = TransactionDraft::parse(&words.join(" "), amount, tags)?;

    let result = TransactionService::add(&mut context.state, &context.store, draft, &context.clock);
    if let Ok(index) = &result {
        io::print_success(format!("Recorded entry #{index}."));
    }
    context.finish_mutation(result.map(|_| ()))
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let index = match args {
        [raw] => raw.parse::<usize>().map_err(|_| {
            CommandError::InvalidArguments(format!("`{raw}` is not an entry number"))
        })?,
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: remove <index>".into(),
            ))
        }
    };

    let result = TransactionService::remove(
        &mut context.state,
        &context.store,
        index,
        context.confirmer.as_mut(),
    );
    match result {
        Ok(Outcome::Declined) => {
            io::print_info("Entry kept.");
            Ok(())
        }
        Ok(Outcome::Applied(removed)) => {
            io::print_success(format!("Removed `{}`.", removed.description));
            context.finish_mutation(Ok(()))
        }
        Err(err) => context.finish_mutation(Err(err)),
    }
}
