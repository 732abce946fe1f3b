use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::core::services::TagService;
use crate::domain::{TagBoard, TagGroup, TagGroupError};

const USAGE: &str = "tag [list|select <group> <label>|clear [<group>]|new <group> <label>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "tag",
        "Pick tags attached to new entries (groups: paid, app, loan)",
        USAGE,
        cmd_tag,
    )]
}

fn cmd_tag(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((action, rest)) = args.split_first() else {
        print_board(context.state.tags());
        return Ok(());
    };

    match action.to_ascii_lowercase().as_str() {
        "list" => print_board(context.state.tags()),
        "select" => {
            let (group, label) = group_and_label(rest)?;
            TagService::select(&mut context.state, group, &label)?;
            io::print_success(format!("{}: {} selected.", group.title(), label.trim()));
        }
        "clear" => match rest.first() {
            Some(raw) => {
                let group = parse_group(raw)?;
                match TagService::clear(&mut context.state, group) {
                    Some(previous) => io::print_success(format!(
                        "{}: {} cleared.",
                        group.title(),
                        previous
                    )),
                    None => io::print_info(format!("{}: nothing selected.", group.title())),
                }
            }
            None => {
                TagService::clear_all(&mut context.state);
                io::print_success("All tag selections cleared.");
            }
        },
        "new" => {
            let (group, label) = group_and_label(rest)?;
            if TagService::add_option(&mut context.state, group, &label)? {
                io::print_success(format!("Added `{}` to {}.", label.trim(), group.title()));
            } else {
                io::print_info(format!("{} already has `{}`.", group.title(), label.trim()));
            }
        }
        _ => return Err(CommandError::InvalidArguments(format!("usage: {USAGE}"))),
    }
    Ok(())
}

fn parse_group(raw: &str) -> Result<TagGroup, CommandError> {
    raw.parse()
        .map_err(|err: TagGroupError| CommandError::InvalidArguments(err.to_string()))
}

fn group_and_label(args: &[&str]) -> Result<(TagGroup, String), CommandError> {
    match args.split_first() {
        Some((group, label)) if !label.is_empty() => Ok((parse_group(group)?, label.join(" "))),
        _ => Err(CommandError::InvalidArguments(format!("usage: {USAGE}"))),
    }
}

/// One line per group, the active option in brackets.
pub(crate) fn board_lines(board: &TagBoard) -> Vec<String> {
    TagGroup::ALL
        .iter()
        .map(|group| {
            let selected = board.selected(*group);
            let options: Vec<String> = board
                .options(*group)
                .iter()
                .map(|option| {
                    if Some(option.as_str()) == selected {
                        format!("[{option}]")
                    } else {
                        option.clone()
                    }
                })
                .collect();
            format!("{:<12} {}", format!("{}:", group.title()), options.join(" "))
        })
        .collect()
}

fn print_board(board: &TagBoard) {
    for line in board_lines(board) {
        io::print_info(line);
    }
}
