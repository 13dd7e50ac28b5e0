use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::config::Config;
use crate::core::SortOrder;

const CONFIG_USAGE: &str = "config [show|set <key> <value>|reset|path]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change preferences",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        return show_config(context);
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(format!(
                    "usage: config set <{}> <value>",
                    Config::KEYS.join("|")
                )));
            }
            let key = args[1];
            let value = args[2..].join(" ");
            set_config_value(context, key, value.trim())
        }
        "reset" => {
            context.config = Config::default();
            context.persist_config()?;
            apply_default_sort(context);
            io::print_success("Preferences reset to defaults.");
            Ok(())
        }
        "path" => {
            io::print_info(context.config_manager.config_path().display());
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config subcommand `{}`",
            other
        ))),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    output::section("Configuration");
    output::key_values(&context.config.entries());
    Ok(())
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    updated.set(key, value)?;
    let sort_changed = updated.default_sort != context.config.default_sort
        || updated.default_direction != context.config.default_direction;

    context.config = updated;
    context.persist_config()?;
    if sort_changed {
        apply_default_sort(context);
    }

    tracing::info!(key = key, "preference updated");
    io::print_success(format!("Set {} = {}", key.trim().to_ascii_lowercase(), value));
    Ok(())
}

/// Re-sorts the live view with the configured default order.
fn apply_default_sort(context: &mut ShellContext) {
    context.view.order =
        SortOrder::new(context.config.default_sort, context.config.default_direction);
}
