use std::{cell::Cell, rc::Rc};

use dialoguer::theme::ColorfulTheme;
use strsim::damerau_levenshtein;

use crate::{
    config::{Config, ConfigManager},
    core::{services::SummaryService, TransactionView},
    currency::{format_currency_value, format_date},
    errors::LedgerError,
    ledger::{Ledger, TransactionId},
};

use super::commands;
use super::core::{CliError, CommandError, CommandResult, LoopControl};
use super::io as cli_io;
use super::output::{self, OutputPreferences};
use super::registry::{CommandEntry, CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub ledger: Ledger,
    pub view: TransactionView,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub theme: ColorfulTheme,
    pending_changes: Rc<Cell<usize>>,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let manager = ConfigManager::from_env()?;
        Self::with_manager(mode, manager)
    }

    pub fn with_manager(mode: CliMode, config_manager: ConfigManager) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config = config_manager.load()?;
        output::set_preferences(OutputPreferences {
            color: config.color,
        });

        let pending_changes = Rc::new(Cell::new(0));
        let mut ledger = Ledger::new();
        let counter = Rc::clone(&pending_changes);
        ledger.subscribe(move |event| {
            tracing::trace!(id = %event.id(), revision = event.revision(), "ledger event");
            counter.set(counter.get() + 1);
        });

        Ok(Self {
            mode,
            registry,
            ledger,
            view: TransactionView::with_sort(config.default_sort, config.default_direction),
            config,
            config_manager,
            theme: ColorfulTheme::default(),
            pending_changes,
            last_command: None,
            running: true,
        })
    }

    pub(crate) fn can_prompt(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    pub(crate) fn prompt(&self) -> String {
        format!("budget [{}]> ", self.ledger.len())
    }

    pub(crate) fn format_amount(&self, amount: f64) -> String {
        format_currency_value(amount, &self.config.currency_symbol)
    }

    pub(crate) fn format_date(&self, date: chrono::NaiveDate) -> String {
        format_date(date, &self.config.date_format)
    }

    /// Saves the in-memory config and applies the display preferences.
    pub(crate) fn persist_config(&mut self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        output::set_preferences(OutputPreferences {
            color: self.config.color,
        });
        Ok(())
    }

    pub(crate) fn transaction_id_from_arg(
        &self,
        arg: Option<&&str>,
        usage: &str,
    ) -> Result<TransactionId, CommandError> {
        let raw = arg.ok_or_else(|| CommandError::usage(usage))?;
        raw.parse::<TransactionId>().map_err(|_| {
            CommandError::InvalidArguments(format!("`{}` is not a transaction id", raw))
        })
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            let outcome = handler(self, args);
            self.after_command();
            match outcome {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_ascii_lowercase();
        let best = self
            .registry
            .names()
            .into_iter()
            .map(|name| (damerau_levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", true).or(Ok(true))
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Ledger(LedgerError::Validation { field, reason }) => {
                cli_io::print_error(format!("Missing or invalid input: {}: {}", field, reason));
            }
            CommandError::Ledger(err @ LedgerError::Format(_)) => {
                cli_io::print_error(format!("Invalid input: {}", err));
            }
            CommandError::Ledger(err @ LedgerError::NotFound(_)) => {
                cli_io::print_error(err);
                output::hint("Use `list` to see transaction ids.");
            }
            other => cli_io::print_error(other),
        }
        Ok(())
    }

    /// Runs once per dispatched command. Prints the balance line and the
    /// overspend warning when the ledger changed.
    pub(crate) fn after_command(&mut self) {
        let changes = self.pending_changes.replace(0);
        if changes == 0 {
            return;
        }
        tracing::debug!(changes, revision = self.ledger.revision(), "ledger changed");

        let summary = SummaryService::current_totals(&self.ledger);
        if self.config.auto_summary {
            cli_io::print_info(format!(
                "{} transaction(s) | Income {} | Expenses {} | Net {}",
                summary.transaction_count,
                self.format_amount(summary.total_income),
                self.format_amount(summary.total_expense),
                self.format_amount(summary.net_balance),
            ));
        }
        if summary.is_overspending() && self.config.warn_on_overspend {
            cli_io::print_warning("Your net balance is negative. You may be overspending.");
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = crate::cli::shell::parse_command_line(line)
            .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
        let Some((first, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        self.dispatch(&first.to_lowercase(), first, &args)
    }

    #[cfg(test)]
    pub(crate) fn pending_changes(&self) -> usize {
        self.pending_changes.get()
    }
}
