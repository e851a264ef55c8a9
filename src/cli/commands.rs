//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use itertools::Itertools;
use tracing::{debug, info, instrument};

use crate::application::format::encode_board;
use crate::application::script::replay;
use crate::application::Session;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, local_config_path, OutputFormat, Settings};
use crate::domain::{Board, Entry, SearchDepth};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;
use crate::tree_traits::ToTermTree;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
        Some(Commands::Seed) => print_board(&Board::seed(), OutputFormat::Json),
        Some(Commands::Config { command }) => cmd_config(command),
        Some(command) => Runner::new(cli)?.run(command),
        None => Runner::new(cli)?.run(&Commands::Show),
    }
}

fn cmd_completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

fn cwd() -> CliResult<std::path::PathBuf> {
    std::env::current_dir().map_err(|e| InfraError::io("resolve current directory", e).into())
}

fn load_settings() -> CliResult<Settings> {
    let cwd = cwd()?;
    Ok(Settings::load(Some(&cwd))?)
}

fn cmd_config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings()?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            output::header("Config paths");
            let mut paths = Vec::new();
            if let Some(global) = global_config_path() {
                paths.push(global);
            }
            paths.push(local_config_path(&cwd()?));
            for path in paths {
                if path.exists() {
                    output::present(&path.display());
                } else {
                    output::missing(&path.display());
                }
            }
        }
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

fn print_board(board: &Board, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Tree => output::info(&board.to_term_tree()),
        OutputFormat::Json => output::info(&encode_board(board)?),
    }
    Ok(())
}

/// Applies `--board`, `--shallow` and `--json` on top of loaded settings.
pub fn apply_cli_overrides(cli: &Cli, mut settings: Settings) -> Settings {
    if cli.board.is_some() {
        settings.board_file = cli.board.clone();
    }
    if cli.shallow {
        settings.search_depth = SearchDepth::Shallow;
    }
    if cli.json {
        settings.output = OutputFormat::Json;
    }
    settings
}

/// Board commands: settings resolved, session opened.
struct Runner {
    format: OutputFormat,
    container: ServiceContainer,
    session: Session,
}

impl Runner {
    fn new(cli: &Cli) -> CliResult<Self> {
        let settings = apply_cli_overrides(cli, load_settings()?);
        debug!("effective settings: {:?}", settings);
        Self::with_container(ServiceContainer::new(settings))
    }

    fn with_container(container: ServiceContainer) -> CliResult<Self> {
        let session = container.boards.open_session(
            container.settings.board_file.as_deref(),
            container.settings.search_depth,
        )?;
        Ok(Self {
            format: container.settings.output,
            container,
            session,
        })
    }

    #[instrument(level = "debug", skip(self))]
    fn run(mut self, command: &Commands) -> CliResult<()> {
        match command {
            Commands::Parent { group } => {
                output::info(self.parent_of(group)?);
                return Ok(());
            }
            Commands::Entries { parent, group } => {
                for entry in self.entries_of(parent, group)? {
                    match entry {
                        Entry::Leaf(leaf) => output::info(leaf),
                        Entry::Group(nested) => output::group(nested.name()),
                    }
                }
                return Ok(());
            }
            _ => {}
        }

        if let Some(warning) = self.apply(command)? {
            output::warning(&warning);
        }
        print_board(self.session.board(), self.format)
    }

    /// Runs a board-changing command. Returns a warning when nothing could
    /// be applied because a group was not found.
    fn apply(&mut self, command: &Commands) -> CliResult<Option<String>> {
        match command {
            Commands::Show => Ok(None),
            Commands::MoveEntry { group, from, to } => {
                if self.session.move_entry(group, *from, *to)? {
                    Ok(None)
                } else {
                    Ok(self.missing_group_warning(group))
                }
            }
            Commands::MoveColumn { from, to } => {
                self.session.move_column(*from, *to)?;
                Ok(None)
            }
            Commands::Replace { parent, group, rows } => {
                let entries = rows.iter().map(|row| Entry::leaf(row.as_str())).collect();
                if !self.session.replace_entries(parent, group, entries)
                    && self.session.entries(parent, group).is_none()
                {
                    return Ok(Some(format!(
                        "no group '{}' inside '{}', board unchanged",
                        group, parent
                    )));
                }
                Ok(None)
            }
            Commands::Replay { script } => {
                self.cmd_replay(script)?;
                Ok(None)
            }
            Commands::Parent { .. }
            | Commands::Entries { .. }
            | Commands::Seed
            | Commands::Config { .. }
            | Commands::Completion { .. } => Err(CliError::Usage(
                "command does not change the board".to_string(),
            )),
        }
    }

    fn parent_of(&self, group: &str) -> CliResult<&str> {
        self.session.find_parent_group(group).ok_or_else(|| {
            CliError::NotFound(format!("no parent group found for '{}'", group))
        })
    }

    fn entries_of(&self, parent: &str, group: &str) -> CliResult<&[Entry]> {
        self.session
            .board()
            .require_group(parent, self.session.depth())?;
        self.session.entries(parent, group).ok_or_else(|| {
            CliError::NotFound(format!("no group '{}' inside '{}'", group, parent))
        })
    }

    fn cmd_replay(&mut self, script: &Path) -> CliResult<()> {
        let operations = self.container.boards.load_script(script)?;
        let changed = replay(&mut self.session, &operations)?;
        info!(
            "replayed {} operations, {} changed the board (revision {})",
            operations.len(),
            changed,
            self.session.revision()
        );
        Ok(())
    }

    fn missing_group_warning(&self, group: &str) -> Option<String> {
        let board = self.session.board();
        let err = board.require_group(group, self.session.depth()).err()?;
        Some(format!(
            "{}, board unchanged (columns: {})",
            err,
            board.column_names().join(", ")
        ))
    }
}
