// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Interactive demo: edits lines on the terminal and echoes each one back.
//!
//! Try `cargo run --bin lined -- --history-file /tmp/lined_history.txt --enable-logging`
//! and `tail -f lined_log.log` in another terminal.

use clap::Parser;
use miette::IntoDiagnostic;
use r3bl_line_editor::{CommonResult, DEFAULT_LOG_FILE_NAME, EscapeSequences,
                       HISTORY_SIZE_MAX, HistoryView, NoopTerminal, PushbackReader,
                       Readline, ReadlineConfig, ReadlineEvent, TerminalPort,
                       TracingConfig, init_tracing};
use std::{io::{self, Write},
          path::PathBuf};

/// Words that `Tab` completes.
const COMMANDS: [&str; 4] = ["clear", "exit", "help", "history"];

#[derive(Debug, Parser)]
#[command(bin_name = "lined")]
#[command(
    about = "🖊️ Edit lines in the terminal, with history and tab completion",
    version
)]
#[command(next_line_help = true)]
#[command(arg_required_else_help = false)]
pub struct CLIArg {
    /// Prompt to show before each line.
    #[arg(long, short = 'p', default_value = "> ")]
    prompt: String,

    /// Load history from this file, and append each committed line to it.
    #[arg(long, short = 'f')]
    history_file: Option<PathBuf>,

    /// Maximum number of history entries kept in memory.
    #[arg(long, short = 's', default_value_t = HISTORY_SIZE_MAX)]
    history_size: usize,

    /// Log to a file.
    #[arg(long, short = 'l')]
    enable_logging: bool,

    /// Log file path, used with `--enable-logging`.
    #[arg(long, default_value = DEFAULT_LOG_FILE_NAME)]
    log_file: String,
}

fn main() -> CommonResult<()> {
    let cli_arg = CLIArg::parse();

    if cli_arg.enable_logging {
        init_tracing(TracingConfig::new_file(Some(cli_arg.log_file.clone())))?;
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let config = ReadlineConfig::default()
        .with_history_capacity(cli_arg.history_size)
        .with_history_file(cli_arg.history_file.clone());

    let mut readline = Readline::try_new_with_writer(
        config,
        PushbackReader::new(io::stdin()),
        io::stdout(),
        create_terminal()?,
    )?;

    let prompt = cli_arg.prompt.clone();
    readline
        .set_prompter(move || prompt.clone())
        .set_autocomplete(complete_command);

    loop {
        let ReadlineEvent::Line(line) = readline.read()? else {
            break;
        };
        let Some(output) = respond(&line, readline.history()) else {
            break;
        };
        let mut stdout = io::stdout();
        stdout.write_all(output.as_bytes()).into_diagnostic()?;
        stdout.flush().into_diagnostic()?;
    }

    tracing::debug!(message = "Stop logging...");
    Ok(())
}

/// What to print for an accepted `line`. `None` means exit.
fn respond(line: &str, history: &HistoryView) -> Option<String> {
    let output = match line.trim() {
        "exit" => return None,
        "help" => format!("commands: {}\n", COMMANDS.join(", ")),
        "history" => history
            .entries()
            .enumerate()
            .map(|(index, entry)| format!("{index:>4}  {entry}\n"))
            .collect(),
        "clear" => EscapeSequences::ansi().clear_screen,
        _ => format!("got: {line}\n"),
    };
    Some(output)
}

/// Raw mode on the terminal when a person is typing, nothing for piped input.
fn create_terminal() -> CommonResult<Box<dyn TerminalPort>> {
    #[cfg(unix)]
    {
        use r3bl_line_editor::{TerminalSettings, is_stdin_interactive};
        if is_stdin_interactive() {
            return Ok(Box::new(TerminalSettings::raw()?));
        }
    }
    Ok(Box::new(NoopTerminal))
}

/// Complete the line to the only command it is a prefix of. Leave it alone if there is
/// no such command, or more than one.
fn complete_command(line: &str) -> String {
    let mut candidates = COMMANDS
        .iter()
        .filter(|command| !line.is_empty() && command.starts_with(line));
    match (candidates.next(), candidates.next()) {
        (Some(command), None) => (*command).to_string(),
        _ => line.to_string(),
    }
}
