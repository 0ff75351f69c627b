// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AnsiDisplay, ByteSource, CompletionHook, Dispatcher, DisplayPort, EditCommand,
            HistoryFile, HistoryView, LineBuffer, LineSession, PromptHook, ReadlineConfig,
            ReadlineError, TerminalModeGuard, TerminalPort};
use std::io::Write;

/// What one call to [`Readline::read`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadlineEvent {
    /// The user pressed Enter (or the input ended after some text was typed).
    Line(String),
    /// `Ctrl+D` on an empty line, or the input ended on an empty line.
    Eof,
}

/// Reads one edited line at a time from `I`, drawing on `D`, with `T` switched into
/// raw mode while reading.
///
/// # Lifecycle of a [`Self::read`] call
///
/// 1. [`TerminalPort::apply`] via a [`TerminalModeGuard`].
/// 2. Empty the line buffer, move to column 0, write the prompt from the prompt hook.
/// 3. Dispatch keypresses to [`EditCommand`]s until one ends the line, or the input
///    ends.
/// 4. Release the guard, which calls [`TerminalPort::reset`]. On an error path the
///    guard resets the terminal when it is dropped instead.
#[allow(missing_debug_implementations)]
pub struct Readline<I, D, T> {
    input: I,
    display: D,
    terminal: T,
    dispatcher: Dispatcher<EditCommand>,
    session: LineSession,
    prompt_hook: Option<PromptHook>,
    completion_hook: Option<CompletionHook>,
}

impl<I, W, T> Readline<I, AnsiDisplay<W>, T>
where
    I: ByteSource,
    W: Write,
    T: TerminalPort,
{
    /// Like [`Readline::try_new`], drawing on `writer` with the config's
    /// [`crate::EscapeSequences`].
    ///
    /// # Errors
    ///
    /// See [`Readline::try_new`].
    pub fn try_new_with_writer(
        config: ReadlineConfig,
        input: I,
        writer: W,
        terminal: T,
    ) -> Result<Self, ReadlineError> {
        let display = AnsiDisplay::with_sequences(writer, config.escape_sequences.clone());
        Self::try_new(config, input, display, terminal)
    }
}

impl<I, D, T> Readline<I, D, T>
where
    I: ByteSource,
    D: DisplayPort,
    T: TerminalPort,
{
    /// Wire up the ports, and load the history file if the config names one.
    ///
    /// # Errors
    ///
    /// - [`ReadlineError::EmptyKeySequence`] if a key binding is empty.
    /// - [`ReadlineError::Io`] if the history file exists but can't be read.
    pub fn try_new(
        config: ReadlineConfig,
        input: I,
        display: D,
        terminal: T,
    ) -> Result<Self, ReadlineError> {
        let dispatcher = config.key_bindings.try_build_dispatcher()?;

        let mut history = HistoryView::new(config.history_capacity, config.history_policy);
        let history_file = config.history_file.map(HistoryFile::new);
        if let Some(history_file) = &history_file {
            let lines = history_file.load()?;
            tracing::debug!(
                message = "Loaded history file",
                path = ?history_file.path(),
                line_count = lines.len()
            );
            for line in &lines {
                history.add_line(line);
            }
        }

        let mut session = LineSession::new(LineBuffer::with_max_len(config.max_line_len), history);
        session.history_file = history_file;

        Ok(Self {
            input,
            display,
            terminal,
            dispatcher,
            session,
            prompt_hook: None,
            completion_hook: None,
        })
    }

    /// Set the function that produces the prompt. It runs once per [`Self::read`].
    pub fn set_prompter(&mut self, prompt_hook: impl FnMut() -> String + 'static) -> &mut Self {
        self.prompt_hook = Some(Box::new(prompt_hook));
        self
    }

    /// Set the function that runs on `Tab`. It gets the current line and returns what to
    /// replace it with.
    pub fn set_autocomplete(
        &mut self,
        completion_hook: impl FnMut(&str) -> String + 'static,
    ) -> &mut Self {
        self.completion_hook = Some(Box::new(completion_hook));
        self
    }

    /// Read one line.
    ///
    /// # Errors
    ///
    /// Any [`ReadlineError`] from the ports. The line being edited is abandoned, and the
    /// terminal mode has been reset by the time this returns.
    pub fn read(&mut self) -> Result<ReadlineEvent, ReadlineError> {
        let Self {
            input,
            display,
            terminal,
            dispatcher,
            session,
            prompt_hook,
            completion_hook,
        } = self;

        let guard = TerminalModeGuard::try_new(terminal)?;

        let prompt = prompt_hook.as_mut().map(|hook| hook()).unwrap_or_default();
        tracing::debug!(message = "Read session started", prompt = ?prompt);
        session.begin(prompt, display)?;

        let maybe_event = dispatcher.run(input, |matched| {
            session.apply(matched, display, completion_hook.as_mut())
        })?;
        let event = match maybe_event {
            Some(event) => event,
            None => session.finish_at_end_of_stream(display)?,
        };

        guard.release()?;
        tracing::debug!(message = "Read session ended", event = ?event);
        Ok(event)
    }

    #[must_use]
    pub fn history(&self) -> &HistoryView { &self.session.history }

    /// Add `line` to history without it being typed, eg: from another source. It is not
    /// written to the history file.
    pub fn add_history_entry(&mut self, line: &str) -> bool {
        self.session.history.add_line(line)
    }

    pub fn display(&self) -> &D { &self.display }

    pub fn terminal(&self) -> &T { &self.terminal }
}
