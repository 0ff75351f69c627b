// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Unix/Linux/macOS implementation of [`TerminalPort`] using rustix's safe termios API.

use crate::{ReadlineError, TerminalOperation, TerminalPort};
use rustix::{fd::{AsFd, BorrowedFd},
             termios::{self, LocalModes, OptionalActions, OutputModes, SpecialCodeIndex,
                       Termios}};
use std::{fmt::{Debug, Formatter},
          fs::File,
          io,
          sync::Arc};

/// `VMIN` in raw mode: a read returns as soon as one byte is available.
pub const VMIN_RAW_MODE: u8 = 1;
/// `VTIME` in raw mode: no read timeout.
pub const VTIME_RAW_MODE: u8 = 0;

/// Represents either stdin or `/dev/tty` for terminal operations.
///
/// This enum allows us to handle both cases where stdin is a tty (normal terminal usage)
/// and where stdin is redirected (e.g., piped input), requiring us to use `/dev/tty`.
enum TerminalFd {
    /// Using standard input (when it's a terminal)
    Stdin(io::Stdin),
    /// Using `/dev/tty` (when stdin is redirected)
    DevTty(File),
}

impl AsFd for TerminalFd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            TerminalFd::Stdin(stdin) => stdin.as_fd(),
            TerminalFd::DevTty(file) => file.as_fd(),
        }
    }
}

/// Gets a file descriptor for the controlling terminal: stdin if it is a tty,
/// otherwise `/dev/tty`.
fn get_terminal_fd() -> Result<TerminalFd, ReadlineError> {
    let stdin = io::stdin();
    if termios::isatty(&stdin) {
        return Ok(TerminalFd::Stdin(stdin));
    }
    File::options()
        .read(true)
        .write(true)
        .open("/dev/tty")
        .map(TerminalFd::DevTty)
        .map_err(|source| ReadlineError::TerminalMode {
            operation: TerminalOperation::Open,
            source,
        })
}

/// Whether stdin is attached to a terminal. When it isn't (piped or redirected input),
/// there is nobody typing and [`crate::NoopTerminal`] is the right [`TerminalPort`].
#[must_use]
pub fn is_stdin_interactive() -> bool { termios::isatty(io::stdin()) }

/// Termios settings for the editing session, plus the settings to restore afterwards.
///
/// Start from the current settings with [`Self::try_new`] and adjust them with the
/// builder methods, or use [`Self::raw`]. Nothing changes on the terminal until
/// [`TerminalPort::apply`] is called.
///
/// ```no_run
/// use r3bl_line_editor::{TerminalModeGuard, TerminalSettings};
///
/// # fn main() -> Result<(), r3bl_line_editor::ReadlineError> {
/// let mut settings = TerminalSettings::try_new()?
///     .set_echo(false)
///     .set_canonical(false)
///     .set_min_chars_for_non_canonical_read(1)
///     .set_timeout_for_non_canonical_read(0);
/// let guard = TerminalModeGuard::try_new(&mut settings)?;
/// // Read keypresses one byte at a time here.
/// guard.release()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TerminalSettings {
    original: Termios,
    current: Termios,
    /// `None` means the controlling terminal, looked up on every apply / reset.
    device: Option<Arc<File>>,
}

fn retrieve_attributes(fd: impl AsFd) -> Result<Termios, ReadlineError> {
    termios::tcgetattr(fd).map_err(|errno| ReadlineError::TerminalMode {
        operation: TerminalOperation::Retrieve,
        source: errno.into(),
    })
}

impl TerminalSettings {
    /// Snapshot the controlling terminal's current settings.
    ///
    /// # Errors
    ///
    /// [`ReadlineError::TerminalMode`] if there is no controlling terminal, or its
    /// attributes can't be retrieved.
    pub fn try_new() -> Result<Self, ReadlineError> {
        let termios = retrieve_attributes(get_terminal_fd()?)?;
        Ok(Self {
            original: termios.clone(),
            current: termios,
            device: None,
        })
    }

    /// Snapshot the settings of a specific terminal device, eg: the follower side of a
    /// pseudo terminal. Apply and reset act on that device.
    ///
    /// # Errors
    ///
    /// [`ReadlineError::TerminalMode`] if `device` is not a terminal.
    pub fn try_new_with_device(device: File) -> Result<Self, ReadlineError> {
        let termios = retrieve_attributes(&device)?;
        Ok(Self {
            original: termios.clone(),
            current: termios,
            device: Some(Arc::new(device)),
        })
    }

    /// The current settings switched to raw mode (the same as `cfmakeraw`): no canonical
    /// line buffering, no echo, no signal keys, no output processing, and reads that
    /// return as soon as one byte is available.
    ///
    /// # Errors
    ///
    /// See [`Self::try_new`].
    pub fn raw() -> Result<Self, ReadlineError> { Ok(Self::try_new()?.set_raw()) }

    /// Switch these settings to raw mode, see [`Self::raw`].
    #[must_use]
    pub fn set_raw(mut self) -> Self {
        self.current.make_raw();
        self.set_min_chars_for_non_canonical_read(VMIN_RAW_MODE)
            .set_timeout_for_non_canonical_read(VTIME_RAW_MODE)
    }

    /// The settings that [`TerminalPort::apply`] installs.
    #[must_use]
    pub fn current(&self) -> &Termios { &self.current }

    /// The settings that [`TerminalPort::reset`] restores.
    #[must_use]
    pub fn original(&self) -> &Termios { &self.original }

    #[must_use]
    pub fn set_echo(mut self, is_enabled: bool) -> Self {
        self.current.local_modes.set(LocalModes::ECHO, is_enabled);
        self
    }

    /// Canonical mode delivers input a line at a time, after the user presses Enter.
    #[must_use]
    pub fn set_canonical(mut self, is_enabled: bool) -> Self {
        self.current.local_modes.set(LocalModes::ICANON, is_enabled);
        self
    }

    /// `VMIN`: a non-canonical read blocks until at least this many bytes are available.
    #[must_use]
    pub fn set_min_chars_for_non_canonical_read(mut self, count: u8) -> Self {
        self.current.special_codes[SpecialCodeIndex::VMIN] = count;
        self
    }

    /// `VTIME`: read timeout in tenths of a second, 0 waits forever.
    #[must_use]
    pub fn set_timeout_for_non_canonical_read(mut self, deciseconds: u8) -> Self {
        self.current.special_codes[SpecialCodeIndex::VTIME] = deciseconds;
        self
    }

    /// When enabled, `Ctrl+C` and `Ctrl+Z` arrive as bytes instead of raising `SIGINT`
    /// and `SIGTSTP`.
    #[must_use]
    pub fn set_ctrlc_ctrlz_as_characters(mut self, is_enabled: bool) -> Self {
        self.current.local_modes.set(LocalModes::ISIG, !is_enabled);
        self
    }

    /// Output post-processing, eg: translating `\n` to `\r\n`.
    #[must_use]
    pub fn set_output_processing(mut self, is_enabled: bool) -> Self {
        self.current.output_modes.set(OutputModes::OPOST, is_enabled);
        self
    }

    fn set_terminal_attributes(
        &self,
        termios: &Termios,
        operation: TerminalOperation,
    ) -> Result<(), ReadlineError> {
        let result = match &self.device {
            Some(device) => termios::tcsetattr(&**device, OptionalActions::Flush, termios),
            None => termios::tcsetattr(get_terminal_fd()?, OptionalActions::Flush, termios),
        };
        result.map_err(|errno| ReadlineError::TerminalMode {
            operation,
            source: errno.into(),
        })
    }
}

impl TerminalPort for TerminalSettings {
    fn apply(&mut self) -> Result<(), ReadlineError> {
        self.set_terminal_attributes(&self.current, TerminalOperation::Apply)
    }

    fn reset(&mut self) -> Result<(), ReadlineError> {
        self.set_terminal_attributes(&self.original, TerminalOperation::Restore)
    }
}

impl Debug for TerminalSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalSettings")
            .field("local_modes", &self.current.local_modes)
            .field("output_modes", &self.current.output_modes)
            .field("device", &self.device)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TerminalModeGuard, assert_eq2};
    use rustix::{fd::OwnedFd,
                 pty::{self, OpenptFlags},
                 termios::{ControlModes, InputModes}};

    /// A pseudo terminal: the controller stays open so the follower doesn't hang up.
    struct PtyPair {
        _controller: OwnedFd,
        follower: File,
    }

    impl PtyPair {
        fn follower_attributes(&self) -> Termios { termios::tcgetattr(&self.follower).unwrap() }

        fn settings(&self) -> TerminalSettings {
            TerminalSettings::try_new_with_device(self.follower.try_clone().unwrap()).unwrap()
        }
    }

    /// Returns `None` where pseudo terminals can't be allocated (some sandboxes).
    fn try_open_pty_pair() -> Option<PtyPair> {
        let controller = pty::openpt(OpenptFlags::RDWR | OpenptFlags::NOCTTY).ok()?;
        pty::grantpt(&controller).ok()?;
        pty::unlockpt(&controller).ok()?;
        let follower_name = pty::ptsname(&controller, Vec::new()).ok()?;
        let follower = File::options()
            .read(true)
            .write(true)
            .open(follower_name.to_str().ok()?)
            .ok()?;
        Some(PtyPair {
            _controller: controller,
            follower,
        })
    }

    macro_rules! pty_pair_or_skip {
        () => {
            match try_open_pty_pair() {
                Some(pty_pair) => pty_pair,
                None => {
                    eprintln!("⏭️  Skipped (can't allocate a pseudo terminal)");
                    return;
                }
            }
        };
    }

    #[test]
    fn test_set_raw_flags() {
        let pty_pair = pty_pair_or_skip!();
        let settings = pty_pair.settings().set_raw();
        let raw = settings.current();

        for flag in [
            LocalModes::ICANON,
            LocalModes::ECHO,
            LocalModes::ISIG,
            LocalModes::IEXTEN,
        ] {
            assert!(!raw.local_modes.contains(flag), "{flag:?} should be off");
        }
        assert!(!raw.output_modes.contains(OutputModes::OPOST));
        assert!(raw.control_modes.contains(ControlModes::CS8));
        assert!(!raw.input_modes.intersects(
            InputModes::ICRNL | InputModes::INLCR | InputModes::IGNCR | InputModes::IXON
        ));
        assert_eq2!(raw.special_codes[SpecialCodeIndex::VMIN], VMIN_RAW_MODE);
        assert_eq2!(raw.special_codes[SpecialCodeIndex::VTIME], VTIME_RAW_MODE);

        // The snapshot to restore is untouched.
        assert_eq2!(
            settings.original().local_modes,
            pty_pair.follower_attributes().local_modes
        );
    }

    #[test]
    fn test_builder_flags() {
        let pty_pair = pty_pair_or_skip!();

        let settings = pty_pair
            .settings()
            .set_echo(false)
            .set_canonical(false)
            .set_min_chars_for_non_canonical_read(3)
            .set_timeout_for_non_canonical_read(7);
        let current = settings.current();
        assert!(!current.local_modes.contains(LocalModes::ECHO));
        assert!(!current.local_modes.contains(LocalModes::ICANON));
        assert_eq2!(current.special_codes[SpecialCodeIndex::VMIN], 3);
        assert_eq2!(current.special_codes[SpecialCodeIndex::VTIME], 7);

        let settings = settings.set_echo(true).set_canonical(true);
        assert!(settings.current().local_modes.contains(LocalModes::ECHO));
        assert!(settings.current().local_modes.contains(LocalModes::ICANON));
    }

    #[test]
    fn test_ctrlc_ctrlz_as_characters_clears_isig() {
        let pty_pair = pty_pair_or_skip!();

        let settings = pty_pair.settings().set_ctrlc_ctrlz_as_characters(true);
        assert!(!settings.current().local_modes.contains(LocalModes::ISIG));

        let settings = settings.set_ctrlc_ctrlz_as_characters(false);
        assert!(settings.current().local_modes.contains(LocalModes::ISIG));
    }

    #[test]
    fn test_output_processing_toggles_opost() {
        let pty_pair = pty_pair_or_skip!();

        let settings = pty_pair.settings().set_output_processing(false);
        assert!(!settings.current().output_modes.contains(OutputModes::OPOST));

        let settings = settings.set_output_processing(true);
        assert!(settings.current().output_modes.contains(OutputModes::OPOST));
    }

    #[test]
    fn test_guard_applies_then_restores_on_device() {
        let pty_pair = pty_pair_or_skip!();
        let before = pty_pair.follower_attributes();
        let mut settings = pty_pair.settings().set_raw();

        let guard = TerminalModeGuard::try_new(&mut settings).unwrap();
        let during = pty_pair.follower_attributes();
        assert!(!during.local_modes.contains(LocalModes::ICANON));
        assert!(!during.local_modes.contains(LocalModes::ECHO));
        assert!(!during.output_modes.contains(OutputModes::OPOST));
        assert_eq2!(during.special_codes[SpecialCodeIndex::VMIN], VMIN_RAW_MODE);

        guard.release().unwrap();
        let after = pty_pair.follower_attributes();
        assert_eq2!(after.local_modes, before.local_modes);
        assert_eq2!(after.output_modes, before.output_modes);
    }

    #[test]
    fn test_not_a_terminal_is_an_error() {
        let dir = crate::test_fixtures::try_create_temp_dir().unwrap();
        let file_path = dir.join("not_a_tty");
        std::fs::write(&file_path, b"").unwrap();
        let file = File::open(&file_path).unwrap();

        let error = TerminalSettings::try_new_with_device(file).unwrap_err();
        assert!(matches!(
            error,
            ReadlineError::TerminalMode {
                operation: TerminalOperation::Retrieve,
                ..
            }
        ));
    }
}
