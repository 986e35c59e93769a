//! Global output shell.
//!
//! All user-facing output of the marketplace tools goes through the [`Shell`], so that
//! `--quiet` and `--color` are honored uniformly. Prefer the `sh_*` macros over calling
//! the methods directly.

use super::style::{ERROR, WARN};
use anstream::AutoStream;
use anstyle::Style;
use std::{
    fmt,
    io::{self, Write},
    sync::{Mutex, MutexGuard, OnceLock, PoisonError},
};

static GLOBAL_SHELL: OnceLock<Mutex<Shell>> = OnceLock::new();

/// Whether to colorize output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Colorize when the stream is a terminal.
    #[default]
    Auto,
    /// Always colorize.
    Always,
    /// Never colorize.
    Never,
}

impl From<ColorChoice> for anstream::ColorChoice {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

/// How much the shell prints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Only errors.
    Quiet,
    #[default]
    Normal,
    /// Everything, including debug notes.
    Verbose,
}

/// Shell output handle.
#[derive(Debug, Default)]
pub struct Shell {
    color: ColorChoice,
    verbosity: Verbosity,
}

impl Shell {
    /// Creates a new shell with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new shell with the given color choice and verbosity.
    pub fn new_with(color: ColorChoice, verbosity: Verbosity) -> Self {
        Self { color, verbosity }
    }

    /// Returns the global shell.
    pub fn get() -> MutexGuard<'static, Self> {
        GLOBAL_SHELL
            .get_or_init(Default::default)
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the global shell with `self`.
    pub fn set(self) {
        *Self::get() = self;
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn color_choice(&self) -> ColorChoice {
        self.color
    }

    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    /// Writes to stdout unless quiet.
    pub fn print_out(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        if self.is_quiet() {
            return Ok(());
        }
        let mut out = AutoStream::new(io::stdout(), self.color.into());
        out.write_fmt(args)?;
        out.flush()
    }

    /// Writes to stderr unless quiet.
    pub fn print_err(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        if self.is_quiet() {
            return Ok(());
        }
        let mut err = AutoStream::new(io::stderr(), self.color.into());
        err.write_fmt(args)?;
        err.flush()
    }

    /// Prints a yellow `Warning:` line to stderr unless quiet.
    pub fn warn(&mut self, message: impl fmt::Display) -> io::Result<()> {
        if self.is_quiet() {
            return Ok(());
        }
        self.status(WARN, "Warning", message)
    }

    /// Prints a red `Error:` line to stderr. Never silenced.
    pub fn error(&mut self, message: impl fmt::Display) -> io::Result<()> {
        self.status(ERROR, "Error", message)
    }

    fn status(&self, style: Style, header: &str, message: impl fmt::Display) -> io::Result<()> {
        let mut err = AutoStream::new(io::stderr(), self.color.into());
        writeln!(err, "{}{header}{}: {message}", style.render(), style.render_reset())
    }
}
