use eyre::EyreHandler;
use itertools::Itertools;
use marketplace_common::errors::dedup_chain;
use std::{error::Error, fmt, panic::Location};

/// Reports errors as their de-duplicated cause chain.
///
/// `{}` prints the chain on one line; `{:?}` prints the outermost message followed by a
/// numbered `Caused by:` list, unless a full report handler is attached.
#[derive(Default)]
pub struct Handler {
    report: Option<Box<dyn EyreHandler>>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands `{:?}` formatting to `report`.
    pub fn with_report(mut self, report: Option<Box<dyn EyreHandler>>) -> Self {
        self.report = report;
        self
    }
}

impl EyreHandler for Handler {
    fn display(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", dedup_chain(error).iter().format("; "))
    }

    fn debug(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.report {
            Some(report) => report.debug(error, f),
            None if f.alternate() => fmt::Debug::fmt(error, f),
            None => {
                let messages = dedup_chain(error);
                let mut messages = messages.iter();
                if let Some(outermost) = messages.next() {
                    f.write_str(outermost)?;
                }
                for (n, cause) in messages.enumerate() {
                    if n == 0 {
                        f.write_str("\n\nCaused by:")?;
                    }
                    write!(f, "\n    {n}: {cause}")?;
                }
                Ok(())
            }
        }
    }

    fn track_caller(&mut self, location: &'static Location<'static>) {
        if let Some(report) = &mut self.report {
            report.track_caller(location);
        }
    }
}

/// Installs the error report and panic hooks.
///
/// Errors print through [`Handler`]; with `MARKETPLACE_DEBUG` set they get the full
/// `color-eyre` report instead. Panics always get the `color-eyre` report.
pub fn install() {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .panic_section("This is a bug in the marketplace client.")
        .into_hooks();
    panic_hook.install();

    let eyre_hook = eyre_hook.into_eyre_hook();
    let full_report = std::env::var_os("MARKETPLACE_DEBUG").is_some();
    let installed = eyre::set_hook(Box::new(move |error| {
        Box::new(Handler::new().with_report(full_report.then(|| eyre_hook(error))))
    }));
    if let Err(err) = installed {
        debug!(%err, "error report hook already installed");
    }
}
