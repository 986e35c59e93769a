use tracing_subscriber::{EnvFilter, prelude::*};

/// Initializes the tracing subscriber, filtered by `RUST_LOG`.
///
/// Logs go to stderr so they never mix with rendered output.
pub fn subscriber() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .try_init();
}

/// Loads a `.env` file from the working directory or its parents, if any.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => trace!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => {}
        Err(err) => warn!(%err, "failed to load .env"),
    }
}
