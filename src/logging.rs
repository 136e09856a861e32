//! Tracing setup for the terminal host.
//!
//! The host owns the whole screen, so log lines go to a file.  `RUST_LOG`
//! overrides the default filter.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "platformer=info";

static TRACING_INIT: Once = Once::new();

/// Install a subscriber writing to `path`.  The first call wins.
/// Later calls leave `path` untouched.
pub fn init(path: &Path) -> io::Result<()> {
    let mut result = Ok(());
    TRACING_INIT.call_once(|| {
        let file = match File::create(path) {
            Ok(file) => file,
            Err(err) => {
                result = Err(err);
                return;
            }
        };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .compact();

        // Ignore error if a global subscriber is already set
        let _ = subscriber.try_init();
    });
    result
}
