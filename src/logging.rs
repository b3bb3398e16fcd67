//! Logging initialization utilities.

use env_logger::Env;

/// Initialize logging. `RUST_LOG` wins over the verbosity flag.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env = Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}
