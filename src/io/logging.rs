//! Logger set-up for the command-line binary
//!
//! Library code only talks to the `log` facade; the binary installs
//! `env_logger` once at start-up. `RUST_LOG` always wins over the defaults.

use env_logger::{Builder, Env};

/// Filter used when `RUST_LOG` is unset
pub const fn default_filter(quiet: bool) -> &'static str {
    if quiet { "warn" } else { "info" }
}

/// Install the global logger, returning `false` if one was already installed
pub fn init_logging(quiet: bool) -> bool {
    Builder::from_env(Env::default().default_filter_or(default_filter(quiet)))
        .format_timestamp(None)
        .format_target(false)
        .try_init()
        .is_ok()
}
