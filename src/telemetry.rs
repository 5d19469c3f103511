//! Tracing setup for the binaries.
//!
//! - `LOG_LEVEL` sets the filter (e.g. "debug" or
//!   "warn,multiply_adventure=trace"). Defaults to warnings only so log lines
//!   do not interleave with the game's own output.
//! - `LOG_FORMAT=json` switches to structured JSON lines.
//!
//! Logs go to stderr; stdout belongs to the game.

use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new("warn,multiply_adventure=info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
