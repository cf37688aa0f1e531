//! Paths command handler.
//!
//! Displays the resolved data paths for diagnostics. Every adapter
//! resolves through the same rules, so this is the reference output when
//! two surfaces appear to see different data.

use anyhow::Result;

use fieldlog_core::paths::DATA_DIR_ENV;

use crate::bootstrap::CliContext;

/// Execute the paths command.
///
/// Prints the resolved paths in `key = value` format.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let override_state = if std::env::var(DATA_DIR_ENV).is_ok() {
        "set"
    } else {
        "unset"
    };

    println!("data_root = {}", ctx.data_root().display());
    println!("store_dir = {}", ctx.store_dir().display());
    println!("{DATA_DIR_ENV} = {override_state}");

    Ok(())
}
