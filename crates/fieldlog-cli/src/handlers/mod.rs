//! Command handlers that delegate to the observation view model.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call view model operations
//!   3. Format output for the terminal
//!
//! Handlers should NOT:
//! - Access the record store or repository directly
//! - Contain business logic

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod paths;
pub mod show;
