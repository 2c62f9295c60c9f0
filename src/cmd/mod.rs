/// Snapshot export command.
pub mod export;
/// Linked instance listing command.
pub mod list;
/// Shared CLI helpers.
pub(crate) mod util;
