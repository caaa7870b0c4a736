/// Command definitions and their handlers
pub mod commands;
/// Update handlers for messages, callback queries and poll answers
pub mod handlers;
/// Inline keyboard builders
pub mod keyboards;
