pub mod command;
pub mod terminal;

pub use command::Command;
pub use terminal::TerminalPrompt;
