pub mod console;
pub mod table;
pub mod view;

pub use console::{run, ConsoleOptions, SessionReport};
pub use table::{Command, Table, Transition};
