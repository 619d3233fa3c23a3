pub mod commands;
pub mod parser;
pub mod shell;
pub mod view;
