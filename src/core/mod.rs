pub mod history;
pub mod log;
pub mod mark;
pub mod normalize;
pub mod session;
pub mod table;
