mod effects;
mod keys;
mod terminal;

pub use terminal::Terminal;
