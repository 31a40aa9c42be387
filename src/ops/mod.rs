pub mod board_ops;
pub mod collection;
pub mod patch;
