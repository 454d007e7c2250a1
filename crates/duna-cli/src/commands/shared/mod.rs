pub mod parse;
pub mod rows;
