pub mod parse;
pub mod timezone;
