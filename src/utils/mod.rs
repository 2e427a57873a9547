pub mod date;
pub mod paths;
