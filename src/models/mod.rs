// Module exports for models

pub mod color;
pub mod palette;
pub mod settings;
pub mod theme;
