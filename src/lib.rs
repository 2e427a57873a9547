// Splash Palette Library
// Palette models, contrast checking, generation, export and storage

pub mod models;
pub mod services;
pub mod utils;
