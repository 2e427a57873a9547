// Service module exports

pub mod contrast;
pub mod export;
pub mod generator;
pub mod palette;
pub mod settings;
pub mod storage;
pub mod theme;
