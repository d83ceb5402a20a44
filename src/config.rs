pub mod settings;
pub mod redis;
pub mod scoring;
