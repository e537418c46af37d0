pub mod configuration;
pub mod patterns;
pub mod plugins;
pub mod resolution;
