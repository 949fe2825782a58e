pub mod config;

pub use config::BodyConfig;
