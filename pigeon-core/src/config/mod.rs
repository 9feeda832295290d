pub mod loader;
pub mod model;

#[cfg(test)]
mod tests;

pub use loader::{load_config, load_config_from_path};
pub use model::Config;
