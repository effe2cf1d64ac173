pub mod config;
pub mod constants;
pub mod error;
pub mod math;
pub mod rng;
pub mod types;

pub use config::{load_config_from_str, ConfigError, TerrainConfig};
pub use error::RidgelineError;
pub use rng::XorShiftRng;
pub use types::{MeshConfig, MeshVariant};
