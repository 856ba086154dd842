pub mod policy;
pub mod toml_config;

pub use policy::AbsencePolicy;
pub use toml_config::{AbsenceConfig, LoggingConfig, MaybeConfig};
