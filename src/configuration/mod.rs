mod default_config;
mod deserialize_config;
mod resolve_config_path;
mod serialize_config;
mod types;
mod verify_config;

pub use default_config::*;
pub use deserialize_config::*;
pub use resolve_config_path::*;
pub use serialize_config::*;
pub use types::*;
pub use verify_config::*;
