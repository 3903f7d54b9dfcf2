pub mod errors;
pub mod id;
pub mod types;

pub use errors::{AdapterError, ConfigError, MultiviewError, MuteCommand};
pub use id::{new_id, SlotId};
pub use types::{ChatFallback, Platform};

pub type Result<T> = std::result::Result<T, MultiviewError>;
