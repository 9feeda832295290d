pub mod ifttt;
pub mod minecraft;
pub mod traits;
pub mod types;

pub use ifttt::IftttNotifier;
pub use minecraft::{player_count_message, DynmapStatusSource, PlayerEntry, StatusSnapshot};
pub use traits::{Notifier, StatusSource};
pub use types::{ClientError, ClientResult};
