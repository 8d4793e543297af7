//! Domain Services
//!
//! Stateless rule stages and the advisor that chains them.

mod advisor;
mod layout;
mod rounding;
mod storage;

pub use advisor::{suggest_defaults, WardrobeAdvisor};
pub use layout::{column_count, derive_layout, Layout};
pub use storage::{derive_storage, drawer_count, Storage};
