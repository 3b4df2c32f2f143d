//! trunchash-attack - Birthday-attack collision search against truncated SHA-256
//!
//! This crate provides functionality to:
//! - Restrict SHA-256 to its low `b` bits (the truncation primitive)
//! - Search for collisions with a lookup table of probed values (big-space)
//! - Search for collisions in O(1) memory via cycle detection (small-space)

pub mod app;
pub mod config;
pub mod constants;
pub mod domain;

// Re-export commonly used types
pub use app::bigspace::PreimageCollision;
pub use app::smallspace::ElementCollision;
pub use config::{AttackConfig, AttackError};
pub use domain::element::DomainElement;
pub use domain::hash::{self_map_step, sha256, truncated_hash};
