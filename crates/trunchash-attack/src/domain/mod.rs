//! Pure algorithmic core: domain elements, truncated hashing, cycle detection

pub mod cycle;
pub mod element;
pub mod hash;
