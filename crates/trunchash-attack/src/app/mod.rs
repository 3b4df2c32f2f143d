//! Search workflows: the two birthday-attack strategies

pub mod bigspace;
pub mod smallspace;
