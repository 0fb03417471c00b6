//! Core services: filesystem access, depth checks, traversal and filtering

pub mod depth;
pub mod filter;
pub mod fs;
pub mod traverse;
