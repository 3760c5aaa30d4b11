//! Engine data structures: meshes, instances, and render targets.
//!
//! This module contains the core data types for scene representation:
//!
//! - `mesh` contains the vertex layout contract and the shared cube geometry
//! - `instance` holds per-object transformation, color, and time data
//! - `texture` contains the depth and MSAA render-target wrappers

pub mod instance;
pub mod mesh;
pub mod texture;
