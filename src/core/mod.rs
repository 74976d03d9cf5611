//! Core processing building blocks: the near-white mask, content bounds,
//! cropping, the combined pipeline, and save helpers. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
