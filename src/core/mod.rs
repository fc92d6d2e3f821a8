//! Core building blocks: sheet parameters, date resolution and the page/grid
//! layout computation. These are internal primitives consumed by the
//! high-level `api` module.
pub mod date;
pub mod layout;
pub mod params;
