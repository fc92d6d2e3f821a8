pub mod pdf;
pub mod sidecar;
