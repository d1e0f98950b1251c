//! QuickPXE: prepare Dell, HP and Lenovo machines for PXE imaging.
//!
//! This crate ties the workspace together. [`workflow::translate`] takes an uploaded vendor
//! configuration, identifies its dialect, applies canonical overrides and renders it back;
//! [`bundle::UsbBundle`] lays out everything that goes onto a WinPE USB stick.

pub mod bundle;
pub mod workflow;

pub use quickpxe_dialect as dialect;
pub use quickpxe_schema as schema;
pub use quickpxe_script as script;

pub type QuickPxeResult<T> = anyhow::Result<T>;
