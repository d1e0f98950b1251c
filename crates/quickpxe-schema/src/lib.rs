//! The canonical, vendor-neutral catalog of BIOS boot settings.
//!
//! Every dialect speaks its own vocabulary (`--LegacyOrom=Disabled` for Dell CCTK, a
//! `CSM Support` block for HP BCU, `CSM Support,Disable` for Lenovo). The [`Setting`] enum is the
//! shared vocabulary they are all translated from. The catalog is closed: adding a key means
//! adding a variant, and every dialect is then forced by the compiler to say whether it can
//! express it.
//!
//! Each setting carries a [`Domain`] of permitted values. Most domains are closed; `SataMode` is
//! open because controller modes vary between vendors and generations.

pub mod domain;
pub mod errors;
pub mod setting;

pub use domain::{domain_of, Domain};
pub use errors::{SchemaError, SchemaResult};
pub use setting::{Setting, DISABLED, ENABLED};
