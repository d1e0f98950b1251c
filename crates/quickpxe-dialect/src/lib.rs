//! Vendor BIOS configuration dialects.
//!
//! ## Introduction
//! QuickPXE reads and writes the BIOS configuration files of three vendor tools:
//!
//! - **Dell** Command | Configure (CCTK), `.cctk` files of `--Key=Value` lines;
//! - **HP** BIOS Configuration Utility (BCU), `.REPSET` files made of blocks, one setting name
//!   followed by its indented alternatives, the selected one marked with `*`;
//! - **Lenovo** Think BIOS Config Tool, `.ini` files of `Key,Value` lines.
//!
//! Each of these is a [`Dialect`]. A dialect knows how to recognise its own files, how to parse
//! them into a [`ConfigModel`], how to render a model back into a complete document, and how to
//! express a canonical [`Setting`](quickpxe_schema::Setting) in its own vocabulary.
//!
//! ## Native and canonical entries
//! A [`ConfigModel`] holds two kinds of entries:
//!
//! ```text
//! --SecureBoot=Disabled      <- parsed from a .cctk file: a native entry
//! PxeBoot = Enabled          <- set by the user as a canonical entry
//! ```
//!
//! Native entries are written back verbatim, so anything the canonical catalog does not model
//! survives a parse/render cycle untouched. Canonical entries are translated at render time; for
//! Dell the `PxeBoot` entry above becomes two lines, `--EmbNic1=Enabled` and
//! `--EmbNic1Ipv4=Enabled`. A canonical entry the dialect cannot express is dropped and reported
//! as a [`Warning`].
//!
//! Most callers never store canonical entries at all and use
//! [`ConfigModel::apply_canonical`] instead, which writes the native pairs directly.
//!
//! ## Detection
//! [`identify`] picks the dialect of an uploaded file from its name and content. Dell is checked
//! first, then HP, then Lenovo. No match is an explicit `None`; there is no default vendor.

pub mod config;
pub mod detect;
pub mod dialect;
pub mod errors;

mod dell;
mod hp;
mod lenovo;


pub use config::{ConfigModel, Entry, EntryKind};
pub use detect::{identify, identify_or_err};
pub use dialect::{Dialect, Grammar, NativeSetting, Parsed, Rendered};
pub use errors::{DialectError, DialectResult, Warning};
