//! WinPE deployment script synthesis.
//!
//! A technician boots the target machine from a WinPE USB stick whose `startnet.cmd` was produced
//! here. The script applies the uploaded vendor configuration with the vendor's own tool and then
//! re-asserts a fixed baseline posture (UEFI only, no legacy option ROMs or CSM, Secure Boot off,
//! network boot on), whatever the uploaded file said. The baseline is what makes the machine
//! reachable for PXE imaging afterwards, so it is never optional.
//!
//! The [`Target::Auto`] script reads the system manufacturer and calls the per-vendor script by
//! path convention (`<tools root>\<vendor>\apply-<vendor>-bios.bat`).

pub mod baseline;
pub mod bootstrap;
pub mod dispatch;
pub mod errors;
pub mod generator;
pub mod layout;
pub mod options;

pub use baseline::{baseline_config, baseline_document, BASELINE};
pub use bootstrap::{bootstrap_script, DEFAULT_TOOLS_URL};
pub use dispatch::{dispatch, MANUFACTURER_PATTERNS};
pub use errors::{ScriptError, ScriptResult};
pub use generator::{generate, Target};
pub use layout::{
    apply_script_file_name, baseline_file_name, setup_instructions, tool_file_name,
    user_config_file_name, STARTUP_SCRIPT_FILE_NAME,
};
pub use options::{ScriptOptions, ScriptOptionsBuilder, DEFAULT_TOOLS_ROOT};
