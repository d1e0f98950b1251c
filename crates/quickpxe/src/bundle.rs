use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use quickpxe_dialect::{Dialect, Warning};
use quickpxe_script::{
    baseline_document, baseline_file_name, generate, setup_instructions, user_config_file_name,
    ScriptOptions, Target, STARTUP_SCRIPT_FILE_NAME,
};
use tracing::debug;

use crate::QuickPxeResult;

pub const README_FILE_NAME: &str = "README.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleFile {
    /// Relative to the root of the USB stick, `/`-separated.
    pub path: String,
    pub contents: String,
}

/// Top-level directory of the bundle, matching the paths in the setup instructions.
pub const TOOLS_DIR: &str = "bios-tools";

/// The files a user copies onto a WinPE USB stick for one machine family: the startup script,
/// their translated configuration, the Lenovo baseline file when the script needs one, and a
/// readme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsbBundle {
    pub dialect: Dialect,
    pub files: Vec<BundleFile>,
    /// Baseline settings the vendor could not express.
    pub warnings: Vec<Warning>,
}

impl UsbBundle {
    pub fn new(dialect: Dialect, user_config: &str, options: &ScriptOptions) -> Self {
        let vendor_file = |name: &str| format!("{TOOLS_DIR}/{}/{name}", dialect.slug());

        let mut files = vec![
            BundleFile {
                path: format!("{TOOLS_DIR}/{STARTUP_SCRIPT_FILE_NAME}"),
                contents: generate(Target::Vendor(dialect), options),
            },
            BundleFile {
                path: vendor_file(&user_config_file_name(dialect)),
                contents: user_config.to_string(),
            },
        ];
        let mut warnings = vec![];

        // Only the Lenovo script applies the baseline from a file; the others carry it inline.
        if dialect == Dialect::Lenovo {
            let baseline = baseline_document(dialect);
            files.push(BundleFile {
                path: vendor_file(&baseline_file_name(dialect)),
                contents: baseline.text,
            });
            warnings = baseline.warnings;
        }

        files.push(BundleFile {
            path: README_FILE_NAME.to_string(),
            contents: setup_instructions(dialect),
        });

        UsbBundle {
            dialect,
            files,
            warnings,
        }
    }

    pub fn file<P: AsRef<str>>(&self, path: P) -> Option<&BundleFile> {
        self.files.iter().find(|f| f.path == path.as_ref())
    }

    /// Write every file below `dir`, creating directories as needed. Returns the written paths.
    pub fn write_to<P: AsRef<Path>>(&self, dir: P) -> QuickPxeResult<Vec<PathBuf>> {
        let dir = dir.as_ref();
        let mut written = vec![];

        for file in &self.files {
            let path = file.path.split('/').fold(dir.to_path_buf(), |p, c| p.join(c));
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(&path, &file.contents)
                .with_context(|| format!("failed to write {}", path.display()))?;
            debug!(path = %path.display(), "wrote bundle file");
            written.push(path);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod test {
    use crate::bundle::{UsbBundle, README_FILE_NAME};
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use quickpxe_dialect::{Dialect, Warning};
    use quickpxe_schema::Setting;
    use quickpxe_script::ScriptOptions;

    #[test]
    fn layout() {
        let bundle = UsbBundle::new(Dialect::Hp, "BIOSConfig 1.0\n", &ScriptOptions::default());

        assert_eq!(
            bundle.files.iter().map(|f| f.path.as_str()).collect_vec(),
            vec![
                "bios-tools/startnet.cmd",
                "bios-tools/hp/user-config.REPSET",
                "README.txt"
            ]
        );
        assert_eq!(
            bundle.file("bios-tools/hp/user-config.REPSET").unwrap().contents,
            "BIOSConfig 1.0\n"
        );
        assert!(bundle
            .file("bios-tools/startnet.cmd")
            .unwrap()
            .contents
            .contains("QuickPXE - HP BIOS Configuration"));
        assert!(bundle
            .file(README_FILE_NAME)
            .unwrap()
            .contents
            .contains("Download the HP BIOS tool"));
        assert!(bundle.file("missing.txt").is_none());
        assert!(bundle.warnings.is_empty());
    }

    #[test]
    fn lenovo_ships_baseline_file() {
        let bundle = UsbBundle::new(
            Dialect::Lenovo,
            "BootMode,UEFI Only\n",
            &ScriptOptions::default(),
        );

        let script = &bundle.file("bios-tools/startnet.cmd").unwrap().contents;
        assert!(script.contains(r"FILE=X:\bios-tools\lenovo\baseline.ini"));

        let baseline = bundle.file("bios-tools/lenovo/baseline.ini").unwrap();
        assert!(baseline.contents.contains("BootMode,UEFI Only\n"));
        assert!(baseline.contents.contains("CSM Support,Disable\n"));
        assert_eq!(
            bundle.warnings,
            vec![Warning::UnsupportedCanonicalKey {
                setting: Setting::UefiNetworkStack,
                value: "Enabled".into(),
                dialect: Dialect::Lenovo,
            }]
        );
    }

    #[test]
    fn other_vendors_carry_baseline_inline() {
        for dialect in [Dialect::Dell, Dialect::Hp] {
            let bundle = UsbBundle::new(dialect, "", &ScriptOptions::default());
            assert_eq!(bundle.files.len(), 3);
            assert!(bundle
                .files
                .iter()
                .all(|f| !f.path.contains("baseline")));
        }
    }
}
