use quickpxe_dialect::Dialect;

use crate::options::ScriptOptions;

/// WinPE runs `startnet.cmd` on boot.
pub const STARTUP_SCRIPT_FILE_NAME: &str = "startnet.cmd";

pub fn user_config_file_name(dialect: Dialect) -> String {
    format!("user-config.{}", dialect.extension())
}

pub fn baseline_file_name(dialect: Dialect) -> String {
    format!("baseline.{}", dialect.extension())
}

pub fn apply_script_file_name(dialect: Dialect) -> String {
    format!("apply-{}-bios.bat", dialect.slug())
}

/// The vendor's configuration tool, as shipped by the vendor.
pub fn tool_file_name(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Dell => "cctk.exe",
        Dialect::Hp => "BiosConfigUtility64.exe",
        Dialect::Lenovo => "ThinkBiosConfig.hta",
    }
}

/// `<root>\<vendor>\<file>`
pub(crate) fn vendor_path(options: &ScriptOptions, dialect: Dialect, file: &str) -> String {
    format!(r"{}\{}\{}", options.root(), dialect.slug(), file)
}

/// Readme explaining where the generated files and the vendor tool go on the USB stick.
pub fn setup_instructions(dialect: Dialect) -> String {
    let usb = ScriptOptions {
        tools_root: r"USB:\bios-tools".to_string(),
        ..ScriptOptions::default()
    };

    // The Lenovo script applies the baseline from its own file.
    let (baseline_path, baseline_entry) = match dialect {
        Dialect::Lenovo => (
            format!("\n   {}", vendor_path(&usb, dialect, &baseline_file_name(dialect))),
            format!(
                "\n- {} (UEFI baseline, applied after your config)",
                baseline_file_name(dialect)
            ),
        ),
        _ => (String::new(), String::new()),
    };

    format!(
        r"QuickPXE USB Setup Instructions
================================

1. Copy these files to your WinPE USB:

   {config}{baseline_path}
   {root}\{startup}

2. Download the {vendor} BIOS tool and place it in:

   {tool}

3. Boot target PC from USB - script runs automatically!

Files included in this download:
- {startup} (your generated script)
- {config_name} (your uploaded config){baseline_entry}
",
        config = vendor_path(&usb, dialect, &user_config_file_name(dialect)),
        root = usb.root(),
        startup = STARTUP_SCRIPT_FILE_NAME,
        vendor = dialect,
        tool = vendor_path(&usb, dialect, tool_file_name(dialect)),
        config_name = user_config_file_name(dialect),
    )
}

#[cfg(test)]
mod test {
    use crate::layout::{apply_script_file_name, setup_instructions, user_config_file_name};
    use pretty_assertions::assert_eq;
    use quickpxe_dialect::Dialect;

    #[test]
    fn file_names() {
        assert_eq!(user_config_file_name(Dialect::Hp), "user-config.REPSET");
        assert_eq!(apply_script_file_name(Dialect::Lenovo), "apply-lenovo-bios.bat");
    }

    #[test]
    fn instructions_name_vendor_paths() {
        let readme = setup_instructions(Dialect::Hp);
        assert!(readme.contains(r"   USB:\bios-tools\hp\user-config.REPSET"));
        assert!(readme.contains(r"   USB:\bios-tools\startnet.cmd"));
        assert!(readme.contains(r"   USB:\bios-tools\hp\BiosConfigUtility64.exe"));
        assert!(readme.contains("- user-config.REPSET (your uploaded config)"));
        assert!(!readme.contains("cctk"));
        assert!(!readme.contains("baseline"));
    }

    #[test]
    fn lenovo_instructions_list_baseline() {
        let readme = setup_instructions(Dialect::Lenovo);
        assert!(readme.contains(
            "   USB:\\bios-tools\\lenovo\\user-config.ini\n   USB:\\bios-tools\\lenovo\\baseline.ini\n   USB:\\bios-tools\\startnet.cmd\n"
        ));
        assert!(readme.ends_with(
            "- user-config.ini (your uploaded config)\n- baseline.ini (UEFI baseline, applied after your config)\n"
        ));
    }
}
