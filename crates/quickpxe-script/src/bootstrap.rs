use itertools::Itertools;
use quickpxe_dialect::Dialect;

use crate::layout::{apply_script_file_name, vendor_path};
use crate::options::ScriptOptions;

pub const DEFAULT_TOOLS_URL: &str = "https://quickpxe.azurewebsites.net/api/scripts";

const AUTO_SCRIPT_FILE_NAME: &str = "auto-detect-apply.bat";

/// The stock `startnet.cmd` for a USB stick that fetches the current scripts from a QuickPXE
/// server at boot, falling back to copies embedded in the image when the download fails.
pub fn bootstrap_script(tools_url: &str, options: &ScriptOptions) -> String {
    let root = options.root();
    let tools_url = tools_url.trim_end_matches('/');

    let downloads = Dialect::ALL
        .into_iter()
        .map(|dialect| {
            let file = apply_script_file_name(dialect);
            format!(
                r#"powershell -Command "Invoke-WebRequest -Uri '%TOOLS_URL%/{slug}/{file}' -OutFile '{dest}' -UseBasicParsing" 2>nul"#,
                slug = dialect.slug(),
                dest = vendor_path(options, dialect, &file),
            )
        })
        .join("\n");

    let ending = match options.include_reboot {
        true => format!(
            "echo Configuration complete. Rebooting in {delay} seconds...\necho Press any key to reboot immediately, or Ctrl+C to cancel.\ntimeout /t {delay}\nwpeutil reboot\n",
            delay = options.reboot_delay_secs
        ),
        false => String::from("echo Configuration complete.\npause\n"),
    };

    format!(
        r#"@echo off
:: QuickPXE Default Script - Downloads latest configs from server
:: This script runs automatically when booting from QuickPXE USB

wpeinit

echo ==========================================
echo  QuickPXE - Automated BIOS Configuration
echo ==========================================
echo.

:: Create temp directory for tools
if not exist {root} mkdir {root}

:: Server URL for updated scripts
set "TOOLS_URL={tools_url}"

echo Downloading latest BIOS tools from server...
echo.

:: Download auto-detect script
powershell -Command "Invoke-WebRequest -Uri '%TOOLS_URL%/{auto}' -OutFile '{root}\{auto}' -UseBasicParsing" 2>nul
if %errorlevel% neq 0 (
    echo WARNING: Could not download from server, using embedded scripts...
    goto :use_embedded
)

:: Download manufacturer-specific scripts
{downloads}

echo Download complete!
echo.

:run_script
:: Run the auto-detect script
call {root}\{auto}
goto :end

:use_embedded
:: Fallback to embedded scripts if download fails
if exist {root}-embedded\{auto} (
    call {root}-embedded\{auto}
) else (
    echo ERROR: No scripts available!
    pause
)

:end
echo.
{ending}"#,
        auto = AUTO_SCRIPT_FILE_NAME,
    )
}

#[cfg(test)]
mod test {
    use crate::bootstrap::{bootstrap_script, DEFAULT_TOOLS_URL};
    use crate::options::{ScriptOptions, ScriptOptionsBuilder};

    #[test]
    fn downloads_every_vendor_script() {
        let script = bootstrap_script(DEFAULT_TOOLS_URL, &ScriptOptions::default());
        assert!(script.contains(
            r#"set "TOOLS_URL=https://quickpxe.azurewebsites.net/api/scripts""#
        ));
        for (slug, file) in [
            ("dell", "apply-dell-bios.bat"),
            ("hp", "apply-hp-bios.bat"),
            ("lenovo", "apply-lenovo-bios.bat"),
        ] {
            assert!(script.contains(&format!(
                r"'%TOOLS_URL%/{slug}/{file}' -OutFile 'X:\bios-tools\{slug}\{file}'"
            )));
        }
        assert!(script.contains(r"call X:\bios-tools\auto-detect-apply.bat"));
        assert!(script.contains(r"if exist X:\bios-tools-embedded\auto-detect-apply.bat ("));
    }

    #[test]
    fn ending_follows_options() {
        let script = bootstrap_script("https://pxe.example.com/scripts/", &ScriptOptions::default());
        assert!(script.contains(r#"set "TOOLS_URL=https://pxe.example.com/scripts""#));
        assert!(script.ends_with("timeout /t 5\nwpeutil reboot\n"));

        let options = ScriptOptionsBuilder::default()
            .include_reboot(false)
            .build()
            .unwrap();
        let script = bootstrap_script(DEFAULT_TOOLS_URL, &options);
        assert!(script.ends_with("echo.\necho Configuration complete.\npause\n"));
    }
}
