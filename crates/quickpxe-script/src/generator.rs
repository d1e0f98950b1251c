use std::str::FromStr;

use derive_more::Display;
use itertools::Itertools;
use quickpxe_dialect::Dialect;

use crate::dispatch::MANUFACTURER_PATTERNS;
use crate::errors::ScriptError;
use crate::layout::{
    apply_script_file_name, baseline_file_name, tool_file_name, user_config_file_name, vendor_path,
};
use crate::options::ScriptOptions;

const RULE: &str = "=========================================";

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    #[display("{_0}")]
    Vendor(Dialect),
    /// Detect the manufacturer at run time and call the matching vendor script.
    #[display("Auto-Detect")]
    Auto,
}

impl FromStr for Target {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(Target::Auto);
        }
        s.parse::<Dialect>()
            .map(Target::Vendor)
            .map_err(|_| ScriptError::UnknownTarget(s.to_string()))
    }
}

impl From<Dialect> for Target {
    fn from(dialect: Dialect) -> Self {
        Target::Vendor(dialect)
    }
}

/// Generate the `startnet.cmd` script for a target. The output depends only on the target and the
/// options.
pub fn generate(target: Target, options: &ScriptOptions) -> String {
    let mut script = header(target);

    match target {
        Target::Vendor(Dialect::Dell) => dell_body(&mut script, options),
        Target::Vendor(Dialect::Hp) => hp_body(&mut script, options),
        Target::Vendor(Dialect::Lenovo) => lenovo_body(&mut script, options),
        Target::Auto => auto_body(&mut script, options),
    }

    script.push_str(&footer(options));
    script
}

fn header(target: Target) -> String {
    let title = match target {
        Target::Vendor(dialect) => format!("{dialect} BIOS Configuration"),
        Target::Auto => String::from("Auto-Detect Manufacturer"),
    };

    format!(
        r#"@echo off
:: QuickPXE Generated Script - {target}
:: Generated at quickpxe.com

wpeinit
echo {RULE}
echo  QuickPXE - {title}
echo {RULE}

"#
    )
}

fn dell_body(script: &mut String, options: &ScriptOptions) {
    let dialect = Dialect::Dell;
    script.push_str(&format!(
        r#"set "CCTK={tool}"

:: Apply user configuration
%CCTK% --infile={config}

:: Force UEFI-only boot settings
%CCTK% bootorder --BootListType=uefi
%CCTK% --LegacyOrom=Disabled
%CCTK% --SecureBoot=Disabled
%CCTK% --UefiNwStack=Enabled
%CCTK% --WarningsAndErr=ContWrnErr
%CCTK% bootorder --EnableDevice=EmbNic1
%CCTK% bootorder --Sequence=EmbNic1

"#,
        tool = vendor_path(options, dialect, tool_file_name(dialect)),
        config = vendor_path(options, dialect, &user_config_file_name(dialect)),
    ));
}

fn hp_body(script: &mut String, options: &ScriptOptions) {
    let dialect = Dialect::Hp;
    script.push_str(&format!(
        r#"set "BCU={tool}"

:: Apply user configuration
%BCU% /setconfig:{config}

:: Force UEFI-only boot settings
%BCU% /setvalue:"Boot Mode","UEFI Native (Without CSM)"
%BCU% /setvalue:"Legacy Support","Disable"
%BCU% /setvalue:"Secure Boot","Disable"
%BCU% /setvalue:"PXE Internal NIC boot","Enable"
%BCU% /setvalue:"UEFI Boot Order","HDD:USB:NETWORK"

"#,
        tool = vendor_path(options, dialect, tool_file_name(dialect)),
        config = vendor_path(options, dialect, &user_config_file_name(dialect)),
    ));
}

fn lenovo_body(script: &mut String, options: &ScriptOptions) {
    // The Think BIOS Config tool only takes whole files, so the baseline ships as its own file
    // (see `baseline_document`) and is applied second.
    let dialect = Dialect::Lenovo;
    script.push_str(&format!(
        r#"set "TBCT={tool}"

:: Apply user configuration
mshta.exe "%TBCT%" "FILE={config}"

:: Force UEFI-only boot settings
mshta.exe "%TBCT%" "FILE={baseline}"

"#,
        tool = vendor_path(options, dialect, tool_file_name(dialect)),
        config = vendor_path(options, dialect, &user_config_file_name(dialect)),
        baseline = vendor_path(options, dialect, &baseline_file_name(dialect)),
    ));
}

fn auto_body(script: &mut String, options: &ScriptOptions) {
    let routes = MANUFACTURER_PATTERNS
        .iter()
        .map(|(dialect, patterns)| {
            format!(
                r#"echo %MFR% | findstr /i "{}" >nul && goto :{}"#,
                patterns.join(" "),
                label(*dialect)
            )
        })
        .join("\n");

    let branches = MANUFACTURER_PATTERNS
        .iter()
        .map(|(dialect, _)| {
            format!(
                ":{}\ncall {}\ngoto :END\n",
                label(*dialect),
                vendor_path(options, *dialect, &apply_script_file_name(*dialect))
            )
        })
        .join("\n");

    script.push_str(&format!(
        r#":: Detect manufacturer
for /f "tokens=2 delims==" %%a in ('wmic computersystem get manufacturer /value') do set "MFR=%%a"

echo Detected: %MFR%
echo.

:: Route to correct script
{routes}

echo ERROR: Unknown manufacturer: %MFR%
pause
exit /b 1

{branches}
:END
"#
    ));
}

fn label(dialect: Dialect) -> String {
    dialect.slug().to_uppercase()
}

fn footer(options: &ScriptOptions) -> String {
    let ending = match options.include_reboot {
        true => format!("timeout /t {}\nwpeutil reboot\n", options.reboot_delay_secs),
        false => String::from("pause\n"),
    };

    format!("echo.\necho Configuration complete!\n{ending}")
}
