use once_cell::sync::Lazy;
use quickpxe_schema::Setting;
use quickpxe_util::matching::contains_any;
use regex::Regex;

use crate::dialect::{Grammar, NativeSetting, Parsed};

static CCTK_SETTING_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-{1,2}(\w+)=(.+)$").unwrap());

/// Dell Command | Configure: one `--Key=Value` (or `-Key=Value`) per line.
#[derive(Debug)]
pub(crate) struct DellGrammar;

impl Grammar for DellGrammar {
    fn detect(&self, extension: &str, content: &str) -> bool {
        extension == "cctk" || contains_any(content, &["Dell", "CCTK"])
    }

    fn parse(&self, content: &str) -> Parsed {
        let mut parsed = Parsed::default();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            match CCTK_SETTING_REGEX.captures(line) {
                Some(caps) => parsed.config.set(&caps[1], &caps[2]),
                None => parsed.skip(line_no, line),
            }
        }

        parsed
    }

    fn render_key(&self, setting: Setting, value: &str) -> Option<Vec<NativeSetting>> {
        let native = match setting {
            Setting::SecureBoot => vec![NativeSetting::new("SecureBoot", value)],
            Setting::BootMode => {
                let mode = match value {
                    "UEFI" => "Uefi",
                    _ => "Bios",
                };
                vec![NativeSetting::new("BootMode", mode)]
            }
            Setting::LegacyOrCsm => vec![NativeSetting::new("LegacyOrom", value)],
            // The embedded NIC itself must be on for its IPv4 PXE stack to be usable.
            Setting::PxeBoot => vec![
                NativeSetting::new("EmbNic1", quickpxe_schema::ENABLED),
                NativeSetting::new("EmbNic1Ipv4", value),
            ],
            Setting::UefiNetworkStack => vec![NativeSetting::new("UefiNwStack", value)],
            Setting::SataMode => vec![NativeSetting::new("EmbSataRaid", value)],
            Setting::WakeOnLan => vec![NativeSetting::new("WakeOnLan", value)],
            Setting::WarningsPolicy => {
                let policy = match value {
                    "ContinueOnWarning" => "ContWrnErr",
                    _ => "PromptWrnErr",
                };
                vec![NativeSetting::new("WarningsAndErr", policy)]
            }
        };

        Some(native)
    }

    fn header(&self) -> &'static str {
        "; Dell CCTK Configuration\n; Generated by QuickPXE\n\n"
    }

    fn write_setting(&self, out: &mut String, key: &str, value: &str) {
        out.push_str("--");
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
}
