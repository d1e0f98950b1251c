use quickpxe_schema::Setting;
use quickpxe_util::matching::contains_any;

use crate::dialect::{enable_disable, Grammar, NativeSetting, Parsed};

const HEADER_KEYWORD: &str = "BIOSConfig";

/// HP BIOS Configuration Utility (REPSET). A setting name on its own line, followed by indented
/// alternatives; the selected alternative is prefixed with `*`:
///
/// ```text
/// BIOSConfig 1.0
/// Boot Mode
///     Legacy
///     *UEFI Native (Without CSM)
/// ```
#[derive(Debug)]
pub(crate) struct HpGrammar;

impl Grammar for HpGrammar {
    fn detect(&self, extension: &str, content: &str) -> bool {
        extension == "repset" || contains_any(content, &[HEADER_KEYWORD, "HP "])
    }

    fn parse(&self, content: &str) -> Parsed {
        let mut parsed = Parsed::default();
        let mut current: Option<&str> = None;

        for (line_no, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with(HEADER_KEYWORD) {
                continue;
            }

            if let Some(value) = line.strip_prefix('*') {
                match current {
                    Some(name) => parsed.config.set(name, value.trim()),
                    None => parsed.skip(line_no, line),
                }
                continue;
            }

            // Indented lines are the unselected alternatives of the current setting, and a tab
            // inside a line marks a continuation. Neither names a new setting.
            if raw.starts_with(char::is_whitespace) || line.contains('\t') {
                continue;
            }

            current = Some(line);
        }

        parsed
    }

    fn render_key(&self, setting: Setting, value: &str) -> Option<Vec<NativeSetting>> {
        let toggle = enable_disable(value);
        let native = match setting {
            Setting::SecureBoot => vec![NativeSetting::new("SecureBoot", toggle)],
            Setting::BootMode => {
                let mode = match value {
                    "UEFI" => "UEFI Native (Without CSM)",
                    _ => "Legacy",
                };
                vec![NativeSetting::new("Boot Mode", mode)]
            }
            Setting::LegacyOrCsm => vec![
                NativeSetting::new("Legacy Boot Options", toggle),
                NativeSetting::new("CSM Support", toggle),
            ],
            Setting::PxeBoot => vec![
                NativeSetting::new("Network (PXE) Boot", toggle),
                NativeSetting::new("IPv4 PXE Boot", toggle),
            ],
            Setting::WakeOnLan => {
                let wol = match value {
                    quickpxe_schema::ENABLED => "Boot to Hard Drive",
                    _ => "Disabled",
                };
                vec![NativeSetting::new("Wake on LAN", wol)]
            }
            Setting::UefiNetworkStack | Setting::SataMode | Setting::WarningsPolicy => return None,
        };

        Some(native)
    }

    fn header(&self) -> &'static str {
        "BIOSConfig 1.0\n; HP BIOS Configuration\n; Generated by QuickPXE\n\n"
    }

    fn write_setting(&self, out: &mut String, key: &str, value: &str) {
        out.push_str(key);
        out.push_str("\n\t*");
        out.push_str(value);
        out.push_str("\n\n");
    }
}

#[cfg(test)]
mod test {
    use crate::dialect::Dialect;
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use quickpxe_schema::Setting;

    #[test]
    fn parse_selected_alternative() {
        let input = "BIOSConfig 1.0\n;\n; exported\nBoot Mode\n\tLegacy\n\t*UEFI Native (Without CSM)\n\tUEFI Hybrid (With CSM)\nSecure Boot\n\t*Disable\n\tEnable\n";
        let parsed = Dialect::Hp.parse(input);

        assert_eq!(
            parsed.config.entries().collect_vec(),
            vec![
                ("Boot Mode", "UEFI Native (Without CSM)"),
                ("Secure Boot", "Disable")
            ]
        );
        assert_eq!(parsed.skipped_lines, 0);
    }

    #[test]
    fn value_before_any_setting_is_skipped() {
        let parsed = Dialect::Hp.parse("\t*Orphan\nAsset Tag\n\t*1234\n");
        assert_eq!(parsed.config.entries().collect_vec(), vec![("Asset Tag", "1234")]);
        assert_eq!(parsed.skipped_lines, 1);
    }

    #[test]
    fn tab_line_is_a_continuation() {
        let parsed = Dialect::Hp.parse("Ownership Tag\nPart\tTwo\n\t*Lab 3\n");
        assert_eq!(parsed.config.entries().collect_vec(), vec![("Ownership Tag", "Lab 3")]);
    }

    #[test]
    fn setting_without_selection_is_absent() {
        let parsed = Dialect::Hp.parse("Fast Boot\n\tEnable\n\tDisable\n");
        assert!(parsed.config.is_empty());
    }

    #[test]
    fn render_key_encodings() {
        let key = |s, v| {
            Dialect::Hp
                .render_key(s, v)
                .map(|n| n.into_iter().map(|n| (n.key, n.value)).collect_vec())
        };

        assert_eq!(
            key(Setting::BootMode, "UEFI"),
            Some(vec![("Boot Mode", "UEFI Native (Without CSM)".into())])
        );
        assert_eq!(
            key(Setting::LegacyOrCsm, "Disabled"),
            Some(vec![
                ("Legacy Boot Options", "Disable".into()),
                ("CSM Support", "Disable".into())
            ])
        );
        assert_eq!(
            key(Setting::PxeBoot, "Enabled"),
            Some(vec![
                ("Network (PXE) Boot", "Enable".into()),
                ("IPv4 PXE Boot", "Enable".into())
            ])
        );
        assert_eq!(
            key(Setting::WakeOnLan, "Enabled"),
            Some(vec![("Wake on LAN", "Boot to Hard Drive".into())])
        );
        assert_eq!(key(Setting::WarningsPolicy, "ContinueOnWarning"), None);
        assert_eq!(key(Setting::SataMode, "AHCI"), None);
    }
}
