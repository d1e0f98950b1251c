use quickpxe_schema::Setting;
use quickpxe_util::matching::contains_any;
use quickpxe_util::split::split_exact_pair;

use crate::dialect::{enable_disable, Grammar, NativeSetting, Parsed};

/// Lenovo Think BIOS Config Tool: `Key,Value` lines, `;` comments.
#[derive(Debug)]
pub(crate) struct LenovoGrammar;

impl Grammar for LenovoGrammar {
    fn detect(&self, extension: &str, content: &str) -> bool {
        // Plenty of unrelated files are .ini, so the extension alone is not enough.
        extension == "ini" && contains_any(content, &["ThinkCentre", "Lenovo"])
    }

    fn parse(&self, content: &str) -> Parsed {
        let mut parsed = Parsed::default();

        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            match split_exact_pair(line, ',') {
                Some((key, value)) if !key.is_empty() => parsed.config.set(key, value),
                _ => parsed.skip(line_no, line),
            }
        }

        parsed
    }

    fn render_key(&self, setting: Setting, value: &str) -> Option<Vec<NativeSetting>> {
        let toggle = enable_disable(value);
        let native = match setting {
            Setting::SecureBoot => vec![NativeSetting::new("SecureBoot", toggle)],
            Setting::BootMode => {
                let mode = match value {
                    "UEFI" => "UEFI Only",
                    _ => "Legacy Only",
                };
                vec![NativeSetting::new("BootMode", mode)]
            }
            Setting::LegacyOrCsm => vec![NativeSetting::new("CSM Support", toggle)],
            Setting::PxeBoot => vec![
                NativeSetting::new("NetworkBoot", toggle),
                NativeSetting::new("PXEIPv4NetworkStack", toggle),
            ],
            Setting::WakeOnLan => vec![NativeSetting::new("WakeOnLAN", toggle)],
            Setting::UefiNetworkStack | Setting::SataMode | Setting::WarningsPolicy => return None,
        };

        Some(native)
    }

    fn header(&self) -> &'static str {
        "; Lenovo Think BIOS Configuration\n; Generated by QuickPXE\n\n"
    }

    fn write_setting(&self, out: &mut String, key: &str, value: &str) {
        out.push_str(key);
        out.push(',');
        out.push_str(value);
        out.push('\n');
    }
}

#[cfg(test)]
mod test {
    use crate::dialect::Dialect;
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use quickpxe_schema::Setting;

    #[test]
    fn parse_skips_comments_and_malformed_lines() {
        let input = "; ThinkCentre M920q\n[Settings]\nBootMode, UEFI Only\nBootOrder,USB,NVMe,PXE\n,Orphan\nSecureBoot,Disable\n";
        let parsed = Dialect::Lenovo.parse(input);

        assert_eq!(
            parsed.config.entries().collect_vec(),
            vec![("BootMode", "UEFI Only"), ("SecureBoot", "Disable")]
        );
        assert_eq!(parsed.skipped_lines, 3);
    }

    #[test]
    fn render_key_encodings() {
        let key = |s, v| {
            Dialect::Lenovo
                .render_key(s, v)
                .map(|n| n.into_iter().map(|n| (n.key, n.value)).collect_vec())
        };

        assert_eq!(key(Setting::BootMode, "UEFI"), Some(vec![("BootMode", "UEFI Only".into())]));
        assert_eq!(
            key(Setting::LegacyOrCsm, "Disabled"),
            Some(vec![("CSM Support", "Disable".into())])
        );
        assert_eq!(
            key(Setting::PxeBoot, "Enabled"),
            Some(vec![
                ("NetworkBoot", "Enable".into()),
                ("PXEIPv4NetworkStack", "Enable".into())
            ])
        );
        assert_eq!(key(Setting::WakeOnLan, "Disabled"), Some(vec![("WakeOnLAN", "Disable".into())]));
        assert_eq!(key(Setting::WarningsPolicy, "ContinueOnWarning"), None);
    }
}
