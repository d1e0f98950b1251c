use anyhow::{bail, Context};
use quickpxe_dialect::{identify_or_err, ConfigModel, Dialect, Warning};
use quickpxe_schema::Setting;
use quickpxe_util::split::split_assignment;
use tracing::{debug, info, warn};

use crate::QuickPxeResult;

/// A canonical override requested by the user, e.g. `PxeBoot=Enabled`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    pub setting: Setting,
    pub value: String,
}

impl Override {
    pub fn new<V: Into<String>>(setting: Setting, value: V) -> Self {
        Self {
            setting,
            value: value.into(),
        }
    }

    /// Parse `Setting=Value`. Both the setting name and the value are checked against the schema.
    pub fn parse(text: &str) -> QuickPxeResult<Self> {
        let Some((key, value)) = split_assignment(text) else {
            bail!("expected SETTING=VALUE, got '{text}'");
        };

        let setting: Setting = key.parse()?;
        setting.validate(value)?;
        Ok(Override::new(setting, value))
    }
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub dialect: Dialect,
    pub config: ConfigModel,
    pub document: String,
    pub skipped_lines: usize,
    pub warnings: Vec<Warning>,
}

/// Parse an uploaded document, apply overrides in order and render it again.
///
/// The dialect is detected from the file name and content unless given. Overrides the dialect
/// cannot express are dropped, logged and reported in [`Translation::warnings`].
pub fn translate(
    filename: &str,
    content: &str,
    dialect: Option<Dialect>,
    overrides: &[Override],
) -> QuickPxeResult<Translation> {
    let dialect = match dialect {
        Some(dialect) => dialect,
        None => identify_or_err(filename, content)
            .context("pass the dialect explicitly if the file is not recognised")?,
    };

    let parsed = dialect.parse(content);
    debug!(
        %dialect,
        settings = parsed.config.len(),
        skipped = parsed.skipped_lines,
        "parsed {filename}"
    );

    let mut config = parsed.config;
    let mut warnings = vec![];
    for o in overrides {
        if let Some(warning) = config.apply_canonical(o.setting, &o.value, dialect)? {
            warnings.push(warning);
        }
    }

    let rendered = dialect.render(&config);
    warnings.extend(rendered.warnings);
    for warning in &warnings {
        warn!("{warning}");
    }

    info!(%dialect, settings = config.len(), "translated {filename}");

    Ok(Translation {
        dialect,
        config,
        document: rendered.text,
        skipped_lines: parsed.skipped_lines,
        warnings,
    })
}

/// Render canonical selections alone, for users who start without a vendor export.
pub fn render_selections(dialect: Dialect, overrides: &[Override]) -> QuickPxeResult<Translation> {
    translate("", "", Some(dialect), overrides)
}

#[cfg(test)]
mod test {
    use crate::workflow::{render_selections, translate, Override};
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use quickpxe_dialect::{Dialect, Warning};
    use quickpxe_schema::Setting;

    #[test]
    fn override_parse() {
        assert_eq!(
            Override::parse("PxeBoot=Enabled").unwrap(),
            Override::new(Setting::PxeBoot, "Enabled")
        );
        assert_eq!(
            Override::parse(" SataMode = RAID On ").unwrap(),
            Override::new(Setting::SataMode, "RAID On")
        );
        assert!(Override::parse("PxeBoot").is_err());
        assert!(Override::parse("FastBoot=Enabled").is_err());
        assert!(Override::parse("PxeBoot=Enable").is_err());
    }

    #[test_log::test]
    fn translate_detects_and_overrides() {
        let input = "--SecureBoot=Enabled\n--AssetTag=LAB-7\n";
        let translation = translate(
            "lab.cctk",
            input,
            None,
            &[
                Override::new(Setting::SecureBoot, "Disabled"),
                Override::new(Setting::WarningsPolicy, "ContinueOnWarning"),
            ],
        )
        .unwrap();

        assert_eq!(translation.dialect, Dialect::Dell);
        assert_eq!(
            translation.config.entries().collect_vec(),
            vec![
                ("SecureBoot", "Disabled"),
                ("AssetTag", "LAB-7"),
                ("WarningsAndErr", "ContWrnErr")
            ]
        );
        assert!(translation.warnings.is_empty());
        assert!(translation
            .document
            .ends_with("--SecureBoot=Disabled\n--AssetTag=LAB-7\n--WarningsAndErr=ContWrnErr\n"));
    }

    #[test_log::test]
    fn translate_reports_dropped_settings() {
        let translation = render_selections(
            Dialect::Lenovo,
            &[
                Override::new(Setting::BootMode, "UEFI"),
                Override::new(Setting::SataMode, "AHCI"),
            ],
        )
        .unwrap();

        assert_eq!(
            translation.warnings,
            vec![Warning::UnsupportedCanonicalKey {
                setting: Setting::SataMode,
                value: "AHCI".into(),
                dialect: Dialect::Lenovo,
            }]
        );
        assert!(translation.document.ends_with("\nBootMode,UEFI Only\n"));
    }

    #[test]
    fn translate_unknown_vendor_fails() {
        let err = translate("notes.txt", "hello", None, &[]).unwrap_err();
        assert!(format!("{err:#}").contains("could not recognise the vendor of 'notes.txt'"));
    }
}
