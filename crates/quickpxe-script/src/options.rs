use derive_builder::Builder;

/// Where the WinPE image keeps the vendor tools and configuration files.
pub const DEFAULT_TOOLS_ROOT: &str = r"X:\bios-tools";

/// Options for script generation. The defaults reproduce the stock QuickPXE scripts.
#[derive(Debug, Builder, Clone, PartialEq, Eq)]
#[builder(setter(into), default)]
pub struct ScriptOptions {
    /// End with a countdown and a reboot instead of a pause.
    pub include_reboot: bool,
    /// Directory holding one sub-directory per vendor, without a trailing backslash.
    pub tools_root: String,
    pub reboot_delay_secs: u32,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            include_reboot: true,
            tools_root: DEFAULT_TOOLS_ROOT.to_string(),
            reboot_delay_secs: 5,
        }
    }
}

impl ScriptOptions {
    pub(crate) fn root(&self) -> &str {
        self.tools_root.trim_end_matches('\\')
    }
}

#[cfg(test)]
mod test {
    use crate::options::{ScriptOptions, ScriptOptionsBuilder, DEFAULT_TOOLS_ROOT};
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_defaults() {
        let options = ScriptOptionsBuilder::default().build().unwrap();
        assert_eq!(options, ScriptOptions::default());
        assert!(options.include_reboot);
        assert_eq!(options.tools_root, DEFAULT_TOOLS_ROOT);
        assert_eq!(options.reboot_delay_secs, 5);
    }

    #[test]
    fn builder_overrides() {
        let options = ScriptOptionsBuilder::default()
            .include_reboot(false)
            .tools_root(r"D:\tools\")
            .build()
            .unwrap();

        assert!(!options.include_reboot);
        assert_eq!(options.root(), r"D:\tools");
        assert_eq!(options.reboot_delay_secs, 5);
    }
}
