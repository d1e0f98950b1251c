use std::collections::HashSet;
use std::fmt::Debug;
use std::str::FromStr;

use derive_more::Display;
use indexmap::IndexMap;
use quickpxe_schema::Setting;
use quickpxe_util::split::file_extension;
use tracing::trace;

use crate::config::{ConfigModel, EntryKind};
use crate::dell::DellGrammar;
use crate::errors::{DialectError, Warning};
use crate::hp::HpGrammar;
use crate::lenovo::LenovoGrammar;

/// One native key/value pair produced by translating a canonical setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeSetting {
    pub key: &'static str,
    pub value: String,
}

impl NativeSetting {
    pub(crate) fn new<V: Into<String>>(key: &'static str, value: V) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// Result of parsing a document. Parsing never fails; lines that carry no setting and are not
/// blank, comments or headers are counted in `skipped_lines`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    pub config: ConfigModel,
    pub skipped_lines: usize,
}

impl Parsed {
    pub(crate) fn skip(&mut self, line_no: usize, line: &str) {
        trace!(line_no = line_no + 1, line, "skipping unrecognized line");
        self.skipped_lines += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub warnings: Vec<Warning>,
}

/// The grammar of a single vendor dialect.
pub trait Grammar: Debug + Send + Sync {
    /// `extension` is already lowercased.
    fn detect(&self, extension: &str, content: &str) -> bool;

    fn parse(&self, content: &str) -> Parsed;

    /// Translate a canonical setting into the vendor's key(s) and literal value(s), or `None` if
    /// the vendor has no equivalent. `value` is expected to be in the setting's domain.
    fn render_key(&self, setting: Setting, value: &str) -> Option<Vec<NativeSetting>>;

    /// Everything written before the first setting, ending in a blank line.
    fn header(&self) -> &'static str;

    fn write_setting(&self, out: &mut String, key: &str, value: &str);
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dialect {
    #[display("Dell")]
    Dell,
    #[display("HP")]
    Hp,
    #[display("Lenovo")]
    Lenovo,
}

impl Dialect {
    /// Detection precedence.
    pub const ALL: [Dialect; 3] = [Dialect::Dell, Dialect::Hp, Dialect::Lenovo];

    pub fn grammar(&self) -> &'static dyn Grammar {
        match self {
            Dialect::Dell => &DellGrammar,
            Dialect::Hp => &HpGrammar,
            Dialect::Lenovo => &LenovoGrammar,
        }
    }

    /// Lowercase identifier used in paths and on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            Dialect::Dell => "dell",
            Dialect::Hp => "hp",
            Dialect::Lenovo => "lenovo",
        }
    }

    /// Conventional file extension of documents in this dialect, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Dialect::Dell => "cctk",
            Dialect::Hp => "REPSET",
            Dialect::Lenovo => "ini",
        }
    }

    pub fn detect(&self, filename: &str, content: &str) -> bool {
        let extension = file_extension(filename).to_lowercase();
        self.grammar().detect(&extension, content)
    }

    pub fn parse(&self, content: &str) -> Parsed {
        self.grammar().parse(content)
    }

    pub fn render_key(&self, setting: Setting, value: &str) -> Option<Vec<NativeSetting>> {
        self.grammar().render_key(setting, value)
    }

    /// Render a complete document. Entries are written in model order; canonical entries are
    /// translated, and the ones this dialect cannot express are dropped with a warning.
    ///
    /// Every native key is written once, at its first position. When a canonical entry
    /// translates to a key the model also holds natively, the translated value wins, as if the
    /// setting had been applied with [`ConfigModel::apply_canonical`].
    pub fn render(&self, config: &ConfigModel) -> Rendered {
        let grammar = self.grammar();
        let mut rendered = Rendered {
            text: String::from(grammar.header()),
            warnings: vec![],
        };

        let mut translated: IndexMap<&str, String> = IndexMap::new();
        for (_, entry) in config.iter() {
            let EntryKind::Canonical(setting) = entry.kind else {
                continue;
            };
            match grammar.render_key(setting, &entry.value) {
                Some(native) => {
                    for NativeSetting { key, value } in native {
                        translated.insert(key, value);
                    }
                }
                None => rendered.warnings.push(Warning::UnsupportedCanonicalKey {
                    setting,
                    value: entry.value.clone(),
                    dialect: *self,
                }),
            }
        }

        let mut written = HashSet::new();
        let mut write = |key: &str, value: &str, text: &mut String| {
            if written.insert(key.to_string()) {
                let value = translated.get(key).map_or(value, String::as_str);
                grammar.write_setting(text, key, value);
            }
        };

        for (key, entry) in config.iter() {
            match entry.kind {
                EntryKind::Native => write(key, &entry.value, &mut rendered.text),
                EntryKind::Canonical(setting) => {
                    for NativeSetting { key, value } in
                        grammar.render_key(setting, &entry.value).unwrap_or_default()
                    {
                        write(key, &value, &mut rendered.text);
                    }
                }
            }
        }

        rendered
    }
}

impl FromStr for Dialect {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::ALL
            .into_iter()
            .find(|d| d.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DialectError::UnknownDialect(s.to_string()))
    }
}

/// `Enable`/`Disable`, the toggle vocabulary shared by HP and Lenovo.
pub(crate) fn enable_disable(value: &str) -> &'static str {
    match value {
        quickpxe_schema::ENABLED => "Enable",
        _ => "Disable",
    }
}
