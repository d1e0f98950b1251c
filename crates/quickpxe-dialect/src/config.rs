use indexmap::map::IndexMap;
use quickpxe_schema::{SchemaResult, Setting};

use crate::dialect::Dialect;
use crate::errors::Warning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Written verbatim in the document's own vocabulary.
    Native,
    /// A canonical value, translated by the dialect when rendered.
    Canonical(Setting),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub value: String,
    pub kind: EntryKind,
}

/// An ordered key/value view of one configuration document.
///
/// Keys are case-sensitive and unique. Overwriting a key keeps its original position, so a
/// re-rendered document diffs cleanly against the uploaded one.
///
/// Note that `==` compares contents regardless of order; compare [`ConfigModel::entries`] when
/// order matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigModel {
    entries: IndexMap<String, Entry>,
}

impl ConfigModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model holding only canonical entries, validating every value.
    pub fn from_canonical<'a, I>(settings: I) -> SchemaResult<Self>
    where
        I: IntoIterator<Item = (Setting, &'a str)>,
    {
        let mut config = ConfigModel::new();
        for (setting, value) in settings {
            config.set_canonical(setting, value)?;
        }
        Ok(config)
    }

    pub fn get<K: AsRef<str>>(&self, key: K) -> Option<&str> {
        self.entries.get(key.as_ref()).map(|e| e.value.as_str())
    }

    pub fn entry<K: AsRef<str>>(&self, key: K) -> Option<&Entry> {
        self.entries.get(key.as_ref())
    }

    /// Set a native entry. An existing key is overwritten in place, a new one is appended.
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into(), EntryKind::Native);
    }

    /// Set a canonical entry, keyed by the setting's canonical name.
    pub fn set_canonical<V: AsRef<str>>(&mut self, setting: Setting, value: V) -> SchemaResult<()> {
        let value = value.as_ref();
        setting.validate(value)?;
        self.insert(
            setting.name().to_string(),
            value.to_string(),
            EntryKind::Canonical(setting),
        );
        Ok(())
    }

    /// Write the native encoding of a canonical setting straight into the model.
    ///
    /// Settings that expand to several native keys have all of them written, or none when the
    /// dialect cannot express the setting, in which case a warning is returned instead.
    pub fn apply_canonical<V: AsRef<str>>(
        &mut self,
        setting: Setting,
        value: V,
        dialect: Dialect,
    ) -> SchemaResult<Option<Warning>> {
        let value = value.as_ref();
        setting.validate(value)?;

        let Some(native) = dialect.render_key(setting, value) else {
            return Ok(Some(Warning::UnsupportedCanonicalKey {
                setting,
                value: value.to_string(),
                dialect,
            }));
        };

        for pair in native {
            self.set(pair.key, pair.value);
        }
        Ok(None)
    }

    pub fn remove<K: AsRef<str>>(&mut self, key: K) -> Option<String> {
        self.entries.shift_remove(key.as_ref()).map(|e| e.value)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(k, e)| (k.as_str(), e.value.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> + '_ {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: String, value: String, kind: EntryKind) {
        self.entries.insert(key, Entry { value, kind });
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConfigModel {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ret = ConfigModel::new();
        for (k, v) in iter {
            ret.set(k, v);
        }
        ret
    }
}
