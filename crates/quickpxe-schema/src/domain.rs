use itertools::Itertools;

use crate::errors::SchemaResult;
use crate::setting::Setting;

/// The permitted values of a canonical setting.
///
/// For an open domain `values` lists the well-known choices, but any non-empty text is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    values: &'static [&'static str],
    open: bool,
}

impl Domain {
    pub(crate) const fn closed(values: &'static [&'static str]) -> Self {
        Self {
            values,
            open: false,
        }
    }

    pub(crate) const fn open(values: &'static [&'static str]) -> Self {
        Self { values, open: true }
    }

    pub fn values(&self) -> &'static [&'static str] {
        self.values
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn contains(&self, value: &str) -> bool {
        if self.open {
            return !value.trim().is_empty();
        }
        self.values.contains(&value)
    }

    pub(crate) fn describe(&self) -> String {
        let values = self.values.iter().join(", ");
        match self.open {
            true => format!("{values}, or any other text"),
            false => values,
        }
    }
}

/// Look up the value domain of a canonical key by name.
pub fn domain_of(key: &str) -> SchemaResult<Domain> {
    key.parse::<Setting>().map(|s| s.domain())
}
