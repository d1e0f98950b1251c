use std::str::FromStr;

use derive_more::Display;
use phf::phf_map;

use crate::domain::Domain;
use crate::errors::{SchemaError, SchemaResult};

pub const ENABLED: &str = "Enabled";
pub const DISABLED: &str = "Disabled";

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Setting {
    SecureBoot,
    BootMode,
    LegacyOrCsm,
    PxeBoot,
    UefiNetworkStack,
    SataMode,
    WakeOnLan,
    WarningsPolicy,
}

static SETTINGS_BY_NAME: phf::Map<&'static str, Setting> = phf_map! {
    "SecureBoot" => Setting::SecureBoot,
    "BootMode" => Setting::BootMode,
    "LegacyOrCsm" => Setting::LegacyOrCsm,
    "PxeBoot" => Setting::PxeBoot,
    "UefiNetworkStack" => Setting::UefiNetworkStack,
    "SataMode" => Setting::SataMode,
    "WakeOnLan" => Setting::WakeOnLan,
    "WarningsPolicy" => Setting::WarningsPolicy,
};

const TOGGLE: &[&str] = &[ENABLED, DISABLED];

impl Setting {
    /// Catalog order, which is also the order settings are presented and applied in.
    pub const ALL: [Setting; 8] = [
        Setting::SecureBoot,
        Setting::BootMode,
        Setting::LegacyOrCsm,
        Setting::PxeBoot,
        Setting::UefiNetworkStack,
        Setting::SataMode,
        Setting::WakeOnLan,
        Setting::WarningsPolicy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Setting::SecureBoot => "SecureBoot",
            Setting::BootMode => "BootMode",
            Setting::LegacyOrCsm => "LegacyOrCsm",
            Setting::PxeBoot => "PxeBoot",
            Setting::UefiNetworkStack => "UefiNetworkStack",
            Setting::SataMode => "SataMode",
            Setting::WakeOnLan => "WakeOnLan",
            Setting::WarningsPolicy => "WarningsPolicy",
        }
    }

    /// Exact, case-sensitive lookup of a canonical key name.
    pub fn from_name(name: &str) -> Option<Setting> {
        SETTINGS_BY_NAME.get(name).copied()
    }

    pub fn domain(&self) -> Domain {
        match self {
            Setting::SecureBoot
            | Setting::LegacyOrCsm
            | Setting::PxeBoot
            | Setting::UefiNetworkStack
            | Setting::WakeOnLan => Domain::closed(TOGGLE),
            Setting::BootMode => Domain::closed(&["UEFI", "Legacy"]),
            Setting::SataMode => Domain::open(&["AHCI", "RAID"]),
            Setting::WarningsPolicy => Domain::closed(&["ContinueOnWarning", "PromptOnWarning"]),
        }
    }

    pub fn validate(&self, value: &str) -> SchemaResult<()> {
        let domain = self.domain();
        if domain.contains(value) {
            return Ok(());
        }

        Err(SchemaError::InvalidValue {
            setting: *self,
            value: value.to_string(),
            expected: domain.describe(),
        })
    }
}

impl FromStr for Setting {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Setting::from_name(s).ok_or_else(|| SchemaError::UnknownKey(s.to_string()))
    }
}
