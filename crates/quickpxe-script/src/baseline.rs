use quickpxe_dialect::{ConfigModel, Dialect, Rendered};
use quickpxe_schema::{Setting, DISABLED, ENABLED};

/// The posture every generated script re-asserts after applying the user's file.
pub const BASELINE: [(Setting, &str); 5] = [
    (Setting::BootMode, "UEFI"),
    (Setting::LegacyOrCsm, DISABLED),
    (Setting::SecureBoot, DISABLED),
    (Setting::UefiNetworkStack, ENABLED),
    (Setting::PxeBoot, ENABLED),
];

pub fn baseline_config() -> ConfigModel {
    ConfigModel::from_canonical(BASELINE).expect("baseline values are within their domains")
}

/// The baseline as a document in the vendor's own format. Settings the vendor cannot express
/// come back as warnings.
pub fn baseline_document(dialect: Dialect) -> Rendered {
    dialect.render(&baseline_config())
}
