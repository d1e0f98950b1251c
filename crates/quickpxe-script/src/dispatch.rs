use quickpxe_dialect::Dialect;
use quickpxe_util::matching::contains_any_ignore_case;

/// Manufacturer patterns of the auto-detect script, in evaluation order. Each row becomes one
/// `findstr /i` line; the first row that matches decides the vendor.
pub const MANUFACTURER_PATTERNS: [(Dialect, &[&str]); 3] = [
    (Dialect::Dell, &["Dell"]),
    (Dialect::Hp, &["HP", "Hewlett"]),
    (Dialect::Lenovo, &["Lenovo"]),
];

/// The vendor the auto-detect script would dispatch to for a given manufacturer string.
pub fn dispatch(manufacturer: &str) -> Option<Dialect> {
    MANUFACTURER_PATTERNS
        .iter()
        .find(|(_, patterns)| contains_any_ignore_case(manufacturer, *patterns))
        .map(|(dialect, _)| *dialect)
}

#[cfg(test)]
mod test {
    use crate::dispatch::dispatch;
    use pretty_assertions::assert_eq;
    use quickpxe_dialect::Dialect;

    #[test]
    fn known_manufacturers() {
        assert_eq!(dispatch("Dell Inc."), Some(Dialect::Dell));
        assert_eq!(dispatch("HP"), Some(Dialect::Hp));
        assert_eq!(dispatch("Hewlett-Packard"), Some(Dialect::Hp));
        assert_eq!(dispatch("LENOVO"), Some(Dialect::Lenovo));
    }

    #[test]
    fn hp_is_checked_before_lenovo() {
        assert_eq!(dispatch("HP Inc."), Some(Dialect::Hp));
        assert_eq!(dispatch("Lenovo (HP reseller)"), Some(Dialect::Hp));
    }

    #[test]
    fn unknown_manufacturer() {
        assert_eq!(dispatch("Microsoft Corporation"), None);
        assert_eq!(dispatch(""), None);
    }
}
