use itertools::Itertools;

/// Split `input` on `separator` and return the two trimmed halves, but only when the input holds
/// exactly two fields.
///
/// # Example
///
/// ```
/// use quickpxe_util::split::split_exact_pair;
/// assert_eq!(split_exact_pair(" BootMode , UEFI Only ", ','), Some(("BootMode", "UEFI Only")));
/// assert_eq!(split_exact_pair("a,b,c", ','), None);
/// assert_eq!(split_exact_pair("a", ','), None);
/// ```
pub fn split_exact_pair(input: &str, separator: char) -> Option<(&str, &str)> {
    input
        .split(separator)
        .map(str::trim)
        .collect_tuple::<(&str, &str)>()
}

/// Split a `KEY=VALUE` assignment on the first `=`, trimming both sides. Keys must be non-empty.
pub fn split_assignment(input: &str) -> Option<(&str, &str)> {
    let (key, value) = input.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

/// The text after the last `.` of a file name. A name without a dot is its own extension.
pub fn file_extension(filename: &str) -> &str {
    filename.rsplit_once('.').map_or(filename, |(_, ext)| ext)
}

#[cfg(test)]
mod test {
    use crate::split::{file_extension, split_assignment, split_exact_pair};
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_pair() {
        assert_eq!(split_exact_pair("Key,Value", ','), Some(("Key", "Value")));
        assert_eq!(split_exact_pair("Key,", ','), Some(("Key", "")));
        assert_eq!(split_exact_pair("Key,Value,Extra", ','), None);
    }

    #[test]
    fn assignment() {
        assert_eq!(split_assignment("SecureBoot=Disabled"), Some(("SecureBoot", "Disabled")));
        assert_eq!(split_assignment("A=b=c"), Some(("A", "b=c")));
        assert_eq!(split_assignment("=Disabled"), None);
        assert_eq!(split_assignment("SecureBoot"), None);
    }

    #[test]
    fn extension() {
        assert_eq!(file_extension("config.cctk"), "cctk");
        assert_eq!(file_extension("my.config.REPSET"), "REPSET");
        assert_eq!(file_extension("cctk"), "cctk");
        assert_eq!(file_extension(""), "");
        assert_eq!(file_extension("trailing."), "");
    }
}
