//! Case-insensitive file name matching.

/// `name` starts with `prefix`, ignoring ASCII case.
#[must_use]
pub fn starts_with_ignore_case(name: &str, prefix: &str) -> bool {
    name.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// `name` ends with `suffix`, ignoring ASCII case.
#[must_use]
pub fn ends_with_ignore_case(name: &str, suffix: &str) -> bool {
    name.len()
        .checked_sub(suffix.len())
        .and_then(|start| name.get(start..))
        .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
}

/// Whether `name` carries `extension` (e.g. `.ipynb`), ignoring case.
#[must_use]
pub fn has_extension(name: &str, extension: &str) -> bool {
    ends_with_ignore_case(name, extension)
}

/// Rewrite the extension's casing to the configured form: `A.IPYNB` -> `A.ipynb`.
///
/// Returns `None` when `name` does not carry `extension` at all.
#[must_use]
pub fn normalize_extension(name: &str, extension: &str) -> Option<String> {
    if !has_extension(name, extension) {
        return None;
    }
    let stem = &name[..name.len() - extension.len()];
    Some(format!("{stem}{extension}"))
}
