//! Digit grouping taken from the user's locale.

use num_format::Locale;

/// Used when the system locale is unknown or has no CLDR data.
pub const FALLBACK_GROUP_SEPARATOR: &str = ",";

/// Thousands separator for a locale name.
///
/// Accepts BCP 47 tags (`de-DE`) and POSIX names (`de_DE.UTF-8`). Falls back
/// from the full tag to its language when only the language is known.
pub fn group_separator_for(name: &str) -> Option<&'static str> {
    let tag = name.split(['.', '@']).next()?.replace('_', "-");
    if tag.is_empty() {
        return None;
    }

    let locale = Locale::from_name(&tag)
        .or_else(|_| Locale::from_name(tag.split('-').next().unwrap_or_default()))
        .ok()?;
    Some(locale.separator())
}

/// Thousands separator of the current user's locale.
pub fn system_group_separator() -> String {
    sys_locale::get_locale()
        .as_deref()
        .and_then(group_separator_for)
        .unwrap_or(FALLBACK_GROUP_SEPARATOR)
        .to_string()
}
