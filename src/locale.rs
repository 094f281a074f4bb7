//! Recognised language tags.

/// Language tags accepted by the `generate` command, with English display
/// names. Tags are lowercase BCP-47-like codes; the table is kept sorted.
pub const LANGUAGE_TAGS: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("de-at", "German (Austria)"),
    ("de-ch", "German (Switzerland)"),
    ("de-de", "German (Germany)"),
    ("el", "Greek"),
    ("en", "English"),
    ("en-gb", "English (United Kingdom)"),
    ("en-us", "English (United States)"),
    ("es", "Spanish"),
    ("es-es", "Spanish (Spain)"),
    ("es-mx", "Spanish (Mexico)"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("fr-be", "French (Belgium)"),
    ("fr-ca", "French (Canada)"),
    ("fr-fr", "French (France)"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("pt-br", "Portuguese (Brazil)"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sk", "Slovak"),
    ("sv", "Swedish"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("zh-cn", "Chinese (Simplified)"),
    ("zh-tw", "Chinese (Traditional)"),
];

/// Returns the display name for a recognised tag. Matching is exact and
/// case-sensitive; callers pass the tag as the user typed it.
pub fn lookup(tag: &str) -> Option<&'static str> {
    LANGUAGE_TAGS
        .binary_search_by(|(t, _)| t.cmp(&tag))
        .ok()
        .map(|idx| LANGUAGE_TAGS[idx].1)
}
