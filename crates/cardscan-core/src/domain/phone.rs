use crate::domain::country::CountryCode;

const MIN_VALID_DIGITS: usize = 8;
const MAX_VALID_DIGITS: usize = 15;

/// Keeps ASCII digits and a leading `+`; everything else is dropped.
pub fn clean_phone(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut out = String::with_capacity(trimmed.len());
    if trimmed.starts_with('+') {
        out.push('+');
    }
    out.extend(trimmed.chars().filter(|ch| ch.is_ascii_digit()));
    out
}

/// Canonical storage form: `+<country code><digits>`.
///
/// Already-qualified numbers are kept, a bare country code gains a `+`, a
/// local trunk `0` is replaced by the country code, and anything else is
/// prefixed with it. Input without digits or `+` yields an empty string.
pub fn normalize_phone(raw: &str, country: &CountryCode) -> String {
    let cleaned = clean_phone(raw);
    if cleaned.is_empty() || cleaned.starts_with('+') {
        return cleaned;
    }

    if cleaned.starts_with(country.digits()) {
        return format!("+{cleaned}");
    }

    let national = cleaned.strip_prefix('0').unwrap_or(&cleaned);
    format!("{}{national}", country.with_plus())
}

/// Dial form used by click-to-call and messaging links: the storage form
/// without its `+`.
pub fn to_dial_form(raw: &str, country: &CountryCode) -> String {
    let storage = normalize_phone(raw, country);
    match storage.strip_prefix('+') {
        Some(digits) => digits.to_string(),
        None => storage,
    }
}

/// True when `raw` is a plausible number dialable under `country`.
pub fn is_valid_phone_number(raw: &str, country: &CountryCode) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }

    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '0'..='9' | ' ' | '-' | '.' | '(' | ')' | '/' => {}
            '+' if idx == 0 => {}
            _ => return false,
        }
    }

    let storage = normalize_phone(trimmed, country);
    let digits = storage.chars().filter(|ch| ch.is_ascii_digit()).count();
    (MIN_VALID_DIGITS..=MAX_VALID_DIGITS).contains(&digits)
        && storage.starts_with(&country.with_plus())
}
