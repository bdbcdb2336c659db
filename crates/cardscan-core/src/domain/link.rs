use crate::domain::country::CountryCode;
use crate::domain::phone::{normalize_phone, to_dial_form};

const WHATSAPP_BASE_URL: &str = "https://wa.me/";

pub fn tel_uri(raw: &str, country: &CountryCode) -> Option<String> {
    storage_with_digits(raw, country).map(|storage| format!("tel:{storage}"))
}

pub fn sms_uri(raw: &str, country: &CountryCode) -> Option<String> {
    storage_with_digits(raw, country).map(|storage| format!("sms:{storage}"))
}

/// `https://wa.me/<dial form>`; WhatsApp rejects the `+`.
pub fn whatsapp_url(raw: &str, country: &CountryCode) -> Option<String> {
    let dial = to_dial_form(raw, country);
    if dial.is_empty() {
        return None;
    }
    Some(format!("{WHATSAPP_BASE_URL}{dial}"))
}

fn storage_with_digits(raw: &str, country: &CountryCode) -> Option<String> {
    let storage = normalize_phone(raw, country);
    if !storage.chars().any(|ch| ch.is_ascii_digit()) {
        return None;
    }
    Some(storage)
}
