use crate::error::{Result, SyncError};
use cardscan_core::domain::{normalize_phone, CountryCode, PhoneSlot, ScannedCard};
use chrono::{DateTime, Utc};
use std::io::Write;

pub fn export_vcf(cards: &[ScannedCard], country: &CountryCode) -> Result<String> {
    let mut entries: Vec<&ScannedCard> = cards.iter().collect();
    entries.sort_by_key(|card| card.display_name().to_ascii_lowercase());

    let mut out = String::new();
    for card in entries {
        out.push_str(&render_card(card, country)?);
    }
    Ok(out)
}

pub fn write_vcf<W: Write>(
    writer: &mut W,
    cards: &[ScannedCard],
    country: &CountryCode,
) -> Result<()> {
    let rendered = export_vcf(cards, country)?;
    writer.write_all(rendered.as_bytes())?;
    Ok(())
}

fn render_card(card: &ScannedCard, country: &CountryCode) -> Result<String> {
    let fields = &card.fields;
    let mut out = String::new();
    out.push_str("BEGIN:VCARD\r\n");
    out.push_str("VERSION:3.0\r\n");
    out.push_str(&format!("FN:{}\r\n", escape_vcard_value(card.display_name())));

    if let Some(name) = &fields.name {
        let (given, family) = split_name(name);
        out.push_str(&format!(
            "N:{};{};;;\r\n",
            escape_vcard_value(family),
            escape_vcard_value(given)
        ));
    } else {
        out.push_str("N:;;;;\r\n");
    }
    if let Some(company) = &fields.company {
        out.push_str(&format!("ORG:{}\r\n", escape_vcard_value(company)));
    }
    if let Some(title) = &fields.job_title {
        out.push_str(&format!("TITLE:{}\r\n", escape_vcard_value(title)));
    }
    if let Some(email) = &fields.email {
        out.push_str(&format!(
            "EMAIL;TYPE=INTERNET:{}\r\n",
            escape_vcard_value(email)
        ));
    }
    for (slot, raw) in fields.phones.iter() {
        let storage = normalize_phone(raw, country);
        if storage.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "TEL;TYPE={}:{}\r\n",
            tel_type(slot),
            escape_vcard_value(&storage)
        ));
    }
    if let Some(address) = &fields.address {
        out.push_str(&format!(
            "ADR;TYPE=WORK:;;{};;;;\r\n",
            escape_vcard_value(address)
        ));
    }
    out.push_str(&format!("UID:{}\r\n", card.id));
    out.push_str(&format!("REV:{}\r\n", format_rev(card.scanned_at)?));
    out.push_str("END:VCARD\r\n");
    Ok(out)
}

fn tel_type(slot: PhoneSlot) -> &'static str {
    match slot {
        PhoneSlot::Mobile1 | PhoneSlot::Mobile2 => "CELL",
        PhoneSlot::Office => "WORK,VOICE",
        PhoneSlot::Fax => "WORK,FAX",
    }
}

/// Last word is the family name; single-word names have no given part.
fn split_name(name: &str) -> (&str, &str) {
    let trimmed = name.trim();
    match trimmed.rsplit_once(char::is_whitespace) {
        Some((given, family)) => (given.trim_end(), family),
        None => ("", trimmed),
    }
}

fn format_rev(scanned_at: i64) -> Result<String> {
    let timestamp = DateTime::<Utc>::from_timestamp(scanned_at, 0)
        .ok_or(SyncError::InvalidTimestamp(scanned_at))?;
    Ok(timestamp.format("%Y%m%dT%H%M%SZ").to_string())
}

fn escape_vcard_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\n"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            _ => out.push(ch),
        }
    }
    out
}
