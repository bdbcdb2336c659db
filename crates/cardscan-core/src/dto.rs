use crate::domain::{
    format_phone_for_display, normalize_phone, to_dial_form, CardId, CountryCode, ExtractedFields,
    PhoneSlot, ScannedCard,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneDto {
    pub slot: PhoneSlot,
    pub raw: String,
    pub storage: String,
    pub dial: String,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReportDto {
    pub id: CardId,
    pub scanned_at: i64,
    pub display_name: String,
    pub fields: ExtractedFields,
    pub phones: Vec<PhoneDto>,
}

impl ScanReportDto {
    pub fn from_card(card: &ScannedCard, country: &CountryCode) -> Self {
        let phones = card
            .fields
            .phones
            .iter()
            .map(|(slot, raw)| {
                let storage = normalize_phone(raw, country);
                PhoneDto {
                    slot,
                    raw: raw.to_string(),
                    dial: to_dial_form(&storage, country),
                    display: format_phone_for_display(&storage),
                    storage,
                }
            })
            .collect();

        Self {
            id: card.id,
            scanned_at: card.scanned_at,
            display_name: card.display_name().to_string(),
            fields: card.fields.clone(),
            phones,
        }
    }
}
