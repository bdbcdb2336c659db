use crate::domain::ids::CardId;
use serde::{Deserialize, Serialize};

pub const FALLBACK_DISPLAY_NAME: &str = "Business Card";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneSlot {
    Mobile1,
    Mobile2,
    Office,
    Fax,
}

impl PhoneSlot {
    pub fn label(self) -> &'static str {
        match self {
            PhoneSlot::Mobile1 => "mobile1",
            PhoneSlot::Mobile2 => "mobile2",
            PhoneSlot::Office => "office",
            PhoneSlot::Fax => "fax",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phones {
    pub mobile1: Option<String>,
    pub mobile2: Option<String>,
    pub office: Option<String>,
    pub fax: Option<String>,
}

impl Phones {
    pub fn get(&self, slot: PhoneSlot) -> Option<&str> {
        match slot {
            PhoneSlot::Mobile1 => self.mobile1.as_deref(),
            PhoneSlot::Mobile2 => self.mobile2.as_deref(),
            PhoneSlot::Office => self.office.as_deref(),
            PhoneSlot::Fax => self.fax.as_deref(),
        }
    }

    /// Filled slots in mobile1, mobile2, office, fax order.
    pub fn iter(&self) -> impl Iterator<Item = (PhoneSlot, &str)> + '_ {
        [
            PhoneSlot::Mobile1,
            PhoneSlot::Mobile2,
            PhoneSlot::Office,
            PhoneSlot::Fax,
        ]
        .into_iter()
        .filter_map(|slot| self.get(slot).map(|value| (slot, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Best-effort contact fields read off one card, pending human review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub name: Option<String>,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phones: Phones,
    pub address: Option<String>,
}

impl ExtractedFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.job_title.is_none()
            && self.company.is_none()
            && self.email.is_none()
            && self.phones.is_empty()
            && self.address.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannedCard {
    pub id: CardId,
    pub scanned_at: i64,
    pub fields: ExtractedFields,
}

impl ScannedCard {
    pub fn new(scanned_at: i64, fields: ExtractedFields) -> Self {
        Self {
            id: CardId::new(),
            scanned_at,
            fields,
        }
    }

    pub fn display_name(&self) -> &str {
        self.fields
            .name
            .as_deref()
            .or(self.fields.company.as_deref())
            .or(self.fields.email.as_deref())
            .unwrap_or(FALLBACK_DISPLAY_NAME)
    }
}
