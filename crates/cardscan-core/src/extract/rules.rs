use crate::error::CoreError;

pub const DEFAULT_MOBILE_LABELS: &[&str] = &["mobile"];
pub const DEFAULT_OFFICE_LABELS: &[&str] = &["tel", "telephone"];
pub const DEFAULT_FAX_LABELS: &[&str] = &["fax"];
pub const DEFAULT_ADDRESS_KEYWORDS: &[&str] = &[
    "lot", "no.", "jalan", "jln", "kampung", "kg", "selangor", "klang",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleList {
    MobileLabels,
    OfficeLabels,
    FaxLabels,
    AddressKeywords,
    Denylist,
}

/// Line-classification tokens. Labels and keywords match as case-insensitive
/// substrings; denylist entries match whole words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractRules {
    pub mobile_labels: Vec<String>,
    pub office_labels: Vec<String>,
    pub fax_labels: Vec<String>,
    pub address_keywords: Vec<String>,
    pub denylist: Vec<String>,
}

impl Default for ExtractRules {
    fn default() -> Self {
        Self {
            mobile_labels: owned(DEFAULT_MOBILE_LABELS),
            office_labels: owned(DEFAULT_OFFICE_LABELS),
            fax_labels: owned(DEFAULT_FAX_LABELS),
            address_keywords: owned(DEFAULT_ADDRESS_KEYWORDS),
            denylist: Vec::new(),
        }
    }
}

impl ExtractRules {
    pub fn add(&mut self, list: RuleList, raw: &str) -> Result<(), CoreError> {
        let token = normalize_token(raw)?;
        let target = self.list_mut(list);
        if !target.contains(&token) {
            target.push(token);
        }
        Ok(())
    }

    pub fn list(&self, list: RuleList) -> &[String] {
        match list {
            RuleList::MobileLabels => &self.mobile_labels,
            RuleList::OfficeLabels => &self.office_labels,
            RuleList::FaxLabels => &self.fax_labels,
            RuleList::AddressKeywords => &self.address_keywords,
            RuleList::Denylist => &self.denylist,
        }
    }

    fn list_mut(&mut self, list: RuleList) -> &mut Vec<String> {
        match list {
            RuleList::MobileLabels => &mut self.mobile_labels,
            RuleList::OfficeLabels => &mut self.office_labels,
            RuleList::FaxLabels => &mut self.fax_labels,
            RuleList::AddressKeywords => &mut self.address_keywords,
            RuleList::Denylist => &mut self.denylist,
        }
    }
}

pub fn normalize_token(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyToken);
    }
    Ok(trimmed.to_lowercase())
}

/// `haystack` must already be lowercased.
pub(crate) fn contains_any(haystack: &str, tokens: &[String]) -> bool {
    tokens.iter().any(|token| haystack.contains(token.as_str()))
}

/// Lowercased alphanumeric words of `value`.
pub(crate) fn words(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(|ch: char| !ch.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
}

fn owned(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|token| token.to_string()).collect()
}
