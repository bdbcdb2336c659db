//! Contact-field extraction from OCR text.
//!
//! Pass 1 pulls the email and labeled phone numbers and marks their lines as
//! consumed. The optional identity guess then looks for company, title and
//! name among the rest, leaving address continuation lines alone, and pass 2
//! rebuilds the address from what is left, using every identity value as a
//! denylist for continuation lines.

pub mod address;
pub mod identity;
pub mod labeled;
pub mod rules;

use crate::domain::{ExtractedFields, ScannedCard};
use crate::text::OcrText;

pub use address::{address_block_lines, is_address_line, reconstruct_address, Denylist};
pub use identity::{guess_identity, IdentityGuess};
pub use labeled::{extract_labeled_fields, find_phone, LabeledFields};
pub use rules::{ExtractRules, RuleList};

/// Values the caller already knows about the card holder. They win over
/// guesses and always feed the address denylist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownValues {
    pub name: Option<String>,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub deny: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub rules: ExtractRules,
    pub known: KnownValues,
    pub guess_identity: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            rules: ExtractRules::default(),
            known: KnownValues::default(),
            guess_identity: true,
        }
    }
}

pub fn extract_fields(raw: &str, options: &ExtractOptions) -> ExtractedFields {
    let text = OcrText::parse(raw);
    extract_from_lines(text.lines(), options)
}

pub fn extract_from_lines(lines: &[String], options: &ExtractOptions) -> ExtractedFields {
    let labeled = extract_labeled_fields(lines, &options.rules);

    let known = &options.known;
    let mut denylist = Denylist::new();
    for value in [&known.name, &known.job_title, &known.company]
        .into_iter()
        .flatten()
        .chain(&options.rules.denylist)
        .chain(&known.deny)
    {
        denylist.extend_from_value(value);
    }

    let guess = if options.guess_identity {
        guess_identity(lines, &labeled.consumed, &options.rules, &denylist)
    } else {
        IdentityGuess::default()
    };

    let name = non_empty(known.name.as_deref()).or(guess.name);
    let job_title = non_empty(known.job_title.as_deref()).or(guess.job_title);
    let company = non_empty(known.company.as_deref()).or(guess.company);
    for value in [&name, &job_title, &company].into_iter().flatten() {
        denylist.extend_from_value(value);
    }

    let address = reconstruct_address(lines, &labeled.consumed, &options.rules, &denylist);

    ExtractedFields {
        name,
        job_title,
        company,
        email: labeled.email,
        phones: labeled.phones,
        address: (!address.is_empty()).then_some(address),
    }
}

/// Extracts fields and stamps them as a new card.
pub fn scan_text(raw: &str, options: &ExtractOptions, scanned_at: i64) -> ScannedCard {
    ScannedCard::new(scanned_at, extract_fields(raw, options))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
