use crate::domain::Phones;
use crate::extract::rules::{contains_any, ExtractRules};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex")
});

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{2,3}[-.\s]?[0-9]{3,4}[-.\s]?[0-9]{4}").expect("valid phone regex")
});

/// Email and labeled phone numbers, plus the indices of the lines they came
/// from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledFields {
    pub email: Option<String>,
    pub phones: Phones,
    pub consumed: BTreeSet<usize>,
}

pub fn extract_labeled_fields(lines: &[String], rules: &ExtractRules) -> LabeledFields {
    let mut out = LabeledFields::default();

    for (idx, line) in lines.iter().enumerate() {
        if let Some(found) = EMAIL_REGEX.find(line) {
            if out.email.is_none() {
                out.email = Some(found.as_str().to_string());
            }
            out.consumed.insert(idx);
        }

        let lower = line.to_lowercase();
        let is_mobile = contains_any(&lower, &rules.mobile_labels);
        let is_office = contains_any(&lower, &rules.office_labels);
        let is_fax = contains_any(&lower, &rules.fax_labels);
        if !(is_mobile || is_office || is_fax) {
            continue;
        }

        let Some(number) = find_phone(line) else {
            continue;
        };

        if is_mobile {
            if out.phones.mobile1.is_none() {
                out.phones.mobile1 = Some(number.clone());
            } else if out.phones.mobile2.is_none() {
                out.phones.mobile2 = Some(number.clone());
            }
        }
        // office and fax keep the last labeled line
        if is_office {
            out.phones.office = Some(number.clone());
        }
        if is_fax {
            out.phones.fax = Some(number);
        }
        out.consumed.insert(idx);
    }

    out
}

/// First loose digit-group match in `line`, with `.` and whitespace
/// separators rewritten to `-`.
pub fn find_phone(line: &str) -> Option<String> {
    let found = PHONE_REGEX.find(line)?;
    Some(
        found
            .as_str()
            .chars()
            .map(|ch| if ch == '.' || ch.is_whitespace() { '-' } else { ch })
            .collect(),
    )
}
