use crate::extract::rules::{contains_any, words, ExtractRules};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static POSTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{5}").expect("valid postcode regex"));

const MIN_DENY_WORD_CHARS: usize = 3;
const DENY_STOPWORDS: &[&str] = &["and", "the", "for"];

/// Words that stop an address block from swallowing the next line.
///
/// Built from values already attributed to other fields (name, title,
/// company) plus configured tokens. Matching is by whole word, ignoring case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Denylist {
    words: BTreeSet<String>,
}

impl Denylist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend_from_value(&mut self, value: &str) {
        for word in words(value) {
            if word.chars().count() < MIN_DENY_WORD_CHARS || DENY_STOPWORDS.contains(&word.as_str())
            {
                continue;
            }
            self.words.insert(word);
        }
    }

    pub fn matches(&self, line: &str) -> bool {
        !self.words.is_empty() && words(line).any(|word| self.words.contains(&word))
    }
}

pub fn is_address_line(line: &str, rules: &ExtractRules) -> bool {
    contains_any(&line.to_lowercase(), &rules.address_keywords) || POSTCODE_REGEX.is_match(line)
}

/// Indices of the lines that make up the address, in order.
///
/// Consumed lines are skipped entirely. A keyword line opens a block, any
/// following line not hitting the denylist continues it, and the first
/// denylisted non-keyword line closes it. Later keyword lines reopen it.
pub fn address_block_lines(
    lines: &[String],
    consumed: &BTreeSet<usize>,
    rules: &ExtractRules,
    denylist: &Denylist,
) -> BTreeSet<usize> {
    let mut block = BTreeSet::new();
    let mut in_block = false;

    for (idx, line) in lines.iter().enumerate() {
        if consumed.contains(&idx) {
            continue;
        }
        if is_address_line(line, rules) {
            block.insert(idx);
            in_block = true;
        } else if in_block && !denylist.matches(line) {
            block.insert(idx);
        } else {
            in_block = false;
        }
    }
    block
}

/// Joins the address block lines with `", "`, trimming trailing commas.
pub fn reconstruct_address(
    lines: &[String],
    consumed: &BTreeSet<usize>,
    rules: &ExtractRules,
    denylist: &Denylist,
) -> String {
    address_block_lines(lines, consumed, rules, denylist)
        .into_iter()
        .map(|idx| lines[idx].trim_end_matches(|ch: char| ch == ',' || ch.is_whitespace()))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::{address_block_lines, is_address_line, reconstruct_address, Denylist};
    use crate::extract::rules::ExtractRules;
    use crate::text::split_lines;
    use std::collections::BTreeSet;

    fn deny(values: &[&str]) -> Denylist {
        let mut denylist = Denylist::new();
        for value in values {
            denylist.extend_from_value(value);
        }
        denylist
    }

    #[test]
    fn keywords_and_postcodes_mark_address_lines() {
        let rules = ExtractRules::default();
        assert!(is_address_line("Lot 210 / EM4088,", &rules));
        assert!(is_address_line("JLN BUKIT 3", &rules));
        assert!(is_address_line("41200 Klang", &rules));
        assert!(is_address_line("Postcode 50450", &rules));
        assert!(!is_address_line("Rachel Tan", &rules));
    }

    #[test]
    fn continuation_lines_join_until_denylisted() {
        let lines = split_lines(
            "Lot 210 / EM4088,\nTaman Sri Andalas,\nRachel Tan\nSome Other Line",
        );
        let address = reconstruct_address(
            &lines,
            &BTreeSet::new(),
            &ExtractRules::default(),
            &deny(&["Rachel Tan"]),
        );
        assert_eq!(address, "Lot 210 / EM4088, Taman Sri Andalas");
    }

    #[test]
    fn consumed_lines_are_invisible() {
        let lines = split_lines("Jalan Kebun,\nMobile: 012-345 6789\nShah Alam");
        let consumed = BTreeSet::from([1]);
        let address = reconstruct_address(
            &lines,
            &consumed,
            &ExtractRules::default(),
            &Denylist::new(),
        );
        assert_eq!(address, "Jalan Kebun, Shah Alam");
    }

    #[test]
    fn later_keyword_line_reopens_block() {
        let lines = split_lines("No. 5, Jalan Satu\nManager\nPhilip\n40000 Shah Alam");
        let address = reconstruct_address(
            &lines,
            &BTreeSet::new(),
            &ExtractRules::default(),
            &deny(&["Manager"]),
        );
        assert_eq!(address, "No. 5, Jalan Satu, 40000 Shah Alam");
    }

    #[test]
    fn block_lines_skip_consumed_and_closed_lines() {
        let lines = split_lines("Rachel Tan\nLot 5\nMobile: 012-345 6789\nTaman Jaya\nRachel Tan");
        let block = address_block_lines(
            &lines,
            &BTreeSet::from([2]),
            &ExtractRules::default(),
            &deny(&["Rachel Tan"]),
        );
        assert_eq!(block.into_iter().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn no_address_lines_yields_empty_string() {
        let lines = split_lines("Rachel Tan\nManager");
        let address = reconstruct_address(
            &lines,
            &BTreeSet::new(),
            &ExtractRules::default(),
            &Denylist::new(),
        );
        assert!(address.is_empty());
    }

    #[test]
    fn denylist_matches_whole_words_only() {
        let denylist = deny(&["Rachel Tan", "Head of Sales"]);
        assert!(denylist.matches("RACHEL"));
        assert!(denylist.matches("Tan Sri"));
        assert!(!denylist.matches("Taman Tun"));
        assert!(!denylist.matches("Block of flats"));
        assert!(!Denylist::new().matches("anything"));
    }
}
