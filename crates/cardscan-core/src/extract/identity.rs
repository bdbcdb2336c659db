use crate::extract::address::{address_block_lines, is_address_line, Denylist};
use crate::extract::rules::{words, ExtractRules};
use std::collections::BTreeSet;

const COMPANY_MARKERS: &[&str] = &[
    "sdn",
    "bhd",
    "berhad",
    "ltd",
    "limited",
    "inc",
    "llc",
    "corp",
    "corporation",
    "pte",
    "plc",
    "gmbh",
    "enterprise",
    "holdings",
];

const TITLE_WORDS: &[&str] = &[
    "manager",
    "director",
    "executive",
    "engineer",
    "officer",
    "consultant",
    "president",
    "founder",
    "ceo",
    "cto",
    "cfo",
    "coo",
    "head",
    "assistant",
    "supervisor",
    "specialist",
    "analyst",
    "designer",
    "developer",
    "partner",
    "accountant",
];

const MIN_NAME_WORDS: usize = 2;
const MAX_NAME_WORDS: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityGuess {
    pub name: Option<String>,
    pub job_title: Option<String>,
    pub company: Option<String>,
}

/// Guesses company, job title and person name from unconsumed lines.
///
/// Each line is claimed by at most one field; company is tried first, then
/// title, then name. Lines the address reconstructor would take as part of an
/// open block are never guessed as a name. `denylist` holds the caller's
/// tokens; guessed company and title words are added to it before the address
/// block is worked out.
pub fn guess_identity(
    lines: &[String],
    consumed: &BTreeSet<usize>,
    rules: &ExtractRules,
    denylist: &Denylist,
) -> IdentityGuess {
    let candidates: Vec<(usize, &str)> = lines
        .iter()
        .enumerate()
        .filter(|(idx, _)| !consumed.contains(idx))
        .map(|(idx, line)| (idx, line.as_str()))
        .collect();
    let mut claimed = BTreeSet::new();

    let company = claim(&candidates, &mut claimed, |_, line| {
        has_any_word(line, COMPANY_MARKERS)
    });
    let job_title = claim(&candidates, &mut claimed, |_, line| {
        has_any_word(line, TITLE_WORDS)
    });

    let mut block_denylist = denylist.clone();
    for value in [&company, &job_title].into_iter().flatten() {
        block_denylist.extend_from_value(value);
    }
    let address_lines = address_block_lines(lines, consumed, rules, &block_denylist);
    let name = claim(&candidates, &mut claimed, |idx, line| {
        !address_lines.contains(&idx) && looks_like_name(line, rules)
    });

    IdentityGuess {
        name,
        job_title,
        company,
    }
}

fn claim(
    candidates: &[(usize, &str)],
    claimed: &mut BTreeSet<usize>,
    accept: impl Fn(usize, &str) -> bool,
) -> Option<String> {
    let (idx, line) = candidates
        .iter()
        .find(|(idx, line)| !claimed.contains(idx) && accept(*idx, *line))?;
    claimed.insert(*idx);
    Some(line.to_string())
}

fn has_any_word(line: &str, vocabulary: &[&str]) -> bool {
    words(line).any(|word| vocabulary.contains(&word.as_str()))
}

fn looks_like_name(line: &str, rules: &ExtractRules) -> bool {
    if line.contains('@') || line.chars().any(|ch| ch.is_ascii_digit()) {
        return false;
    }
    if is_address_line(line, rules) {
        return false;
    }
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if !(MIN_NAME_WORDS..=MAX_NAME_WORDS).contains(&tokens.len()) {
        return false;
    }
    tokens.iter().all(|token| {
        token.chars().any(char::is_alphabetic)
            && token
                .chars()
                .all(|ch| ch.is_alphabetic() || matches!(ch, '.' | '\'' | '-' | ','))
    })
}

#[cfg(test)]
mod tests {
    use super::guess_identity;
    use crate::extract::address::Denylist;
    use crate::extract::rules::ExtractRules;
    use crate::text::split_lines;
    use std::collections::BTreeSet;

    fn guess(text: &str, consumed: &[usize]) -> super::IdentityGuess {
        let lines = split_lines(text);
        let consumed: BTreeSet<usize> = consumed.iter().copied().collect();
        guess_identity(&lines, &consumed, &ExtractRules::default(), &Denylist::new())
    }

    #[test]
    fn guesses_each_field_from_distinct_lines() {
        let guess = guess("Rachel Tan\nSales Manager\nPSG Sdn. Bhd.\nLot 210 / EM4088,", &[]);
        assert_eq!(guess.name.as_deref(), Some("Rachel Tan"));
        assert_eq!(guess.job_title.as_deref(), Some("Sales Manager"));
        assert_eq!(guess.company.as_deref(), Some("PSG Sdn. Bhd."));
    }

    #[test]
    fn skips_consumed_and_address_lines() {
        let guess = guess(
            "Email Add : rachel@psg.com.my\nJalan Kampung Jawa\nSales Manager\nAhmad bin Ali",
            &[0],
        );
        assert_eq!(guess.name.as_deref(), Some("Ahmad bin Ali"));
        assert_eq!(guess.job_title.as_deref(), Some("Sales Manager"));
        assert!(guess.company.is_none());
    }

    #[test]
    fn address_continuations_are_not_names() {
        let guess = guess("Lot 210 / EM4088,\nTaman Sri Andalas,\nBukit Raja\n41200 Klang", &[]);
        assert!(guess.name.is_none());
    }

    #[test]
    fn caller_denylist_closes_block_before_name_line() {
        let lines = split_lines("Jalan Kampung Jawa\nVisit us 24/7\nAhmad bin Ali");
        let mut denylist = Denylist::new();
        denylist.extend_from_value("visit");
        let guess = guess_identity(&lines, &BTreeSet::new(), &ExtractRules::default(), &denylist);
        assert_eq!(guess.name.as_deref(), Some("Ahmad bin Ali"));
    }

    #[test]
    fn single_words_and_numbers_are_not_names() {
        let guess = guess("Welcome\nSuite 12 Tower B\nwww.example.com", &[]);
        assert!(guess.name.is_none());
    }
}
