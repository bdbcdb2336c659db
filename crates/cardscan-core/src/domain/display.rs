//! Presentational phone formatting.
//!
//! Grouping is keyed on the calling-code prefix of the digit sequence. Anything
//! not recognized (unknown prefix, unexpected length, stray characters) comes
//! back exactly as given.

pub fn format_phone_for_display(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !is_formattable(trimmed) {
        return raw.to_string();
    }

    let digits: String = trimmed.chars().filter(|ch| ch.is_ascii_digit()).collect();
    let formatted = if !trimmed.starts_with('+') && digits.starts_with('0') {
        format_malaysian_local(&digits)
    } else {
        format_international(&digits)
    };
    formatted.unwrap_or_else(|| raw.to_string())
}

fn is_formattable(value: &str) -> bool {
    value.char_indices().all(|(idx, ch)| match ch {
        '0'..='9' | ' ' | '-' | '.' | '(' | ')' => true,
        '+' => idx == 0,
        _ => false,
    })
}

fn format_international(digits: &str) -> Option<String> {
    if let Some(national) = digits.strip_prefix("886") {
        return format_taiwan(national);
    }
    if let Some(national) = digits.strip_prefix("86") {
        return format_china(national);
    }
    if let Some(national) = digits.strip_prefix("60") {
        let groups = malaysia_groups(national)?;
        return Some(format!("+60 {}-{} {}", groups[0], groups[1], groups[2]));
    }
    if let Some(national) = digits.strip_prefix("65") {
        let groups = split_groups(national, &[4, 4])?;
        return Some(format!("+65 {} {}", groups[0], groups[1]));
    }
    if let Some(national) = digits.strip_prefix("62") {
        return format_indonesia(national);
    }
    if let Some(national) = digits.strip_prefix("66") {
        return format_thailand(national);
    }
    if let Some(national) = digits.strip_prefix('1') {
        let groups = split_groups(national, &[3, 3, 4])?;
        return Some(format!("+1 ({}) {}-{}", groups[0], groups[1], groups[2]));
    }
    None
}

fn format_malaysian_local(digits: &str) -> Option<String> {
    let national = digits.strip_prefix('0')?;
    let groups = malaysia_groups(national)?;
    Some(format!("0{}-{} {}", groups[0], groups[1], groups[2]))
}

fn malaysia_groups(national: &str) -> Option<Vec<&str>> {
    let sizes: &[usize] = match (national.as_bytes().first().copied()?, national.len()) {
        (b'1', 9) => &[2, 3, 4],
        (b'1', 10) => &[2, 4, 4],
        (b'3', 9) => &[1, 4, 4],
        (b'4'..=b'9', 8) => &[1, 3, 4],
        (b'4'..=b'9', 9) => &[2, 3, 4],
        _ => return None,
    };
    split_groups(national, sizes)
}

fn format_taiwan(national: &str) -> Option<String> {
    if national.starts_with('9') {
        let groups = split_groups(national, &[3, 3, 3])?;
        return Some(format!("+886 {} {} {}", groups[0], groups[1], groups[2]));
    }
    let groups = split_groups(national, &[1, 4, 4])?;
    Some(format!("+886 {} {} {}", groups[0], groups[1], groups[2]))
}

fn format_china(national: &str) -> Option<String> {
    if !national.starts_with('1') {
        return None;
    }
    let groups = split_groups(national, &[3, 4, 4])?;
    Some(format!("+86 {} {} {}", groups[0], groups[1], groups[2]))
}

fn format_indonesia(national: &str) -> Option<String> {
    if !national.starts_with('8') || !(9..=12).contains(&national.len()) {
        return None;
    }
    let groups = split_groups(national, &[3, 4, national.len() - 7])?;
    Some(format!("+62 {}-{}-{}", groups[0], groups[1], groups[2]))
}

fn format_thailand(national: &str) -> Option<String> {
    let groups = match national.len() {
        9 => split_groups(national, &[2, 3, 4])?,
        8 => split_groups(national, &[1, 3, 4])?,
        _ => return None,
    };
    Some(format!("+66 {} {} {}", groups[0], groups[1], groups[2]))
}

// Callers only pass ASCII digit strings, so byte offsets are char offsets.
fn split_groups<'a>(digits: &'a str, sizes: &[usize]) -> Option<Vec<&'a str>> {
    if digits.len() != sizes.iter().sum::<usize>() {
        return None;
    }
    let mut groups = Vec::with_capacity(sizes.len());
    let mut start = 0;
    for size in sizes {
        groups.push(&digits[start..start + size]);
        start += size;
    }
    Some(groups)
}
