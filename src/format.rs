//! Display formatting for salaries, dates, and search highlighting.

use chrono::{DateTime, Local, Utc};

/// Format an amount as whole US dollars, e.g. `$95,000`.
pub fn currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}")
}

/// Salary cell text.
pub fn salary_label(salary: &str) -> String {
    if salary.trim().is_empty() {
        return "Not specified".to_string();
    }
    match crate::models::parse_amount(salary) {
        Some(amount) => currency(amount),
        None => salary.to_string(),
    }
}

/// Currency text for a statistics figure, `N/A` when there is nothing to show.
pub fn amount_or_na(amount: f64) -> String {
    if amount > 0.0 { currency(amount) } else { "N/A".to_string() }
}

/// Creation date as `Jan 15, 2024` in local time.
pub fn date_label(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(d) => d.with_timezone(&Local).format("%b %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

/// A run of text, flagged when it matches the search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

/// Split text into matched and unmatched runs, comparing case-insensitively.
pub fn highlight_segments<'a>(text: &'a str, term: &str) -> Vec<Segment<'a>> {
    if term.is_empty() || text.is_empty() {
        return vec![Segment { text, matched: false }];
    }

    // Offsets into the lowercased text only line up with `text` when every
    // character keeps its byte length.
    let unmatched = || vec![Segment { text, matched: false }];
    if !text.chars().all(|c| c.to_lowercase().map(char::len_utf8).sum::<usize>() == c.len_utf8()) {
        return unmatched();
    }
    let haystack = text.to_lowercase();
    let needle = term.to_lowercase();

    let mut segments = Vec::new();
    let mut cursor = 0;
    for (start, matched) in haystack.match_indices(&needle) {
        let end = start + matched.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return unmatched();
        }
        if start > cursor {
            segments.push(Segment {
                text: &text[cursor..start],
                matched: false,
            });
        }
        segments.push(Segment {
            text: &text[start..end],
            matched: true,
        });
        cursor = end;
    }
    if cursor < text.len() {
        segments.push(Segment {
            text: &text[cursor..],
            matched: false,
        });
    }

    segments
}
