//! Indian-locale number formatting for rendered amounts.
//!
//! Amounts use lakh/crore digit grouping (`10,00,000` rather than
//! `1,000,000`). The standard-14 Helvetica fonts are WinAnsi-encoded and
//! cannot represent U+20B9, so amounts carry the `Rs.` marker instead of
//! the rupee glyph.

/// Currency marker prefixed to every formatted amount.
pub const RUPEE: &str = "Rs.";

/// Format a monetary amount with Indian grouping and the `Rs.` marker.
///
/// Whole amounts render without decimals; fractional amounts render with
/// exactly two decimal places (`Rs. 1,234.50`).
pub fn format_inr(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_indian(int_part);
    if frac_part == "00" {
        format!("{} {}{}", RUPEE, sign, grouped)
    } else {
        format!("{} {}{}.{}", RUPEE, sign, grouped, frac_part)
    }
}

/// Format a plain count (share counts etc.) with Indian grouping.
pub fn format_count(n: u64) -> String {
    group_indian(&n.to_string())
}

/// Format a percentage rate, dropping a trailing `.0` for whole values.
pub fn format_percent(rate: f64) -> String {
    format!("{}%", rate)
}

/// Apply Indian digit grouping to a string of decimal digits: the last
/// three digits form one group, every preceding pair another.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let bytes = head.as_bytes();
    let mut end = bytes.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
