//! Thai-locale formatting utilities
//!
//! Documents are printed for Thai warehouses:
//! - Currency with thousands separators and two decimals
//! - Dates in the Buddhist era (Gregorian year + 543)
//! - Character-based truncation for tiny sticker fields

use chrono::Datelike;

/// Offset between the Gregorian and Buddhist-era calendars
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// Format an amount as `30,000.00`
///
/// Non-finite amounts render as `0.00`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "0.00".to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (fixed.as_str(), "00"),
    };

    // -0.001 rounds to 0.00, which must not print as "-0.00"
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
}

/// Format a quantity: whole numbers without decimals, fractions with two
pub fn format_quantity(quantity: f64) -> String {
    if !quantity.is_finite() {
        return "0".to_string();
    }
    if quantity.fract() == 0.0 {
        let whole = format!("{:.0}", quantity.abs());
        let sign = if quantity < 0.0 { "-" } else { "" };
        format!("{}{}", sign, group_thousands(&whole))
    } else {
        format_currency(quantity)
    }
}

/// Long Thai date: `15 มกราคม 2567`
pub fn format_thai_date<D: Datelike>(date: &D) -> String {
    format!(
        "{} {} {}",
        date.day(),
        THAI_MONTHS[date.month0() as usize],
        date.year() + BUDDHIST_ERA_OFFSET
    )
}

/// Short date with 2-digit Buddhist-era year: `15/01/67`
pub fn format_short_date<D: Datelike>(date: &D) -> String {
    format!(
        "{:02}/{:02}/{:02}",
        date.day(),
        date.month(),
        (date.year() + BUDDHIST_ERA_OFFSET).rem_euclid(100)
    )
}

/// Cut `text` to `max_len` characters, ending with `...` when shortened
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_len.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
