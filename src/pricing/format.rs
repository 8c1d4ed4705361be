// src/pricing/format.rs

/// Shown in any price cell that has no matching package.
pub const NOT_AVAILABLE: &str = "N/A";

const CURRENCY: &str = "VNĐ";
const GROUP_SEPARATOR: char = ',';

/// Formats a whole-unit price, e.g. `2500000` -> `"2,500,000 VNĐ"`.
pub fn format_price(price: u64) -> String {
    format!("{} {CURRENCY}", group_digits(price))
}

pub fn format_limit_post(limit_post: Option<u32>) -> String {
    match limit_post {
        Some(n) => group_digits(u64::from(n)),
        None => "Unlimited".to_string(),
    }
}

fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }

    out
}
