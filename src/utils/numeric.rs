/// Parses a display value such as "12,000" or "3권" into a count by keeping
/// only its ASCII digits. The zero default is a stated contract: an empty or
/// entirely non-numeric value (or one overflowing u64) counts as 0, it never
/// fails.
pub fn parse_count(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse::<u64>().unwrap_or(0)
}

// Groups digits in thousands, e.g. 12000 -> "12,000".
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
