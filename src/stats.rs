use serde::Serialize;

/// A label/value pair shown on the card's metrics panel.
///
/// Values are free-form display text ("25,000+", "5 Apps", "∞").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    pub label: String,
    pub value: String,
}

impl StatEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Stats a fresh card starts with.
pub fn default_panel() -> Vec<StatEntry> {
    vec![
        StatEntry::new("Lines of Code", "25,000+"),
        StatEntry::new("Commits", "450+"),
        StatEntry::new("Coffees", "∞"),
        StatEntry::new("Bugs Fixed", "102"),
        StatEntry::new("Shipped", "5 Apps"),
        StatEntry::new("Buddy", "Co-pilot"),
    ]
}

/// Template a fetched profile is written into. Labels are reset so a
/// user-edited panel does not leak into the fetched numbers.
pub fn fetch_panel() -> Vec<StatEntry> {
    vec![
        StatEntry::new("Lines of Code", "0"),
        StatEntry::new("Commits", "0"),
        StatEntry::new("Coffee Cups", "∞"),
        StatEntry::new("Bugs Fixed", "0"),
        StatEntry::new("Shipped", "0"),
        StatEntry::new("Buddy", "Gemini"),
    ]
}

/// Formats `n` with `,` every three digits (12345 -> "12,345").
pub fn with_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(with_thousands(0), "0");
        assert_eq!(with_thousands(999), "999");
        assert_eq!(with_thousands(1000), "1,000");
        assert_eq!(with_thousands(2650), "2,650");
        assert_eq!(with_thousands(1234567), "1,234,567");
    }

    #[test]
    fn panels_have_six_entries() {
        assert_eq!(default_panel().len(), 6);
        assert_eq!(fetch_panel().len(), 6);
        assert_eq!(fetch_panel()[0].label, "Lines of Code");
    }
}
