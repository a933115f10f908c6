use std::sync::LazyLock;

use regex::Regex;

// Comma grouping must be a proper thousands grouping; otherwise the leading
// digits are read on their own, so "$725,00" is 725.
static DOLLAR_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\s*(\d{1,3}(?:,\d{3})+(?:\.\d{2})?|\d+(?:\.\d{2})?)")
        .expect("valid dollar amount pattern")
});

static PLAIN_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,3}(?:,\d{3})+(?:\.\d{2})?|\d+(?:\.\d{2})?)")
        .expect("valid plain amount pattern")
});

/// Finds the most likely quote total in free-form text.
///
/// Currency-marked figures win, and the largest one is taken since line items
/// are usually smaller than the total. Without any `$` figure, the first number
/// on the first line mentioning "total" is used. Returns `0.0` when nothing
/// usable is found.
pub fn extract_amount(text: &str) -> f64 {
    let dollar_max = DOLLAR_AMOUNT
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .filter_map(|token| parse_amount(token.as_str()))
        .fold(None, |max: Option<f64>, value| {
            Some(max.map_or(value, |current| current.max(value)))
        });

    if let Some(total) = dollar_max {
        return total;
    }

    text.lines()
        .map(str::trim)
        .filter(|line| line.to_lowercase().contains("total"))
        .find_map(|line| {
            PLAIN_AMOUNT
                .captures(line)
                .and_then(|captures| captures.get(1))
                .and_then(|token| parse_amount(token.as_str()))
        })
        .unwrap_or(0.0)
}

fn parse_amount(token: &str) -> Option<f64> {
    token
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Renders a dollar figure the way quotes print them: whole dollars without
/// cents, otherwise two decimals.
pub fn format_dollars(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("${amount:.0}")
    } else {
        format!("${amount:.2}")
    }
}
