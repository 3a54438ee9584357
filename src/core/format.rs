//! Number formatting shared by every value shown in a report.
//!
//! Values are rounded half away from zero to two decimals, then printed in their
//! shortest form: `7.0` prints as `7`, `7.456` as `7.46`. No grouping separators.

/// Rounds to two decimal places, half away from zero. Negative zero collapses to zero.
pub fn round2(value: f64) -> f64 {
    number(value).parse().unwrap_or(value)
}

pub fn number(value: f64) -> String {
    // Split first so the cents come from the exact fractional part; scaling the
    // whole value by 100 loses digits once it nears 2^53.
    let mut whole = value.trunc();
    let mut cents = ((value - whole) * 100.0).round();
    if cents.abs() >= 100.0 {
        whole += cents.signum();
        cents = 0.0;
    }

    let negative = whole < 0.0 || cents < 0.0;
    let whole = whole.abs();
    let cents = cents.abs() as u8;
    if whole == 0.0 && cents == 0 {
        return "0".to_string();
    }

    let sign = if negative { "-" } else { "" };
    match cents {
        0 => format!("{sign}{whole}"),
        c if c % 10 == 0 => format!("{sign}{whole}.{}", c / 10),
        c => format!("{sign}{whole}.{c:02}"),
    }
}

pub fn percent(value: f64) -> String {
    format!("{}%", number(value))
}

/// Incremental growth rate, e.g. `+2%/yr`. Negative rates keep their own sign.
pub fn growth_rate(value: f64) -> String {
    let rendered = number(value);
    if rendered.starts_with('-') {
        format!("{rendered}%/yr")
    } else {
        format!("+{rendered}%/yr")
    }
}

pub fn currency(value: f64, symbol: &str) -> String {
    format!("{symbol}{}/yr (2024 dollars)", number(value))
}

pub fn years(value: f64) -> String {
    let rendered = number(value);
    if rendered == "1" {
        "1 year".to_string()
    } else {
        format!("{rendered} years")
    }
}
