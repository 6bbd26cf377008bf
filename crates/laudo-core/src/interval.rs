//! Calendar-interval computation for prior-study comparison.
//!
//! Elapsed time is counted in whole calendar months (a 31-day January does
//! not shorten the interval), so the arithmetic goes through jiff rather
//! than any days/30 approximation.

use jiff::Unit;
use jiff::civil::Date;

/// Whole calendar months elapsed from `from` to `to`.
///
/// Negative when `to` precedes `from`. A partial month does not count:
/// 23 months and 29 days is 23.
pub fn months_between(from: Date, to: Date) -> i32 {
    from.until((Unit::Month, to))
        .map(|span| span.get_months())
        .unwrap_or(0)
}

/// Render a month count the way it reads in report text:
/// "1 mês", "5 meses", "1 ano", "2 anos e 3 meses".
pub fn describe_interval(months: i32) -> String {
    if months < 1 {
        return "menos de 1 mês".to_string();
    }
    let years = months / 12;
    let rest = months % 12;

    let year_part = match years {
        0 => None,
        1 => Some("1 ano".to_string()),
        n => Some(format!("{n} anos")),
    };
    let month_part = match rest {
        0 => None,
        1 => Some("1 mês".to_string()),
        n => Some(format!("{n} meses")),
    };

    match (year_part, month_part) {
        (Some(y), Some(m)) => format!("{y} e {m}"),
        (Some(y), None) => y,
        (None, Some(m)) => m,
        (None, None) => unreachable!("months >= 1"),
    }
}
