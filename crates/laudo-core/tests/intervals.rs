use jiff::civil::date;

use laudo_core::interval::{describe_interval, months_between};

#[test]
fn whole_months_only() {
    // One day short of two years is still 23 whole months.
    assert_eq!(months_between(date(2024, 6, 2), date(2026, 6, 1)), 23);
    assert_eq!(months_between(date(2024, 6, 1), date(2026, 6, 1)), 24);
}

#[test]
fn calendar_months_not_thirty_day_blocks() {
    // February's length must not shorten the count.
    assert_eq!(months_between(date(2024, 1, 31), date(2024, 3, 1)), 1);
    assert_eq!(months_between(date(2024, 1, 15), date(2024, 2, 15)), 1);
}

#[test]
fn negative_when_reversed() {
    assert!(months_between(date(2026, 1, 1), date(2024, 1, 1)) < 0);
}

#[test]
fn same_day_is_zero() {
    assert_eq!(months_between(date(2025, 3, 10), date(2025, 3, 10)), 0);
}

#[test]
fn interval_wording() {
    assert_eq!(describe_interval(0), "menos de 1 mês");
    assert_eq!(describe_interval(1), "1 mês");
    assert_eq!(describe_interval(5), "5 meses");
    assert_eq!(describe_interval(12), "1 ano");
    assert_eq!(describe_interval(24), "2 anos");
    assert_eq!(describe_interval(27), "2 anos e 3 meses");
    assert_eq!(describe_interval(13), "1 ano e 1 mês");
}
