//! Currency, date, and month-label formatting for presentation collaborators.
//!
//! Sums stay unrounded `f64`s everywhere else in the crate; two-decimal
//! rounding happens only here, at render time.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ledger::month::MonthKey;

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub currency_symbol: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
            currency_symbol: "$".into(),
        }
    }
}

/// Formats an amount with the default locale, e.g. `$1,234.56`.
pub fn format_currency(amount: f64) -> String {
    format_currency_with(&LocaleConfig::default(), amount)
}

pub fn format_currency_with(locale: &LocaleConfig, amount: f64) -> String {
    let body = format_number(locale, amount.abs(), 2);
    if amount < 0.0 {
        format!("-{}{}", locale.currency_symbol, body)
    } else {
        format!("{}{}", locale.currency_symbol, body)
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let mut body = format!("{:.*}", precision as usize, value);
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    if let Some(pos) = body.find(locale.decimal_separator) {
        let mut int_part = body[..pos].to_string();
        insert_grouping(&mut int_part, locale.grouping_separator);
        body = format!("{}{}", int_part, &body[pos..]);
    } else {
        insert_grouping(&mut body, locale.grouping_separator);
    }
    body
}

fn insert_grouping(int_part: &mut String, separator: char) {
    let mut cleaned = int_part.replace(separator, "");
    if cleaned.starts_with('-') {
        let sign = cleaned.remove(0);
        let grouped = group_digits(&cleaned, separator);
        *int_part = format!("{}{}", sign, grouped);
    } else {
        *int_part = group_digits(&cleaned, separator);
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

/// Formats a date for display, e.g. `Apr 1, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        short_month_label(date.month()),
        date.day(),
        date.year()
    )
}

/// Formats a month key as its long human label, e.g. `April 2025`.
pub fn format_month(month: MonthKey) -> String {
    format!("{} {}", long_month_label(month.month()), month.year())
}

pub fn short_month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

pub fn long_month_label(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}
