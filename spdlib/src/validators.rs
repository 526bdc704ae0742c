//! Предикаты для отдельных полей. Никогда не паникуют и не возвращают ошибок.

use crate::model::Currency;
use chrono::{Datelike, NaiveDate};
use regex::Regex;

fn matches(pattern: &str, s: &str) -> bool {
    Regex::new(pattern).map(|re| re.is_match(s)).unwrap_or(false)
}

// Только ASCII-цифры 0-9.

/// `000000-000000000000/0000`
pub fn is_valid_account_number(acc: &str) -> bool {
    matches(r"^([0-9]{1,6}-)?[0-9]{1,12}/[0-9]{4}$", acc)
}

/// Пусто или отсутствует — допустимо; иначе только цифры, не длиннее `max_len`.
pub fn is_valid_digit_string(s: Option<&str>, max_len: usize) -> bool {
    match s {
        None | Some("") => true,
        Some(s) => max_len > 0 && matches(&format!(r"^[0-9]{{1,{max_len}}}$"), s),
    }
}

/// `YYYYMMDD`, и это должна быть настоящая дата по григорианскому календарю.
pub fn is_valid_date(s: Option<&str>) -> bool {
    let Some(s) = s.filter(|s| !s.is_empty()) else {
        return true;
    };
    if !matches(r"^[0-9]{8}$", s) {
        return false;
    }
    let (Ok(year), Ok(month), Ok(day)) =
        (s[0..4].parse::<i32>(), s[4..6].parse::<u32>(), s[6..8].parse::<u32>())
    else {
        return false;
    };
    NaiveDate::from_ymd_opt(year, month, day)
        .is_some_and(|d| d.year() == year && d.month() == month && d.day() == day)
}

pub fn is_valid_amount(am: f64) -> bool {
    am.is_finite() && am > 0.0
}

pub fn is_valid_currency(cc: &str) -> bool {
    cc.parse::<Currency>().is_ok()
}

/// Длина в символах, а не в байтах.
pub fn is_valid_string_length(s: Option<&str>, max_len: usize) -> bool {
    s.map_or(true, |s| s.chars().count() <= max_len)
}
