//! Перевод чешского номера счёта `[prefix-]number/bankCode` в IBAN.

use crate::error::{Result, SpdError};
use regex::Regex;

/// Ширина поля счёта в чешском BBAN.
const ACCOUNT_WIDTH: usize = 16;
const COUNTRY: &str = "CZ";
const IBAN_LEN: usize = 24;

/// `CZ` + контрольные цифры + банк + 16-значный счёт.
///
/// Ошибка `SpdError::Format`, если строка не подходит под грамматику
/// `^([0-9]+-)?([0-9]{1,10})/([0-9]{4})$` или префикс вместе с номером длиннее 16 цифр.
pub fn account_number_to_iban(raw: &str) -> Result<String> {
    let re = Regex::new(r"^(?:(?P<prefix>[0-9]+)-)?(?P<number>[0-9]{1,10})/(?P<bank>[0-9]{4})$")
        .map_err(|e| SpdError::Format(e.to_string()))?;
    let caps = re
        .captures(raw)
        .ok_or_else(|| SpdError::Format(format!("invalid account number format: {raw:?}")))?;

    let prefix = caps.name("prefix").map_or("", |m| m.as_str());
    let number = &caps["number"];
    let bank = &caps["bank"];

    let account = format!("{prefix}{number}");
    if account.len() > ACCOUNT_WIDTH {
        return Err(SpdError::Format(format!(
            "account {raw:?} does not fit into {ACCOUNT_WIDTH} digits"
        )));
    }
    let padded = format!("{account:0>ACCOUNT_WIDTH$}");

    let rem = mod97(&format!("{bank}{padded}{COUNTRY}00"))
        .ok_or_else(|| SpdError::Format(format!("account {raw:?} is not numeric")))?;
    let iban = format!("{COUNTRY}{:02}{bank}{padded}", 98 - rem);
    debug_assert_eq!(iban.len(), IBAN_LEN);
    debug_assert!(is_valid_iban(&iban));
    log::debug!("{raw} -> {iban}");
    Ok(iban)
}

/// Остаток по модулю 97; буквы заменяются на `code - 55` (A=10 … Z=35).
/// Считается по цифрам, большое число целиком не собирается.
/// `None`, если встретился символ вне `0-9A-Z`.
fn mod97(s: &str) -> Option<u32> {
    s.chars().try_fold(0, |rem, c| match c {
        '0'..='9' => Some((rem * 10 + (c as u32 - '0' as u32)) % 97),
        'A'..='Z' => Some((rem * 100 + (c as u32 - 55)) % 97),
        _ => None,
    })
}

/// Проверка контрольных цифр готового IBAN (ISO 13616).
pub(crate) fn is_valid_iban(iban: &str) -> bool {
    if iban.len() < 5 || !iban.is_ascii() {
        return false;
    }
    let (head, tail) = iban.split_at(4);
    mod97(&format!("{tail}{head}")) == Some(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mod97_letters_expand_to_two_digits() {
        // "CZ" == "1235"
        assert_eq!(mod97("CZ"), Some(1235 % 97));
        assert_eq!(mod97("0800CZ00"), mod97("0800123500"));
        assert_eq!(mod97("08\u{0661}"), None);
    }

    #[test]
    fn check_digits_keep_leading_zero() {
        let iban = account_number_to_iban("123456-1234567890/0800").unwrap();
        assert_eq!(iban, "CZ0508001234561234567890");
        assert!(is_valid_iban(&iban));
    }

    #[test]
    fn overlong_account_is_rejected() {
        let err = account_number_to_iban("1234567-1234567890/0800").unwrap_err();
        assert!(matches!(err, SpdError::Format(_)));
    }

    #[test]
    fn tampered_iban_fails_check() {
        assert!(is_valid_iban("CZ6508000000192000145399"));
        assert!(!is_valid_iban("CZ6508000000192000145398"));
        assert!(!is_valid_iban("cz65"));
        assert!(!is_valid_iban("CZ6508000000192000145\u{0663}99"));
    }

    #[test]
    fn every_converted_iban_passes_check() {
        for acc in ["123456789/0800", "19-2000145399/0800", "1/0800", "2400000001/2010"] {
            assert!(is_valid_iban(&account_number_to_iban(acc).unwrap()), "{acc}");
        }
    }
}
