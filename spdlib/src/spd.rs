//! Кодирование запроса в строку Short Payment Descriptor:
//! `SPD*1.0*ACC:...*AM:...*CC:...[*VS:...][*SS:...][*KS:...][*DT:...][*MSG:...][*RN:...]`

use crate::{
    error::{Result, SpdError},
    iban::account_number_to_iban,
    model::{present, Outcome, PaymentRequest},
    validate::validate,
};
use rust_decimal::{prelude::FromPrimitive, Decimal, RoundingStrategy};

pub const HEADER: &str = "SPD*1.0";
const SEPARATOR: char = '*';

/// Кодирует уже провалидированный запрос; повторной проверки нет.
///
/// Неверный `acc` (или его отсутствие) даёт `SpdError::Format` из конвертера IBAN.
pub fn encode(req: &PaymentRequest) -> Result<String> {
    let acc = req.acc.as_deref().unwrap_or_default();
    let iban = account_number_to_iban(acc)?;
    let am = req
        .am
        .ok_or_else(|| SpdError::Format("amount is missing".into()))?;

    let mut out = String::from(HEADER);
    push(&mut out, "ACC", &iban);
    push(&mut out, "AM", &format_amount(am)?);
    push(&mut out, "CC", req.cc.as_deref().unwrap_or_default());

    // порядок ключей фиксирован форматом
    let optional = [
        ("VS", &req.vs),
        ("SS", &req.ss),
        ("KS", &req.ks),
        ("DT", &req.dt),
        ("MSG", &req.msg),
        ("RN", &req.rec),
    ];
    for (key, value) in optional {
        if let Some(v) = present(value) {
            push(&mut out, key, v);
        }
    }

    log::debug!("encoded descriptor: {out}");
    Ok(out)
}

/// Валидация и, если всё в порядке, кодирование.
///
/// Ошибка кодирования не прерывает обработку: она становится `Outcome::Failed`
/// этого запроса.
pub fn process(req: &PaymentRequest) -> Outcome {
    if let Some(errors) = validate(req) {
        return Outcome::Rejected { errors };
    }
    match encode(req) {
        Ok(spd) => Outcome::Encoded { spd },
        Err(e) => {
            log::warn!("request passed validation but failed to encode: {e}");
            Outcome::Failed { error: e.to_string() }
        }
    }
}

fn push(out: &mut String, key: &str, value: &str) {
    out.push(SEPARATOR);
    out.push_str(key);
    out.push(':');
    out.push_str(value);
}

/// Ровно два знака после точки, округление половины от нуля.
/// Суммы вне диапазона `Decimal` форматируются как `f64`.
fn format_amount(am: f64) -> Result<String> {
    if !am.is_finite() {
        return Err(SpdError::Format(format!("amount {am} is not finite")));
    }
    match Decimal::from_f64(am) {
        Some(d) => {
            let mut d = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            d.rescale(2);
            Ok(d.to_string())
        }
        None => Ok(format!("{am:.2}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_always_has_two_decimals() {
        assert_eq!(format_amount(100.0).unwrap(), "100.00");
        assert_eq!(format_amount(100.5).unwrap(), "100.50");
        assert_eq!(format_amount(0.1 + 0.2).unwrap(), "0.30");
        assert_eq!(format_amount(1.999).unwrap(), "2.00");
    }

    #[test]
    fn amount_beyond_decimal_range() {
        let s = format_amount(1e30).unwrap();
        let (int, frac) = s.split_once('.').unwrap();
        assert_eq!(frac, "00");
        assert_eq!(int.len(), 31);
        assert!(int.starts_with("1000000000000000"));
        assert!(int.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn non_finite_amount_is_format_error() {
        assert!(matches!(format_amount(f64::INFINITY), Err(SpdError::Format(_))));
        assert!(matches!(format_amount(f64::NAN), Err(SpdError::Format(_))));
    }

    #[test]
    fn missing_account_propagates_format_error() {
        let req = PaymentRequest { am: Some(1.0), cc: Some("CZK".into()), ..Default::default() };
        assert!(matches!(encode(&req), Err(SpdError::Format(_))));
    }
}
