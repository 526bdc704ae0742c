//! Сводная проверка запроса: все поля проверяются независимо, в отчёт
//! попадают все ошибки сразу.

use crate::{
    model::{present, Field, FieldError, PaymentRequest, ValidationErrorReport},
    validators::{
        is_valid_account_number, is_valid_amount, is_valid_currency, is_valid_date,
        is_valid_digit_string, is_valid_string_length,
    },
};

pub const MAX_TEXT_LEN: usize = 250;
pub const MAX_SYMBOL_LEN: usize = 10;
pub const MAX_CONSTANT_SYMBOL_LEN: usize = 4;

/// `None` — запрос валиден; иначе непустой отчёт по полям.
pub fn validate(req: &PaymentRequest) -> Option<ValidationErrorReport> {
    let mut errors = ValidationErrorReport::new();

    match present(&req.acc) {
        None => {
            errors.insert(Field::Acc, FieldError::required("Account number is required"));
        }
        Some(acc) if !is_valid_account_number(acc) => {
            errors.insert(
                Field::Acc,
                FieldError::format(
                    "Invalid account number format. Expected format: 000000-000000000000/0000",
                ),
            );
        }
        Some(_) => {}
    }

    match req.am {
        None => {
            errors.insert(Field::Am, FieldError::required("Amount is required"));
        }
        Some(am) if !is_valid_amount(am) => {
            errors.insert(
                Field::Am,
                FieldError::format("Invalid amount. Must be a positive number"),
            );
        }
        Some(_) => {}
    }

    match present(&req.cc) {
        None => {
            errors.insert(Field::Cc, FieldError::required("Currency is required"));
        }
        Some(cc) if !is_valid_currency(cc) => {
            errors.insert(Field::Cc, FieldError::format("Invalid currency code"));
        }
        Some(_) => {}
    }

    let symbols = [
        (Field::Vs, &req.vs, MAX_SYMBOL_LEN, "variable"),
        (Field::Ss, &req.ss, MAX_SYMBOL_LEN, "specific"),
        (Field::Ks, &req.ks, MAX_CONSTANT_SYMBOL_LEN, "constant"),
    ];
    for (field, value, max_len, name) in symbols {
        if !is_valid_digit_string(present(value), max_len) {
            errors.insert(
                field,
                FieldError::format(format!(
                    "Invalid {name} symbol. Must be a string of digits, max {max_len} characters"
                )),
            );
        }
    }

    if !is_valid_date(present(&req.dt)) {
        errors.insert(
            Field::Dt,
            FieldError::format("Invalid date format. Expected format: YYYYMMDD"),
        );
    }

    if !is_valid_string_length(present(&req.msg), MAX_TEXT_LEN) {
        errors.insert(
            Field::Msg,
            FieldError::format(format!("Message is too long. Max {MAX_TEXT_LEN} characters")),
        );
    }
    if !is_valid_string_length(present(&req.rec), MAX_TEXT_LEN) {
        errors.insert(
            Field::Rec,
            FieldError::format(format!(
                "Recipient name is too long. Max {MAX_TEXT_LEN} characters"
            )),
        );
    }

    if errors.is_empty() {
        None
    } else {
        log::debug!(
            "request rejected: {}",
            errors.keys().map(|f| f.as_str()).collect::<Vec<_>>().join(", ")
        );
        Some(errors)
    }
}
