//! spdlib — кодирование чешских платёжных реквизитов в строку QR-платежа (SPD)
//! и проверка полей перед кодированием.

pub mod error;
pub mod model;
pub mod iban;
pub mod validators;
pub mod validate;
pub mod spd;
pub mod traits;

pub mod formats {
    pub mod csv;
    pub mod json;
}

pub use error::{Result, SpdError};
pub use iban::account_number_to_iban;
pub use model::{Currency, ErrorKind, Field, FieldError, Outcome, PaymentRequest, ValidationErrorReport};
pub use spd::{encode, process};
pub use validate::validate;
