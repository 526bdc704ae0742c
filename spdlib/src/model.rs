//! Доменные модели: запрос на платёж и отчёт о валидации.

use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// Запрос на QR-платёж в том виде, в каком его присылает форма.
///
/// Все поля опциональны на уровне типа: отсутствие обязательного поля
/// (`acc`, `am`, `cc`) сообщает валидатор, а не десериализатор.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PaymentRequest {
    /// Номер счёта `[prefix-]number/bankCode`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acc: Option<String>,
    /// Имя получателя, до 250 символов.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rec: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub am: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,
    /// Variabilní symbol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vs: Option<String>,
    /// Specifický symbol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ss: Option<String>,
    /// Konstantní symbol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ks: Option<String>,
    /// Дата платежа `YYYYMMDD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl PaymentRequest {
    /// Минимальный запрос из обязательных полей.
    pub fn new(acc: impl Into<String>, am: f64, cc: impl Into<String>) -> Self {
        Self {
            acc: Some(acc.into()),
            am: Some(am),
            cc: Some(cc.into()),
            ..Self::default()
        }
    }
}

/// Пустая строка из формы означает «поле не заполнено».
pub(crate) fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Acc,
    Rec,
    Am,
    Cc,
    Vs,
    Ss,
    Ks,
    Dt,
    Msg,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Acc => "acc",
            Field::Rec => "rec",
            Field::Am => "am",
            Field::Cc => "cc",
            Field::Vs => "vs",
            Field::Ss => "ss",
            Field::Ks => "ks",
            Field::Dt => "dt",
            Field::Msg => "msg",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Required,
    Format,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub message: String,
    pub error_kind: ErrorKind,
}

impl FieldError {
    pub fn required(message: impl Into<String>) -> Self {
        Self { message: message.into(), error_kind: ErrorKind::Required }
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self { message: message.into(), error_kind: ErrorKind::Format }
    }
}

/// Нет ключа — поле прошло проверку.
pub type ValidationErrorReport = BTreeMap<Field, FieldError>;

/// Поддерживаемые валюты.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Czk,
    Eur,
    Usd,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Czk, Currency::Eur, Currency::Usd];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Czk => "CZK",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| format!("unsupported currency: {s}"))
    }
}

/// Итог полного прохода «валидация → кодирование» для одного запроса.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome {
    Encoded { spd: String },
    Rejected { errors: ValidationErrorReport },
    /// Поля прошли проверку, но кодирование не удалось.
    Failed { error: String },
}
