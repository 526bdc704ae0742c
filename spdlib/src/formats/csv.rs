//! CSV с заголовком из имён полей запроса:
//! acc,rec,am,cc,vs,ss,ks,dt,msg
//! Любой столбец можно опустить, пустая ячейка — поле не задано.

use crate::{
    error::{Result, SpdError},
    model::PaymentRequest,
    traits::ReadFormat,
};
use csv::{ReaderBuilder, Trim};
use std::io::BufRead;

#[derive(serde::Deserialize)]
struct CsvRow {
    #[serde(default)]
    acc: Option<String>,
    #[serde(default)]
    rec: Option<String>,
    #[serde(default)]
    am: Option<String>,
    #[serde(default)]
    cc: Option<String>,
    #[serde(default)]
    vs: Option<String>,
    #[serde(default)]
    ss: Option<String>,
    #[serde(default)]
    ks: Option<String>,
    #[serde(default)]
    dt: Option<String>,
    #[serde(default)]
    msg: Option<String>,
}

pub struct Csv;

impl ReadFormat for Csv {
    fn read<R: BufRead>(r: R) -> Result<Vec<PaymentRequest>> {
        let mut rdr = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(r);
        let mut out = Vec::new();

        for (i, rec) in rdr.deserialize::<CsvRow>().enumerate() {
            let row = rec?;
            // строка 1 — заголовок
            let line = i + 2;
            let am = match row.am.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
                Some(a) => Some(a.parse::<f64>().map_err(|e| {
                    log::warn!("csv line {line}: bad amount {a:?}");
                    SpdError::Parse(format!("line {line}: amount: {e}"))
                })?),
                None => None,
            };

            out.push(PaymentRequest {
                acc: row.acc,
                rec: row.rec,
                am,
                cc: row.cc,
                vs: row.vs,
                ss: row.ss,
                ks: row.ks,
                dt: row.dt,
                msg: row.msg,
            });
        }

        log::debug!("csv: {} request(s)", out.len());
        Ok(out)
    }
}
