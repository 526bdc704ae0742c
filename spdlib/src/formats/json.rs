//! JSON: на входе один объект запроса или массив объектов,
//! на выходе — по одной JSON-строке на запрос (`{"spd":..}` или `{"errors":..}`).

use crate::{
    error::Result,
    model::{Outcome, PaymentRequest},
    traits::{ReadFormat, WriteFormat},
};
use serde::Deserialize;
use std::io::{BufRead, Write};

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<PaymentRequest>),
    One(PaymentRequest),
}

pub struct Json;

impl ReadFormat for Json {
    fn read<R: BufRead>(r: R) -> Result<Vec<PaymentRequest>> {
        let reqs = match serde_json::from_reader(r)? {
            OneOrMany::Many(v) => v,
            OneOrMany::One(req) => vec![req],
        };
        log::debug!("json: {} request(s)", reqs.len());
        Ok(reqs)
    }
}

impl WriteFormat for Json {
    fn write<W: Write>(mut w: W, outcomes: &[Outcome]) -> Result<()> {
        for o in outcomes {
            serde_json::to_writer(&mut w, o)?;
            w.write_all(b"\n")?;
        }
        w.flush()?;
        Ok(())
    }
}
