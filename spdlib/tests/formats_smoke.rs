use spdlib::{
    formats::{csv::Csv, json::Json},
    process,
    traits::{ReadFormat, WriteFormat},
    Outcome, SpdError,
};
use std::io::Cursor;

#[test]
fn json_single_object_and_array() {
    let one = Json::read(Cursor::new(r#"{"acc":"1/0800","am":10,"cc":"CZK"}"#)).expect("one");
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].am, Some(10.0));

    let many = Json::read(Cursor::new(r#"[{"acc":"1/0800"},{"msg":"hi","rec":"Jan"}]"#))
        .expect("many");
    assert_eq!(many.len(), 2);
    assert_eq!(many[1].rec.as_deref(), Some("Jan"));
    assert_eq!(many[1].acc, None);
}

#[test]
fn json_outcomes_are_lines() {
    let reqs = Json::read(Cursor::new(
        r#"[{"acc":"1/0800","am":1,"cc":"CZK"},{"am":-1,"cc":"CZK"}]"#,
    ))
    .unwrap();
    let outcomes: Vec<Outcome> = reqs.iter().map(process).collect();

    let mut out = Vec::new();
    Json::write(&mut out, &outcomes).expect("write");
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], r#"{"spd":"SPD*1.0*ACC:CZ3408000000000000000001*AM:1.00*CC:CZK"}"#);

    let rejected: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(rejected["errors"]["acc"]["errorKind"], "required");
    assert_eq!(rejected["errors"]["am"]["errorKind"], "format");
}

#[test]
fn one_unencodable_request_does_not_stop_the_rest() {
    let reqs = Json::read(Cursor::new(
        r#"[{"acc":"1/0800","am":1,"cc":"CZK"},
            {"acc":"123456789012/0800","am":2,"cc":"CZK"},
            {"acc":"19-2000145399/0800","am":3,"cc":"EUR"}]"#,
    ))
    .unwrap();
    let outcomes: Vec<Outcome> = reqs.iter().map(process).collect();

    let mut out = Vec::new();
    Json::write(&mut out, &outcomes).expect("write");
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<serde_json::Value> =
        text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["spd"], "SPD*1.0*ACC:CZ3408000000000000000001*AM:1.00*CC:CZK");
    assert!(lines[1]["error"].as_str().unwrap().contains("123456789012/0800"));
    assert_eq!(lines[2]["spd"], "SPD*1.0*ACC:CZ6508000000192000145399*AM:3.00*CC:EUR");
}

#[test]
fn csv_rows_with_missing_cells() {
    let input = "acc,am,cc,vs,msg\n\
                 123456789/0800,100.5,CZK,,Rent\n\
                 19-2000145399/0800,,EUR,42,\n";
    let reqs = Csv::read(Cursor::new(input)).expect("read csv");
    assert_eq!(reqs.len(), 2);
    assert_eq!(reqs[0].am, Some(100.5));
    assert_eq!(reqs[0].msg.as_deref(), Some("Rent"));
    assert_eq!(reqs[1].am, None);
    assert_eq!(reqs[1].vs.as_deref(), Some("42"));
    assert_eq!(reqs[1].rec, None);

    match process(&reqs[0]) {
        Outcome::Encoded { spd } => assert_eq!(
            spd,
            "SPD*1.0*ACC:CZ7508000000000123456789*AM:100.50*CC:CZK*MSG:Rent"
        ),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn csv_bad_amount_names_line() {
    let err = Csv::read(Cursor::new("acc,am,cc\n1/0800,lots,CZK\n")).unwrap_err();
    match err {
        SpdError::Parse(msg) => assert!(msg.starts_with("line 2"), "{msg}"),
        other => panic!("unexpected {other:?}"),
    }
}
