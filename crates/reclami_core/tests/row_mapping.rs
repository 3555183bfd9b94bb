use pretty_assertions::assert_eq;
use reclami_core::{map_records, ComplaintRecord, DisplayRow, PLACEHOLDER};

fn records(json: &str) -> Vec<ComplaintRecord> {
    serde_json::from_str(json).expect("valid fixture")
}

#[test]
fn natural_person_fields_come_from_first_element() {
    let records = records(
        r#"[{"_id":"1","NumReclamo":101,"personaFisica":[
            {"nome":"Mario","cognome":"Rossi","codFiscale":"RSSMRA80A01H501Z"},
            {"nome":"Luigi","cognome":"Verdi","codFiscale":"VRDLGU80A01H501Z"}
        ]}]"#,
    );

    let rows = map_records(&records);
    assert_eq!(
        rows,
        vec![DisplayRow {
            id: "1".into(),
            complaint_number: "101".into(),
            name: "Mario".into(),
            surname: "Rossi".into(),
            fiscal_code: "RSSMRA80A01H501Z".into(),
            company_name: PLACEHOLDER.into(),
            vat_number: PLACEHOLDER.into(),
        }]
    );
}

#[test]
fn legal_entity_fields_come_from_first_element() {
    let records = records(
        r#"[{"_id":"2","NumReclamo":202,"personaGiuridica":[
            {"ragioneSociale":"Acme Srl","pIVA":"IT12345678901"}
        ]}]"#,
    );

    let row = &map_records(&records)[0];
    assert_eq!(row.name, PLACEHOLDER);
    assert_eq!(row.surname, PLACEHOLDER);
    assert_eq!(row.fiscal_code, PLACEHOLDER);
    assert_eq!(row.company_name, "Acme Srl");
    assert_eq!(row.vat_number, "IT12345678901");
}

#[test]
fn empty_null_and_absent_lists_map_to_placeholder() {
    let records = records(
        r#"[
            {"_id":"a","NumReclamo":1,"personaFisica":[],"personaGiuridica":[]},
            {"_id":"b","NumReclamo":2,"personaFisica":null,"personaGiuridica":null},
            {"_id":"c","NumReclamo":3}
        ]"#,
    );

    for row in map_records(&records) {
        assert_eq!(row.name, PLACEHOLDER, "row {}", row.id);
        assert_eq!(row.surname, PLACEHOLDER, "row {}", row.id);
        assert_eq!(row.fiscal_code, PLACEHOLDER, "row {}", row.id);
        assert_eq!(row.company_name, PLACEHOLDER, "row {}", row.id);
        assert_eq!(row.vat_number, PLACEHOLDER, "row {}", row.id);
    }
}

#[test]
fn missing_or_empty_sub_fields_map_to_placeholder() {
    let records = records(
        r#"[{"_id":"4","NumReclamo":"R-4","personaFisica":[{"nome":"","cognome":null}]}]"#,
    );

    let row = &map_records(&records)[0];
    assert_eq!(row.complaint_number, "R-4");
    assert_eq!(row.name, PLACEHOLDER);
    assert_eq!(row.surname, PLACEHOLDER);
    assert_eq!(row.fiscal_code, PLACEHOLDER);
}

#[test]
fn zero_and_false_filer_fields_map_to_placeholder() {
    let records = records(
        r#"[{"_id":"6","NumReclamo":0,
            "personaFisica":[{"nome":false,"cognome":0,"codFiscale":0.0}],
            "personaGiuridica":[{"ragioneSociale":true,"pIVA":0}]}]"#,
    );

    let row = &map_records(&records)[0];
    assert_eq!(row.complaint_number, "0");
    assert_eq!(row.name, PLACEHOLDER);
    assert_eq!(row.surname, PLACEHOLDER);
    assert_eq!(row.fiscal_code, PLACEHOLDER);
    assert_eq!(row.company_name, "true");
    assert_eq!(row.vat_number, PLACEHOLDER);
}

#[test]
fn numeric_ids_and_unknown_fields_are_tolerated() {
    let records = records(
        r#"[{"_id":77,"NumReclamo":12.5,"dataApertura":"2024-01-01","personaGiuridica":[{"ragioneSociale":"Beta Spa","pIVA":1234}]}]"#,
    );

    let row = &map_records(&records)[0];
    assert_eq!(row.id, "77");
    assert_eq!(row.complaint_number, "12.5");
    assert_eq!(row.vat_number, "1234");
}

#[test]
fn missing_identifier_is_not_repaired() {
    let records = records(r#"[{"NumReclamo":5}]"#);
    let row = &map_records(&records)[0];
    assert_eq!(row.id, "");
    assert_eq!(row.complaint_number, "5");
}

#[test]
fn mapping_is_idempotent() {
    let records = records(
        r#"[{"_id":"9","NumReclamo":9,"personaFisica":[{"nome":"Anna","cognome":"Neri","codFiscale":"NRENNA"}]}]"#,
    );

    assert_eq!(map_records(&records), map_records(&records));
    assert_eq!(
        DisplayRow::from_record(&records[0]),
        DisplayRow::from_record(&records[0])
    );
}

#[test]
fn record_order_is_preserved() {
    let records = records(r#"[{"_id":"z"},{"_id":"a"},{"_id":"m"}]"#);
    let ids: Vec<_> = map_records(&records).into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["z", "a", "m"]);
}
