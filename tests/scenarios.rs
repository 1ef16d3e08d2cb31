// End-to-end behavior through the public API

use std::cmp::Ordering;

use adif_multitool::adif::{Logfile, Record, PROGRAM_ID, PROGRAM_VERSION};
use adif_multitool::cmd::{self, sort::SortKey, Context};
use adif_multitool::codec::{AdiCodec, CabrilloConfig, CodecConfig, ExchangeField, Format};
use adif_multitool::compare::comparator_for;
use adif_multitool::spec::{self, FieldDef};
use adif_multitool::validate::{validate, Validation, ValidationContext};
use icu_locid::Locale;

fn field(name: &str) -> &'static FieldDef {
    spec::init().unwrap().field(name).unwrap()
}

fn sort_values(name: &str, values: &[&str]) -> Vec<String> {
    let mut log = Logfile::new();
    for v in values {
        log.records.push(Record::from_pairs([(name, *v)]));
    }
    let keys = vec![name.parse::<SortKey>().unwrap()];
    cmd::sort::sort(&mut log, &keys, &Locale::UND).unwrap();
    log.records.iter().map(|r| r.value(name).to_string()).collect()
}

#[test]
fn test_string_comparison_ignores_case_and_accents() {
    let cmp = comparator_for(field("NAME"), &Locale::UND);
    assert_eq!(cmp("DIPOLE", "dipole"), Ok(Ordering::Equal));
    assert_eq!(cmp("Jean Michel", "Jéàn Mîçhēl"), Ok(Ordering::Equal));
}

#[test]
fn test_gridsquare_order() {
    let expected = [
        "AA00aa00", "AA00aa01", "AA00ab00", "AA09aa00", "AA10aa00", "AB00CD00", "dn00ab", "RR99xx",
        "RR99xx99",
    ];
    let mut shuffled = expected.to_vec();
    shuffled.reverse();
    shuffled.swap(1, 5);
    assert_eq!(sort_values("GRIDSQUARE", &shuffled), expected);
}

#[test]
fn test_location_order() {
    let east_west = ["W180 00.000", "W090 00.000", "W000 00.000", "E045 30.432", "E123 45.678", "E180 00.000"];
    let mut shuffled = east_west.to_vec();
    shuffled.rotate_left(3);
    assert_eq!(sort_values("LON", &shuffled), east_west);

    let north = ["S090 00.000", "S000 00.000", "N000 00.000", "N090 00.000"];
    let shuffled = vec![north[3], north[0], north[2], north[1]];
    let sorted = sort_values("LAT", &shuffled);
    // S000 and N000 are the same latitude; the sort is stable
    assert_eq!(sorted, vec!["S090 00.000", "N000 00.000", "S000 00.000", "N090 00.000"]);
    let cmp = comparator_for(field("LAT"), &Locale::UND);
    for pair in north.windows(2) {
        assert_ne!(cmp(pair[0], pair[1]), Ok(Ordering::Greater));
    }
}

#[test]
fn test_cabrillo_round_trip() {
    let codecs = CodecConfig {
        cabrillo: CabrilloConfig {
            my_exchange: ExchangeField::parse_list("rst:RST_SENT exch:STX").unwrap(),
            their_exchange: ExchangeField::parse_list("rst:RST_RCVD exch:STATE").unwrap(),
            ..CabrilloConfig::default()
        },
        ..CodecConfig::default()
    };
    let input = "START-OF-LOG: 3.0\nCREATED-BY: X\nQSO: 3799 PH 1999-03-06 0711 HC8N 59 700 W1AW 59 CT 0\nEND-OF-LOG:\n";
    let log = codecs.reader(Format::Cabrillo).read(&mut input.as_bytes()).unwrap();
    assert_eq!(log.records.len(), 1);
    let r = &log.records[0];
    for (name, value) in [
        ("FREQ", "3.799"),
        ("BAND", "80m"),
        ("MODE", "SSB"),
        ("QSO_DATE", "19990306"),
        ("TIME_ON", "0711"),
        ("STATION_CALLSIGN", "HC8N"),
        ("RST_SENT", "59"),
        ("STX", "700"),
        ("CALL", "W1AW"),
        ("RST_RCVD", "59"),
        ("STATE", "CT"),
        ("APP_CABRILLO_TRANSMITTER_ID", "0"),
    ] {
        assert_eq!(r.value(name), value, "{}", name);
    }

    let mut out = Vec::new();
    codecs.writer(Format::Cabrillo).write(&log, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("START-OF-LOG: 3.0\n"));
    assert!(text.contains("CREATED-BY: X\n"));
    assert!(text.contains("\nQSO: 3799 PH 1999-03-06 0711 HC8N 59 700 W1AW 59 CT 0\n"));
    assert!(text.ends_with("END-OF-LOG:\n"));
}

#[test]
fn test_cq_zone_must_match_entity() {
    let record = Record::from_pairs([("DXCC", "90")]);
    let ctx = ValidationContext::new().with_record(&record);
    assert_eq!(validate(field("CQZ"), "9", &ctx), Validation::Valid);
    assert!(validate(field("CQZ"), "29", &ctx).is_error());
}

#[test]
fn test_adi_lengths_count_bytes() {
    let mut log = Logfile::new();
    log.records.push(Record::from_pairs([("STX_STRING", "Straße")]));
    let out = AdiCodec::default().format(&log).unwrap();
    assert!(out.contains("<STX_STRING:7>Straße"), "{}", out);
    let back = AdiCodec::default().parse(&out).unwrap();
    assert_eq!(back.records[0].value("STX_STRING"), "Straße");
}

#[test]
fn test_convert_adi_to_csv_via_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.adi");
    std::fs::write(
        &input,
        "exported\n<ADIF_VER:5>3.1.4<EOH>\n<CALL:4>W1AW<FREQ:6>14.074<QSO_DATE:10>2023-01-05<EOR>\n",
    )
    .unwrap();
    let ctx = Context::default();
    let mut log = ctx.read_inputs(&[input]).unwrap();
    cmd::fix::fix(&mut log);
    cmd::infer::infer(&mut log, &[]).unwrap();
    let out = dir.path().join("out.csv");
    cmd::save::save(&ctx, &mut log, &[out.clone()], cmd::save::SaveOptions::default()).unwrap();
    assert_eq!(
        std::fs::read_to_string(out).unwrap(),
        "CALL,FREQ,QSO_DATE,BAND\nW1AW,14.074,20230105,20m\n"
    );
}

#[test]
fn test_writers_name_the_program() {
    let mut log = Logfile::new();
    log.records.push(Record::from_pairs([("CALL", "W1AW")]));
    let out = AdiCodec::default().format(&log).unwrap();
    assert!(out.starts_with(&format!("Generated by {} version {}, 1 records\n", PROGRAM_ID, PROGRAM_VERSION)), "{}", out);
    assert_eq!(PROGRAM_ID, "adif-multitool");
}
