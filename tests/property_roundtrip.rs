use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use contactstore::{
    codec::ContactCodec,
    contact::ContactRecord,
    convert::frequency,
    dialect::{Dialect, Postgres, Sqlite},
};

fn date_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (0u64..40_000).prop_map(|offset| {
            let base = NaiveDate::from_ymd_opt(1950, 1, 1).expect("base date");
            let day = base.checked_add_days(Days::new(offset)).expect("in range");
            day.format("%Y%m%d").to_string()
        }),
    ]
}

fn time_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{h:02}{m:02}")),
        (0u32..24, 0u32..60, 0u32..60).prop_map(|(h, m, s)| format!("{h:02}{m:02}{s:02}")),
    ]
}

fn freq_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        (1i64..300_000_000_000).prop_map(frequency::format_mhz),
    ]
}

fn text() -> impl Strategy<Value = String> {
    "[A-Z0-9/ ]{0,10}"
}

fn opt_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[ -~]{0,16}")
}

prop_compose! {
    fn contact_strategy()(
        logbook_id in 1i64..1_000,
        session_id in prop::option::of(1i64..1_000),
        call in "[A-Z0-9]{3,6}(/P)?",
        band in text(),
        mode in text(),
        freq in freq_strategy(),
        qso_date in date_strategy(),
        time_on in time_strategy(),
        time_off in time_strategy(),
        rst_sent in text(),
        rst_rcvd in text(),
        country in text(),
        comment in opt_text(),
        srx in prop::option::of(any::<u32>()),
        gridsquare in opt_text(),
        dxcc in prop::option::of(0u32..1_000),
        my_antenna in opt_text(),
        my_cq_zone in prop::option::of(1u32..41),
        qso_random in prop::option::of(any::<bool>()),
        lotw_qsl_rcvd in opt_text(),
    ) -> ContactRecord {
        let mut contact = ContactRecord::new(logbook_id, call, band, mode);
        contact.session_id = session_id;
        contact.qso.freq = freq;
        contact.qso.qso_date = qso_date;
        contact.qso.time_on = time_on;
        contact.qso.time_off = time_off;
        contact.qso.rst_sent = rst_sent;
        contact.qso.rst_rcvd = rst_rcvd;
        contact.qso.comment = comment;
        contact.qso.srx = srx;
        contact.qso.qso_random = qso_random;
        contact.contacted.country = country;
        contact.contacted.gridsquare = gridsquare;
        contact.contacted.dxcc = dxcc;
        contact.station.my_antenna = my_antenna;
        contact.station.my_cq_zone = my_cq_zone;
        contact.qsl.lotw_qsl_rcvd = lotw_qsl_rcvd;
        contact
    }
}

fn separated(date: &str, time: &str) -> (String, String) {
    let dashed = if date.is_empty() {
        String::new()
    } else {
        format!("{}-{}-{}", &date[..4], &date[4..6], &date[6..])
    };
    let colons = match time.len() {
        4 => format!("{}:{}", &time[..2], &time[2..]),
        6 => format!("{}:{}:{}", &time[..2], &time[2..4], &time[4..]),
        _ => String::new(),
    };
    (dashed, colons)
}

fn round_trip<D: Dialect>(codec: &ContactCodec<D>, contact: &ContactRecord) -> Result<(), TestCaseError> {
    let row = codec.encode(contact).map_err(|e| TestCaseError::fail(e.to_string()))?;

    let payload: serde_json::Value =
        serde_json::from_str(&row.extension).map_err(|e| TestCaseError::fail(e.to_string()))?;
    let object = payload.as_object().ok_or_else(|| TestCaseError::fail("payload is not an object"))?;
    for core in codec.core_fields() {
        prop_assert!(!object.contains_key(core), "{} in payload {}", core, row.extension);
    }

    let back = codec.decode(&row).map_err(|e| TestCaseError::fail(e.to_string()))?;
    prop_assert_eq!(&back, contact);
    Ok(())
}

proptest! {
    #[test]
    fn canonical_contacts_survive_both_backends(contact in contact_strategy()) {
        round_trip(&ContactCodec::<Sqlite>::new().expect("sqlite codec"), &contact)?;
        round_trip(&ContactCodec::<Postgres>::new().expect("postgres codec"), &contact)?;
    }

    #[test]
    fn frequency_text_is_exact_for_every_hertz_value(hz in 0i64..1_000_000_000_000) {
        let text = frequency::format_mhz(hz);
        prop_assert_eq!(frequency::parse_mhz(&text), Ok(hz));
        prop_assert_eq!(frequency::encode_numeric(&text), Ok(Some(text.clone())));
    }

    #[test]
    fn separated_dates_and_times_decode_unseparated(
        contact in contact_strategy(),
        date in date_strategy(),
        time in time_strategy(),
    ) {
        let (dashed, colons) = separated(&date, &time);
        let mut input = contact.clone();
        input.qso.qso_date = dashed;
        input.qso.time_on = colons.clone();
        input.qso.time_off = colons;

        let mut expected = contact;
        expected.qso.qso_date = date;
        expected.qso.time_on = time.clone();
        expected.qso.time_off = time;

        let sqlite = ContactCodec::<Sqlite>::new().expect("sqlite codec");
        let back = sqlite.decode(&sqlite.encode(&input).expect("encode")).expect("decode");
        prop_assert_eq!(&back, &expected);

        let postgres = ContactCodec::<Postgres>::new().expect("postgres codec");
        let back = postgres.decode(&postgres.encode(&input).expect("encode")).expect("decode");
        prop_assert_eq!(&back, &expected);
    }

    #[test]
    fn payload_text_is_stable_across_re_encoding(contact in contact_strategy()) {
        let codec = ContactCodec::<Sqlite>::new().expect("sqlite codec");
        let first = codec.encode(&contact).expect("encode");
        let again = codec.encode(&codec.decode(&first).expect("decode")).expect("re-encode");
        prop_assert_eq!(first, again);
    }
}
