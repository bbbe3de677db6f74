use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use contactstore::{
    codec::{CodecRegistry, DialectCodecs},
    contact::ContactRecord,
    dialect::Dialect,
};

fn contact(i: u32) -> ContactRecord {
    let mut contact = ContactRecord::new(1, format!("K{i}ABC"), "20m", "SSB");
    contact.qso.freq = format!("14.{:03}", i % 1000);
    contact.qso.qso_date = "2025-11-08".to_string();
    contact.qso.time_on = format!("{:02}:{:02}", (i / 60) % 24, i % 60);
    contact.qso.rst_sent = "59".to_string();
    contact.qso.rst_rcvd = "57".to_string();
    contact.qso.srx = Some(i);
    contact.qso.comment = Some("bench".to_string());
    contact.contacted.gridsquare = Some("FN31".to_string());
    contact.station.my_antenna = Some("EFHW".to_string());
    contact.qsl.lotw_qsl_sent = Some("Y".to_string());
    contact
}

fn bench_backend<D: Dialect>(c: &mut Criterion, codecs: &DialectCodecs<D>) {
    let records: Vec<ContactRecord> = (0..10_000).map(contact).collect();
    let rows: Vec<_> = records
        .iter()
        .map(|record| codecs.contacts.encode(record).expect("encode"))
        .collect();

    c.bench_function(&format!("{}_encode_10k", D::BACKEND), |b| {
        b.iter(|| {
            for record in &records {
                black_box(codecs.contacts.encode(record).expect("encode"));
            }
        });
    });

    c.bench_function(&format!("{}_decode_10k", D::BACKEND), |b| {
        b.iter(|| {
            for row in &rows {
                black_box(codecs.contacts.decode(row).expect("decode"));
            }
        });
    });
}

fn bench_encode_decode(c: &mut Criterion) {
    let registry = CodecRegistry::new();
    bench_backend(c, registry.sqlite().expect("sqlite codecs"));
    bench_backend(c, registry.postgres().expect("postgres codecs"));
}

fn bench_payload_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("payload_width");
    let registry = CodecRegistry::new();
    let codecs = registry.sqlite().expect("sqlite codecs");

    for extras in [0usize, 8, 24] {
        let mut record = contact(7);
        let fields = [
            &mut record.contacted.name,
            &mut record.contacted.qth,
            &mut record.contacted.cont,
            &mut record.contacted.state,
            &mut record.contacted.cnty,
            &mut record.contacted.pfx,
            &mut record.contacted.iota,
            &mut record.contacted.sota_ref,
            &mut record.contacted.pota_ref,
            &mut record.contacted.email,
            &mut record.contacted.rig,
            &mut record.contacted.ant,
            &mut record.station.station_callsign,
            &mut record.station.operator,
            &mut record.station.my_city,
            &mut record.station.my_state,
            &mut record.station.my_rig,
            &mut record.station.my_sota_ref,
            &mut record.qso.notes,
            &mut record.qso.contest_id,
            &mut record.qsl.qsl_via,
            &mut record.qsl.clublog_qso_upload_status,
            &mut record.qsl.qrzcom_qso_upload_status,
            &mut record.qsl.hrdlog_qso_upload_status,
        ];
        for slot in fields.into_iter().take(extras) {
            *slot = Some("value".to_string());
        }

        group.bench_with_input(BenchmarkId::from_parameter(extras), &record, |b, record| {
            b.iter(|| {
                let row = codecs.contacts.encode(record).expect("encode");
                black_box(codecs.contacts.decode(&row).expect("decode"));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode_decode, bench_payload_width);
criterion_main!(benches);
