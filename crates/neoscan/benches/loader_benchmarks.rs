//! Loader and linking performance benchmarks.
//!
//! Measures catalog and approach loading across source sizes, and the
//! designation join that links them.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use neoscan::input::{read_approaches, read_catalog};
use neoscan::{LoaderConfig, NeoDatabase};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Generate a synthetic catalog with the usual mix of missing names and diameters.
fn generate_catalog(rows: usize) -> String {
    let mut data = String::from("id,pdes,name,pha,diameter,albedo\n");
    for row in 0..rows {
        let name = if row % 20 == 0 { format!("Name{}", row) } else { String::new() };
        let pha = match row % 3 {
            0 => "Y",
            1 => "N",
            _ => "",
        };
        let diameter = if row % 4 == 0 { format!("{:.3}", row as f64 * 0.01) } else { String::new() };
        data.push_str(&format!("a{:07},{},{},{},{},0.2\n", row, row + 1, name, pha, diameter));
    }
    data
}

/// Generate a synthetic close-approach document with `per_neo` approaches per object.
fn generate_approaches(neos: usize, per_neo: usize) -> String {
    let mut rows = Vec::with_capacity(neos * per_neo);
    for i in 0..neos * per_neo {
        rows.push(format!(
            r#"["{}","1","2451545.0","{}-{}-{:02} {:02}:{:02}","{:.4}","0.1","0.1","{:.2}","5.0","00:01","20.0"]"#,
            (i % neos) + 1,
            1900 + (i % 200),
            MONTHS[i % 12],
            (i % 28) + 1,
            i % 24,
            i % 60,
            (i % 500) as f64 * 0.001,
            5.0 + (i % 30) as f64
        ));
    }
    format!(
        r#"{{"fields":["des","orbit_id","jd","cd","dist","dist_min","dist_max","v_rel","v_inf","t_sigma_f","h"],"data":[{}]}}"#,
        rows.join(",")
    )
}

fn bench_read_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_catalog");
    let config = LoaderConfig::default();

    for rows in [1_000, 10_000, 100_000].iter() {
        let data = generate_catalog(*rows);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter(|| black_box(read_catalog(data.as_bytes(), &config).unwrap()))
        });
    }

    group.finish();
}

fn bench_read_approaches(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_approaches");
    let config = LoaderConfig::default();

    for rows in [1_000, 10_000, 100_000].iter() {
        let data = generate_approaches(*rows / 10, 10);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter(|| black_box(read_approaches(data.as_bytes(), &config).unwrap()))
        });
    }

    group.finish();
}

fn bench_link(c: &mut Criterion) {
    let mut group = c.benchmark_group("link");
    let config = LoaderConfig::default();

    for neos in [1_000, 10_000].iter() {
        let catalog = read_catalog(generate_catalog(*neos).as_bytes(), &config).unwrap();
        let approaches =
            read_approaches(generate_approaches(*neos, 10).as_bytes(), &config).unwrap();

        group.bench_with_input(BenchmarkId::new("neos", neos), neos, |b, _| {
            b.iter_with_setup(
                || (catalog.clone(), approaches.clone()),
                |(catalog, approaches)| black_box(NeoDatabase::new(catalog, approaches)),
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_read_catalog, bench_read_approaches, bench_link);
criterion_main!(benches);
