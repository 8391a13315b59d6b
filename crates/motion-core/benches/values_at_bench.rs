use criterion::{black_box, criterion_group, criterion_main, Criterion};
use motion_core::{ColumnDescriptor, DataTable, Record};

fn build_table(series: usize, steps: usize) -> DataTable {
    let columns = vec![
        ColumnDescriptor::text("name", "Name"),
        ColumnDescriptor::number("year", "Year"),
        ColumnDescriptor::number("income", "Income"),
        ColumnDescriptor::number("population", "Population"),
    ];
    let mut records = Vec::with_capacity(series * steps);
    for s in 0..series {
        for t in 0..steps {
            let x = t as f64;
            records.push(
                Record::new()
                    .with("name", format!("s{s}"))
                    .with("year", 1800.0 + x)
                    .with("income", (x * 0.05 + s as f64).sin() * 1000.0 + 2000.0)
                    .with("population", 1e6 + x * 1e4 * (s + 1) as f64),
            );
        }
    }
    DataTable::new(columns, records).expect("valid table")
}

fn bench_values_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("values_at");
    for &(series, steps) in &[(50usize, 200usize), (200, 200)] {
        let table = build_table(series, steps);
        group.bench_function(format!("{series}x{steps}"), |b| {
            let mut t = 1800.0;
            b.iter(|| {
                t = if t > 2000.0 { 1800.0 } else { t + 0.37 };
                black_box(table.values_at(black_box(t)));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_values_at);
criterion_main!(benches);
