//! Merge throughput of the result assembler.

#![allow(clippy::unwrap_used, missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rust_decimal::Decimal;
use std::hint::black_box;
use transfer_search::application::services::ResultAssembler;
use transfer_search::domain::entities::{Offer, SupplierOffer, SupplierSearchOutcome};
use transfer_search::domain::value_objects::{
    Currency, FailureKind, Money, OfferId, SearchId, SupplierCode, Vehicle, VehicleCategory,
};

fn outcomes(suppliers: usize, offers_per_supplier: usize) -> Vec<SupplierSearchOutcome> {
    let search_id = SearchId::new_v4();
    let eur = Currency::new("EUR").unwrap();

    (0..suppliers)
        .map(|s| {
            let code = SupplierCode::new(format!("supplier-{s}"));
            if s % 5 == 4 {
                return SupplierSearchOutcome::failure(code, FailureKind::Timeout, "slow");
            }
            let offers = (0..offers_per_supplier)
                .map(|o| {
                    // Spread prices so suppliers interleave, with some ties.
                    let cents = ((o * 7919 + s * 104_729) % 20_000) as i64 + 1_000;
                    let raw = SupplierOffer::new(
                        OfferId::new(format!("offer-{}", o % (offers_per_supplier - 1).max(1))),
                        Money::new(Decimal::new(cents, 2), eur.clone()).unwrap(),
                        Vehicle::new(VehicleCategory::Sedan),
                        4,
                        format!("token-{s}-{o}"),
                    );
                    Offer::from_supplier(search_id, code.clone(), raw)
                })
                .collect();
            SupplierSearchOutcome::success(code, offers)
        })
        .collect()
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    let assembler = ResultAssembler::new();

    for (suppliers, per_supplier) in [(3, 10), (10, 50), (25, 200)] {
        let input = outcomes(suppliers, per_supplier);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{suppliers}x{per_supplier}")),
            &input,
            |b, input| b.iter(|| assembler.merge(black_box(input))),
        );
    }

    let input = outcomes(25, 200);
    let limited = ResultAssembler::new().with_max_offers(20);
    group.bench_function("25x200_top20", |b| {
        b.iter(|| limited.merge(black_box(&input)));
    });

    group.finish();
}

criterion_group!(benches, bench_merge);
criterion_main!(benches);
