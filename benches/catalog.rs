// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lanedex-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lanedex and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use lanedex::model::{Catalog, CatalogOrigin};
use lanedex::render::{analyze, render_card};
use lanedex::slug::{derive_slug, LinkTemplates};
use lanedex::store::{normalize_payload, try_load_catalog, CatalogSource, LoadOptions};
use lanedex::ui::Slot;

mod fixtures;
mod profiler;

use fixtures::{Case, TempDir};

fn catalog_for(case: Case) -> Catalog {
    let champions = normalize_payload(fixtures::array_payload(case), "bench").expect("normalize");
    Catalog::new(champions, CatalogOrigin::Source("bench".to_owned()))
}

// Benchmark identity (keep stable):
// - Group names: `catalog.normalize`, `catalog.sort`, `catalog.load_file`, `catalog.render`.
// - Case IDs (the string after the `/`) must remain stable so results stay comparable.
fn benches_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog.normalize");
    for (id, case) in [("array_small", Case::Small), ("array_large", Case::Large)] {
        let payload = fixtures::array_payload(case);
        group.bench_function(id, move |b| {
            b.iter_batched(
                || payload.clone(),
                |payload| black_box(normalize_payload(payload, "bench").expect("normalize").len()),
                BatchSize::SmallInput,
            )
        });
    }

    let keyed = fixtures::keyed_payload(Case::Large);
    group.bench_function("keyed_large", move |b| {
        b.iter_batched(
            || keyed.clone(),
            |payload| black_box(normalize_payload(payload, "bench").expect("normalize").len()),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn benches_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog.sort");
    let catalog = catalog_for(Case::Large);

    group.bench_function("list_sorted_large", |b| {
        b.iter(|| black_box(black_box(&catalog).list_sorted().len()))
    });
    group.bench_function("derive_slug_large", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for champion in catalog.iter() {
                acc = acc.wrapping_add(derive_slug(black_box(&champion.name)).len());
            }
            black_box(acc)
        })
    });
    group.finish();
}

fn benches_load_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog.load_file");
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().expect("rt");

    let tmp = TempDir::new("load_file_large");
    let path = tmp.path().join("champions.json");
    let bytes = serde_json::to_vec(&fixtures::array_payload(Case::Large)).expect("serialize");
    std::fs::write(&path, bytes).expect("write catalog");
    let source = CatalogSource::File(path);
    let options = LoadOptions::default();

    group.bench_function("large", |b| {
        b.iter(|| {
            let catalog =
                runtime.block_on(try_load_catalog(black_box(&source), &options)).expect("load");
            black_box(catalog.len())
        })
    });
    group.finish();
}

fn benches_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog.render");
    let catalog = catalog_for(Case::Small);
    let links = LinkTemplates::default();
    let names = catalog.names_sorted();

    group.bench_function("cards_small", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for champion in catalog.iter() {
                let card = render_card(black_box(champion), Slot::Primary, &links);
                acc = acc.wrapping_add(card.to_lines(72).len());
            }
            black_box(acc)
        })
    });
    group.bench_function("matchups_small", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for (primary, secondary) in names.iter().zip(names.iter().rev()) {
                let matchup = analyze(&catalog, primary, secondary).expect("analyze");
                acc = acc.wrapping_add(matchup.summary().len());
            }
            black_box(acc)
        })
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_normalize, benches_sort, benches_load_file, benches_render
}
criterion_main!(benches);
