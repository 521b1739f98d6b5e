// benches/parse_entry.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use dict_scrape::specs::{ entry::{ self, PageHint }, verbs, xref };

const ORIGIN: &str = "https://dictionary.cambridge.org";

const HELLO: &str = include_str!("../tests/fixtures/hello_en.html");
const RUN: &str = include_str!("../tests/fixtures/run_en_cn.html");
const HELLO_VERBS: &str = include_str!("../tests/fixtures/hello_verbs.html");
const PAO: &str = include_str!("../tests/fixtures/pao_cn_en.html");

fn bench_pages(c: &mut Criterion) {
    let hint = PageHint { entry: "hello", source: "en" };

    c.bench_function("entry_monolingual", |b| {
        b.iter(|| {
            let e = entry::parse(black_box(HELLO), ORIGIN, hint);
            black_box(e.map(|e| e.definitions.len()))
        })
    });

    c.bench_function("entry_bilingual", |b| {
        b.iter(|| {
            let e = entry::parse(black_box(RUN), ORIGIN, PageHint { entry: "run", source: "en-cn" });
            black_box(e.map(|e| e.definitions.len()))
        })
    });

    c.bench_function("verb_table", |b| {
        b.iter(|| black_box(verbs::parse(black_box(HELLO_VERBS)).len()))
    });

    c.bench_function("xref_links", |b| {
        b.iter(|| {
            black_box(xref::links(black_box(PAO), "/dictionary/english-chinese-simplified/").len())
        })
    });
}

criterion_group!(benches, bench_pages);
criterion_main!(benches);
