//! Performance benchmarks for rs-wikimedia2text.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Small synthetic article (~1KB) for microbenchmarks
//! - A repeated-body document (~1MB) for throughput

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rs_wikimedia2text::{parse, parse_with_options, Options};

const SAMPLE_ARTICLE: &str = r#"{{Use British English|date=January 2014}}
{{Infobox philosophy|name=Anarchism}}

'''Anarchism''' is a [[political philosophy]] that advocates [[stateless society|stateless societies]],<ref>"A social philosophy that rejects authoritarian government." George Woodcock.</ref> often defined as [[self-governance|self-governed]] voluntary institutions.

==Etymology and terminology==
{{Related articles|Anarchist terminology}}

The term ''[[wikt:anarchism|anarchism]]'' is a compound word composed from the word ''[[anarchy]]'' and the suffix ''[[-ism]]'', from the Greek &alpha;&nu;&alpha;&rho;&chi;&iota;&alpha;, i.e. ''anarchy''.

==History==
===Origins===
Early [[anarchist]] themes can be found in the works of many thinkers; see [http://example.org/history the overview] for details.

{| class="wikitable"
! Thinker !! Era
|-
| Laozi || 6th century BC
|}

* Mutual aid
* Voluntary association
"#;

fn bench_parse_default(c: &mut Criterion) {
    c.bench_function("parse_default", |b| {
        b.iter(|| parse(black_box(SAMPLE_ARTICLE)));
    });
}

fn bench_parse_with_options(c: &mut Criterion) {
    let options = Options {
        keep_links: true,
        keep_sections: true,
    };

    c.bench_function("parse_with_options", |b| {
        b.iter(|| parse_with_options(black_box(SAMPLE_ARTICLE), black_box(&options)));
    });
}

/// Throughput over a larger repeated-body document.
fn bench_parse_large(c: &mut Criterion) {
    let mut document = String::with_capacity(1024 * 1024 + SAMPLE_ARTICLE.len());
    while document.len() < 1024 * 1024 {
        document.push_str(SAMPLE_ARTICLE);
    }

    let mut group = c.benchmark_group("large_document");
    group.throughput(Throughput::Bytes(document.len() as u64));
    group.bench_function("parse_1mb", |b| {
        b.iter(|| parse(black_box(&document)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_parse_default,
    bench_parse_with_options,
    bench_parse_large
);
criterion_main!(benches);
