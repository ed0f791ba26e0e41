// benches/summarize.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use page_search::core::{format_markup, summarize};

/// A chunk shaped like what the backend returns: nested, tag-dense markup.
fn sample_chunk() -> String {
    let mut html = String::from("<div class=\"content\">");
    for i in 0..200 {
        html.push_str(&format!(
            "<section id=\"s{i}\"><h2>Heading {i}</h2><p>Some <b>bold</b> text and a <a href=\"/x/{i}\">link</a> here.</p></section>"
        ));
    }
    html.push_str("</div>");
    html
}

fn bench_preview(c: &mut Criterion) {
    let html = sample_chunk();

    c.bench_function("summarize_10", |b| {
        b.iter(|| black_box(summarize(black_box(&html), 10)))
    });

    c.bench_function("summarize_all", |b| {
        b.iter(|| black_box(summarize(black_box(&html), usize::MAX)))
    });

    c.bench_function("format_markup", |b| {
        b.iter(|| black_box(format_markup(black_box(&html)).len()))
    });
}

criterion_group!(benches, bench_preview);
criterion_main!(benches);
