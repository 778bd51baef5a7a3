// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use odds_scrape::specs::events;

/// A listing page with `n` events. Every tenth one has only two prices and is
/// skipped; the others carry a fourth, ignored price.
fn synthetic_page(n: usize) -> String {
    let mut doc = String::from("<html><body><div class=\"events\">");
    for i in 0..n {
        let short = i % 10 == 9;
        let draw = if short { "" } else { r#"<span class="button-odds">3.40</span>"# };
        let extra = if short { "" } else { r#"<span class="button-odds">1.01</span>"# };
        doc.push_str(&format!(
            r#"<div class="event-list-group-container">
                 <div class="event-time">{:02}:00</div>
                 <div class="event-competition">League {}</div>
                 <span class="event-name-team">Home {i}</span>
                 <span class="event-name-team">Away {i}</span>
                 <span class="button-odds">1.{:02}</span>{draw}<span class="button-odds">4.20</span>
                 {extra}
               </div>"#,
            i % 24,
            i % 7,
            (i % 89) + 10,
        ));
    }
    doc.push_str("</div></body></html>");
    doc
}

fn bench_extract(c: &mut Criterion) {
    let small = synthetic_page(20);
    let large = synthetic_page(500);

    c.bench_function("extract_20", |b| {
        b.iter(|| {
            let rows = events::extract(black_box(&small)).unwrap_or_default();
            black_box(rows.len())
        })
    });

    c.bench_function("extract_500", |b| {
        b.iter(|| {
            let rows = events::extract(black_box(&large)).unwrap_or_default();
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
