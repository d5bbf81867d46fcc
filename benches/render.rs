use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use cwc_page::fallback::seed_fixtures;
use cwc_page::fixtures_render::fill_fixtures;
use cwc_page::page::Page;
use cwc_page::scorer_render::{fill_scorer_ranking, fill_scorer_strip};
use cwc_page::scorers_fetch::parse_scorers_json;
use cwc_page::state::{top_scorers, ScorerEntry};

fn sample_entries(count: usize) -> Vec<ScorerEntry> {
    (0..count)
        .map(|idx| ScorerEntry {
            name: format!("Jogador {idx:03}"),
            photo: format!("https://img.example.net/players/{idx}.png"),
            crest: "https://img.example.net/crest.png".to_string(),
            position: "Atacante".to_string(),
            goals: (idx % 9) as u32,
        })
        .collect()
}

fn sample_feed_json(count: usize) -> String {
    let records: Vec<String> = (0..count)
        .map(|idx| {
            format!(
                r#"{{"jogador-foto":"https://img.example.net/players/{idx}.png","jogador-escudo":"https://img.example.net/crest.png","jogador-nome":"Jogador {idx:03}","jogador-posicao":"Atacante","jogador-gols":"{}"}}"#,
                idx % 9
            )
        })
        .collect();
    format!("[{}]", records.join(","))
}

fn bench_scorers_parse(c: &mut Criterion) {
    let raw = sample_feed_json(200);
    c.bench_function("scorers_parse_200", |b| {
        b.iter(|| {
            let entries = parse_scorers_json(black_box(&raw)).unwrap();
            black_box(entries.len());
        })
    });
}

fn bench_top_scorers_sort(c: &mut Criterion) {
    let entries = sample_entries(200);
    c.bench_function("top_scorers_sort_200", |b| {
        b.iter(|| {
            let top = top_scorers(black_box(&entries), Some(10));
            black_box(top.len());
        })
    });
}

fn bench_strip_render(c: &mut Criterion) {
    let entries = sample_entries(200);
    let page = Page::new();
    let mount = page.mount("div", "artilheiros-copa");
    c.bench_function("strip_render_200", |b| {
        b.iter(|| {
            fill_scorer_strip(&mount, black_box(&entries));
            black_box(mount.html().len());
        })
    });
}

fn bench_ranking_render(c: &mut Criterion) {
    let entries = sample_entries(200);
    let page = Page::new();
    let mount = page.mount("div", "ranking-artilheiros");
    c.bench_function("ranking_render_200", |b| {
        b.iter(|| {
            fill_scorer_ranking(&mount, black_box(&entries));
            black_box(mount.html().len());
        })
    });
}

fn bench_fixtures_render(c: &mut Criterion) {
    let fixtures = seed_fixtures();
    let page = Page::new();
    let mount = page.mount("div", "knockout-fixtures");
    c.bench_function("fixtures_render_seed", |b| {
        b.iter(|| {
            fill_fixtures(&mount, black_box(&fixtures));
            black_box(mount.html().len());
        })
    });
}

criterion_group!(
    render,
    bench_scorers_parse,
    bench_top_scorers_sort,
    bench_strip_render,
    bench_ranking_render,
    bench_fixtures_render
);
criterion_main!(render);
