use criterion::{criterion_group, criterion_main, Criterion};
use smartnav::movement::{cell_end, cell_start, match_line_start};
use smartnav::{smart_up, EditorSurface, LineBuffer, Position};
use std::hint::black_box;

fn prefix_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_matching");

    let lines = [
        "### Heading text",
        "[^note]: footnote body",
        "  12) ordered item",
        "  > quoted",
        "    - [x] nested task",
        "plain paragraph text with no prefix at all",
    ];

    group.bench_function("match_line_start", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(match_line_start(black_box(line), true));
            }
        })
    });

    group.finish();
}

fn cell_boundaries(c: &mut Criterion) {
    let mut group = c.benchmark_group("cell_boundaries");

    // Wide row with escaped pipes to stress separator scanning
    let row = "| cell \\| text ".repeat(50) + "|";
    let len = row.chars().count();

    group.bench_function("cell_end_sweep", |b| {
        b.iter(|| {
            let mut ch = 0;
            while ch < len {
                let next = cell_end(&row, ch);
                if next == ch {
                    break;
                }
                ch = next;
            }
            black_box(ch)
        })
    });

    group.bench_function("cell_start_sweep", |b| {
        b.iter(|| {
            let mut ch = len;
            while ch > 0 {
                let next = cell_start(&row, ch);
                if next == ch {
                    break;
                }
                ch = next;
            }
            black_box(ch)
        })
    });

    group.finish();
}

fn table_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_rows");

    let mut text = String::from("Intro\n\n| a | b | c |\n|---|:-:|--:|\n");
    for i in 0..1_000 {
        text.push_str(&format!("| {} | {} | {} |\n", i, i * 2, i * 3));
    }
    let rows = 1_000 + 4;
    let probe = |offset: usize| offset >= 7;

    group.bench_function("smart_up_column_walk", |b| {
        b.iter_batched(
            || {
                let mut buf = LineBuffer::from_text(&text);
                buf.set_cursor(Position::new(rows - 1, 2)).unwrap();
                buf
            },
            |mut buf| {
                while buf.cursor().line > 1 {
                    black_box(smart_up(&mut buf, &probe));
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, prefix_matching, cell_boundaries, table_rows);
criterion_main!(benches);
