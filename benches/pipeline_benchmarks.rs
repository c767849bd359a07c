use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gcode_rewind::{parse_line, pipeline, profile};

/// Generate sliced-G-code content for benchmarking
fn generate_gcode_content(lines: usize) -> Vec<String> {
    let mut content = Vec::with_capacity(lines + 4);

    content.push("M104 S200".to_string());
    content.push("G28".to_string());
    content.push(";LAYER:0".to_string());

    for i in 0..lines {
        match i % 4 {
            0 => content.push(format!(
                "G1 F1500 X{:.3} Y{:.3} E{:.3}",
                (i as f32) * 0.1,
                (i as f32) * 0.2,
                (i as f32) * 0.02
            )),
            1 => content.push(format!("G1 X{:.3} Y{:.3}", (i as f32) * 0.1, (i as f32) * 0.2)),
            2 => content.push(format!("; layer {}", i / 100)),
            3 => content.push(format!("G0 Z{:.2}", (i as f32) * 0.01)),
            _ => unreachable!(),
        }
    }

    content.push("M84".to_string());
    content
}

fn bench_parse_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_line");

    for size in [100, 1_000, 10_000] {
        let content = generate_gcode_content(size);
        let bytes: usize = content.iter().map(|l| l.len() + 1).sum();
        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| {
                for line in content {
                    black_box(parse_line(line));
                }
            })
        });
    }

    group.finish();
}

fn bench_rewind_document(c: &mut Criterion) {
    let machine = profile::embedded_default().expect("embedded profile");
    let mut group = c.benchmark_group("rewind_document");

    for size in [100, 1_000, 10_000] {
        let content = generate_gcode_content(size);
        let bytes: usize = content.iter().map(|l| l.len() + 1).sum();
        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| black_box(pipeline::rewind_document(content.clone(), &machine)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_line, bench_rewind_document);
criterion_main!(benches);
