use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use ruc_generator::analysis::{analyze, label_components};
use ruc_generator::io::{ruc_parser, ruc_writer};
use ruc_generator::synthesis::{
    hexagonal_pack_nb_radius, hexagonal_pack_vf_nb, hexagonal_pack_vf_radius, square_pack_vf_nb,
};
use ruc_generator::MaterialPair;

/// Synthesis of each family at a resolution typical of the micromechanics solvers
fn bench_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesis");
    let materials = MaterialPair::default();

    // Quarter-cell mirroring
    group.bench_function("hexagonal_vf_nb_200", |b| {
        b.iter(|| hexagonal_pack_vf_nb(black_box(0.6), black_box(200), materials))
    });

    // Direct five-circle classification of a comparable cell
    group.bench_function("hexagonal_nb_radius_200", |b| {
        b.iter(|| hexagonal_pack_nb_radius(black_box(200), black_box(80.0), materials))
    });

    group.bench_function("hexagonal_vf_radius_40", |b| {
        b.iter(|| hexagonal_pack_vf_radius(black_box(0.6), black_box(40.0), materials))
    });

    group.bench_function("square_vf_nb_200", |b| {
        b.iter(|| square_pack_vf_nb(black_box(0.5), black_box(200), materials))
    });

    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    let grid = match hexagonal_pack_vf_nb(0.6, 200, MaterialPair::default()) {
        Ok(micro) => micro.grid,
        Err(err) => panic!("benchmark grid: {}", err),
    };

    group.bench_function("label_components_200", |b| {
        b.iter(|| label_components(black_box(&grid), 1))
    });

    group.bench_function("analyze_200", |b| b.iter(|| analyze(black_box(&grid), 1, 2)));

    group.finish();
}

fn bench_ruc_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("ruc_codec");
    let grid = match square_pack_vf_nb(0.5, 200, MaterialPair::default()) {
        Ok(micro) => micro.grid,
        Err(err) => panic!("benchmark grid: {}", err),
    };
    let canonical = ruc_writer::encode(&grid);
    let wrapped = match ruc_writer::encode_wrapped(&grid, 20) {
        Ok(text) => text,
        Err(err) => panic!("benchmark text: {}", err),
    };

    group.bench_function("encode_200", |b| b.iter(|| ruc_writer::encode(black_box(&grid))));

    group.bench_function("decode_200", |b| {
        b.iter(|| ruc_parser::decode(black_box(&canonical), false))
    });

    group.bench_function("decode_wrapped_200", |b| {
        b.iter(|| ruc_parser::decode(black_box(&wrapped), true))
    });

    group.finish();
}

criterion_group!(benches, bench_synthesis, bench_analysis, bench_ruc_codec);
criterion_main!(benches);
