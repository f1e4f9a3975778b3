// Criterion benchmarks for Lume Quest

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lume_quest::core::{
    adjusted_compatibility, build_avatar_profile, classify, derive_seed, generate_candidates,
    rank_candidates, spawn_lobby,
};
use lume_quest::models::{Gender, InterviewAnswers, LookingFor, PlayerSetup};

fn create_answers() -> InterviewAnswers {
    InterviewAnswers::new()
        .with("q1", "I like direct honest talk")
        .with("q2", "I want long-term stability")
        .with("q3", "quality time and listening")
        .with("q4", "cozy and calm, deep talks at home")
        .with("q5", "slow and steady")
}

fn create_setup() -> PlayerSetup {
    PlayerSetup {
        name: "Ava".to_string(),
        birth_date: "1998-04-12".to_string(),
        location: "Singapore".to_string(),
        gender: Gender::Female,
        looking_for_gender: LookingFor::Male,
        min_partner_age: 24,
        max_partner_age: 34,
    }
}

fn bench_derive_seed(c: &mut Criterion) {
    c.bench_function("derive_seed", |b| {
        b.iter(|| derive_seed(black_box("Ava-1998-04-12-Singapore-female")));
    });
}

fn bench_classify(c: &mut Criterion) {
    let answers = create_answers();
    c.bench_function("classify", |b| {
        b.iter(|| classify(black_box(&answers)));
    });
}

fn bench_candidates(c: &mut Criterion) {
    let answers = create_answers();
    let personality = classify(&answers);
    let mut group = c.benchmark_group("candidates");

    for seed in [0u64, 2535, 1_000_003].iter() {
        group.bench_with_input(BenchmarkId::new("generate", seed), seed, |b, &seed| {
            b.iter(|| generate_candidates(black_box("calm"), black_box(seed)));
        });

        let pool = generate_candidates("calm", *seed);
        group.bench_with_input(BenchmarkId::new("rank", seed), &pool, |b, pool| {
            b.iter(|| rank_candidates(black_box(pool), &answers, "Ava", &personality));
        });
    }

    group.finish();
}

fn bench_adjusted_compatibility(c: &mut Criterion) {
    let answers = create_answers();
    c.bench_function("adjusted_compatibility", |b| {
        b.iter(|| adjusted_compatibility(black_box(74), black_box("intellectual"), &answers));
    });
}

fn bench_full_profile(c: &mut Criterion) {
    let setup = create_setup();
    let answers = create_answers();
    c.bench_function("build_avatar_profile", |b| {
        b.iter(|| build_avatar_profile(black_box(&setup), black_box(&answers), false));
    });
}

fn bench_lobby(c: &mut Criterion) {
    c.bench_function("spawn_lobby", |b| {
        b.iter(|| spawn_lobby(black_box(30)));
    });
}

criterion_group!(
    benches,
    bench_derive_seed,
    bench_classify,
    bench_candidates,
    bench_adjusted_compatibility,
    bench_full_profile,
    bench_lobby
);
criterion_main!(benches);
