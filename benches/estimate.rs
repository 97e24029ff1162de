use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgb, RgbImage};

use clean_quote::{
    calc_room, extract_image_stats, soil_score, ClassifierConfig, ContractParams, RoomInput,
    RoomType, SoilGrade,
};

fn benchmark_pricing(c: &mut Criterion) {
    let room = RoomInput {
        area_m2: 45.0,
        room_type: RoomType::Kitchen,
        soil: SoilGrade::S3,
        window_area_m2: 6.0,
        window_min_per_m2: 3.0,
        ..RoomInput::default()
    };
    let contract = ContractParams {
        distance_km: 15.0,
        setup_min: 10.0,
        ..ContractParams::default()
    };

    c.bench_function("calc_room", |b| {
        b.iter(|| calc_room(black_box(&room), black_box(&contract)))
    });
}

fn benchmark_image_stats(c: &mut Criterion) {
    // Deterministic textured photo at a typical downsampled resolution
    let mut img = RgbImage::new(640, 480);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let v = ((x * 31 + y * 17) % 256) as u8;
        *pixel = Rgb([v, v.wrapping_add(40), v / 2]);
    }
    let config = ClassifierConfig::default();

    c.bench_function("extract_image_stats_192", |b| {
        b.iter(|| extract_image_stats(black_box(&img), black_box(config.sample_size)))
    });

    let stats = extract_image_stats(&img, config.sample_size).unwrap();
    c.bench_function("soil_score", |b| {
        b.iter(|| soil_score(black_box(&stats), black_box(&config)))
    });
}

criterion_group!(benches, benchmark_pricing, benchmark_image_stats);
criterion_main!(benches);
