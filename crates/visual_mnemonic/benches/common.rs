#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use visual_mnemonic::prelude::{derive, Canvas, DeterministicRng, NoiseField};

pub const SIZES: [(u32, u32); 4] = [(16, 16), (32, 32), (60, 40), (96, 24)];
pub const SEED: &str = "bench";

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(20)
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(2))
}

pub fn pixel_throughput(canvas: Canvas) -> Throughput {
    Throughput::Elements(canvas.len() as u64)
}

pub fn canvas_label(canvas: Canvas) -> String {
    format!("{}x{}", canvas.width(), canvas.height())
}

/// Field drawn the same way a generation run would draw it for [`SEED`].
pub fn bench_field() -> NoiseField {
    let seed = derive(SEED).expect("text seeds always derive");
    let mut rng = DeterministicRng::from_seed(&seed);
    NoiseField::prepare(&seed, 5, 7, &mut rng).expect("default limits are valid")
}

pub fn canvases() -> impl Iterator<Item = Canvas> {
    SIZES
        .into_iter()
        .map(|(w, h)| Canvas::new(w, h).expect("bench sizes are non-zero"))
}
