//! Benchmarks for the composition primitives.

mod angular;
mod render;
mod voices;

pub use angular::bench_angular;
pub use render::bench_render;
pub use voices::bench_voices;
