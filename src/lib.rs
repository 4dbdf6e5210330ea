// THEORY:
// This file is the main entry point for the `pxl` library crate. It exposes
// the pipelines and their configuration as the public API; the block geometry
// and color arithmetic in `core_modules` stay available for callers that want
// to drive single blocks or plug in their own pixel storage via `PixelCanvas`.

pub mod core_modules;
pub mod error;
pub mod parallel_pipeline;
pub mod pipeline;

pub use core_modules::canvas::PixelCanvas;
pub use error::PxlError;
pub use parallel_pipeline::ParallelPipeline;
pub use pipeline::{
    Color, DEFAULT_BLOCK_SIZE, DiagonalSplit, Orientation, PipelineConfig, PxlPipeline, SplitMode,
};
