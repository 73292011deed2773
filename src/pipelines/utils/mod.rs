pub mod builder;
pub use builder::{BasePipelineBuilder, StandardPipelineBuilder};
