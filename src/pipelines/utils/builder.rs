use std::sync::Arc;

use crate::error::Result;
use crate::pipelines::cache::{global_cache, ModelOptions};

pub trait BasePipelineBuilder<M>: Sized
where
    M: Send + Sync + 'static,
{
    type Pipeline;

    type Options: ModelOptions + Clone;

    fn options(&self) -> &Self::Options;

    fn create_model(options: Self::Options) -> Result<M>;

    fn construct_pipeline(model: Arc<M>) -> Result<Self::Pipeline>;

    fn build(self) -> Result<Self::Pipeline> {
        let key = self.options().cache_key();
        let _span = tracing::info_span!("build_pipeline", model = %key).entered();

        let model = global_cache().get_or_create(&key, || Self::create_model(self.options().clone()))?;

        Self::construct_pipeline(model)
    }
}

pub struct StandardPipelineBuilder<Opts> {
    pub(crate) options: Opts,
}

impl<Opts> StandardPipelineBuilder<Opts> {
    pub fn new(options: Opts) -> Self {
        Self { options }
    }
}
