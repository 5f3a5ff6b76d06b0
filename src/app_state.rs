use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        model_service::{ChatModel, OpenAiChatModel},
        quiz_service::QuizService,
        text_extractor::{FileTextExtractor, TextExtractor},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let model: Arc<dyn ChatModel> = Arc::new(OpenAiChatModel::new(&config));
        log::info!("Using model '{}' at {}", config.llm_model, config.llm_base_url);

        Self::with_services(config, Arc::new(FileTextExtractor), model)
    }

    pub fn with_services(
        config: Config,
        extractor: Arc<dyn TextExtractor>,
        model: Arc<dyn ChatModel>,
    ) -> Self {
        Self {
            quiz_service: Arc::new(QuizService::new(extractor, model)),
            config: Arc::new(config),
        }
    }
}
