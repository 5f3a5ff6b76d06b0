use std::{collections::BTreeMap, sync::Arc};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{
    constants::quiz_prompt::{
        QUIZ_GENERATION_TEMPLATE, QUIZ_GENERATION_VARIABLES, QUIZ_REVIEW_TEMPLATE,
        QUIZ_REVIEW_VARIABLES, RESPONSE_JSON,
    },
    errors::{AppError, AppResult},
    models::domain::QuizSpec,
    services::model_service::{ChatModel, ModelResponse, TokenUsage},
};

static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("PLACEHOLDER_REGEX is a valid regex pattern")
});

/// Named values substituted into a prompt template.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PromptVariables(BTreeMap<String, String>);

impl PromptVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PromptTemplate {
    pub template: &'static str,
    pub input_variables: &'static [&'static str],
}

impl PromptTemplate {
    pub const fn new(template: &'static str, input_variables: &'static [&'static str]) -> Self {
        Self {
            template,
            input_variables,
        }
    }

    /// Substitutes `{name}` placeholders in one pass, so braces inside the
    /// substituted values are left alone.
    pub fn render(&self, variables: &PromptVariables) -> AppResult<String> {
        if let Some(missing) = self
            .input_variables
            .iter()
            .find(|name| variables.get(name).is_none())
        {
            return Err(AppError::ValidationError(format!(
                "missing prompt variable '{}'",
                missing
            )));
        }

        let rendered = PLACEHOLDER_REGEX.replace_all(self.template, |caps: &Captures| {
            let name = &caps[1];
            match variables.get(name) {
                Some(value) if self.input_variables.iter().any(|declared| *declared == name) => {
                    value.to_string()
                }
                _ => caps[0].to_string(),
            }
        });

        Ok(rendered.into_owned())
    }
}

/// One templated model call: template, then model, then the text output.
pub struct PromptStage {
    pub name: &'static str,
    template: PromptTemplate,
    model: Arc<dyn ChatModel>,
}

impl PromptStage {
    pub fn new(name: &'static str, template: PromptTemplate, model: Arc<dyn ChatModel>) -> Self {
        Self {
            name,
            template,
            model,
        }
    }

    pub async fn invoke(&self, variables: &PromptVariables) -> AppResult<ModelResponse> {
        let prompt = self.template.render(variables)?;
        log::debug!("[{}] prompt:\n{}", self.name, prompt);

        let response = self.model.complete(prompt).await?;
        log::debug!("[{}] output:\n{}", self.name, response.text);
        Ok(response)
    }
}

/// Places a stage's output under `output_key` and carries selected inputs
/// forward, producing the next stage's variables.
#[derive(Clone, Copy, Debug)]
pub struct OutputRename {
    pub output_key: &'static str,
    pub carried: &'static [&'static str],
}

impl OutputRename {
    pub fn apply(&self, output: String, inputs: &PromptVariables) -> PromptVariables {
        let mut next = PromptVariables::new().with(self.output_key, output);
        for name in self.carried {
            if let Some(value) = inputs.get(name) {
                next.insert(*name, value);
            }
        }
        next
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainOutput {
    pub review: String,
    pub usage: TokenUsage,
}

/// Generate a quiz, then have it reviewed. The two calls are strictly sequential.
pub struct QuizChain {
    generation: PromptStage,
    rename: OutputRename,
    review: PromptStage,
}

impl QuizChain {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self {
            generation: PromptStage::new(
                "quiz_generation",
                PromptTemplate::new(QUIZ_GENERATION_TEMPLATE, QUIZ_GENERATION_VARIABLES),
                Arc::clone(&model),
            ),
            rename: OutputRename {
                output_key: "quiz",
                carried: &["subject"],
            },
            review: PromptStage::new(
                "quiz_review",
                PromptTemplate::new(QUIZ_REVIEW_TEMPLATE, QUIZ_REVIEW_VARIABLES),
                model,
            ),
        }
    }

    pub fn input_variables(spec: &QuizSpec) -> PromptVariables {
        PromptVariables::new()
            .with("text", spec.text())
            .with("number", spec.number().to_string())
            .with("subject", spec.subject())
            .with("tone", spec.tone())
            .with("response_json", RESPONSE_JSON.as_str())
    }

    pub async fn run(&self, spec: &QuizSpec) -> AppResult<ChainOutput> {
        let inputs = Self::input_variables(spec);

        let generated = self.generation.invoke(&inputs).await?;
        let review_inputs = self.rename.apply(generated.text, &inputs);
        let reviewed = self.review.invoke(&review_inputs).await?;

        let usage = [generated.usage, reviewed.usage]
            .into_iter()
            .flatten()
            .fold(TokenUsage::default(), |total, usage| total + usage);

        Ok(ChainOutput {
            review: reviewed.text,
            usage,
        })
    }
}
