// src/predict.rs
//! Match analysis by a chat model.
//!
//! Four prompts run in sequence. The first three only see the team names;
//! the last sees their three answers and produces the pick.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::config::consts::{
    PPLX_MAX_TOKENS, PPLX_MODEL, PPLX_MODEL_KEY, PPLX_TEMPERATURE_RANGE, PPLX_TIMEOUT_SECS,
};
use crate::config::options::PredictOptions;
use crate::error::PredictError;

/// Output of one analysis, section by section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub team_stats: String,
    pub sentiment_analysis: String,
    pub match_context: String,
    pub prediction: String,
}

impl Prediction {
    /// `(heading, body)` in display order.
    pub fn sections(&self) -> [(&'static str, &str); 4] {
        [
            ("Team Statistics", self.team_stats.as_str()),
            ("Sentiment Analysis", self.sentiment_analysis.as_str()),
            ("Match Context", self.match_context.as_str()),
            ("AI Prediction", self.prediction.as_str()),
        ]
    }
}

pub trait Predict {
    fn analyze(&self, home: &str, away: &str) -> Result<Prediction, PredictError>;
}

/// A known model: provider name and limits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelSpec {
    pub name: &'static str,
    pub max_tokens: u32,
    pub temperature_range: (f32, f32),
}

const MODELS: &[(&str, ModelSpec)] = &[(
    PPLX_MODEL_KEY,
    ModelSpec {
        name: PPLX_MODEL,
        max_tokens: PPLX_MAX_TOKENS,
        temperature_range: PPLX_TEMPERATURE_RANGE,
    },
)];

pub fn model_spec(key: &str) -> Result<ModelSpec, PredictError> {
    MODELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, spec)| *spec)
        .ok_or_else(|| {
            let known: Vec<&str> = MODELS.iter().map(|(k, _)| *k).collect();
            PredictError::Config(format!("unknown model type {key:?}, choose from {known:?}"))
        })
}

fn team_stats_prompt(home: &str, away: &str) -> String {
    format!(
        "Analyze these football teams: {home} vs {away}.\n\
         Consider their last 5 matches, head-to-head history, and key player statistics.\n\
         Provide detailed analysis in bullet points."
    )
}

fn sentiment_prompt(home: &str, away: &str) -> String {
    format!("Analyze social media sentiment around {home} vs {away} match.")
}

fn context_prompt(home: &str, away: &str) -> String {
    format!("Identify key contextual factors for {home} vs {away} match.")
}

fn final_prompt(team_stats: &str, sentiment: &str, context: &str) -> String {
    format!(
        "Based on the following analysis:\n{team_stats}\n{sentiment}\n{context}\n\
         Provide a predicted outcome with confidence percentage and recommended bet."
    )
}

/// Run the four-step chain, sending each prompt through `complete`.
pub fn run_chain<C>(home: &str, away: &str, mut complete: C) -> Result<Prediction, PredictError>
where
    C: FnMut(&str) -> Result<String, PredictError>,
{
    let team_stats = complete(&team_stats_prompt(home, away))?;
    let sentiment_analysis = complete(&sentiment_prompt(home, away))?;
    let match_context = complete(&context_prompt(home, away))?;
    let prediction = complete(&final_prompt(&team_stats, &sentiment_analysis, &match_context))?;
    Ok(Prediction { team_stats, sentiment_analysis, match_context, prediction })
}

pub struct PerplexityPredictor {
    client: Client,
    endpoint: String,
    api_key: String,
    model: ModelSpec,
    temperature: f32,
}

impl PerplexityPredictor {
    pub fn new(opts: &PredictOptions) -> Result<Self, PredictError> {
        let model = model_spec(&opts.model)?;
        let (lo, hi) = model.temperature_range;
        if !(lo..=hi).contains(&opts.temperature) {
            return Err(PredictError::Config(format!(
                "temperature {} outside {lo}..={hi}",
                opts.temperature
            )));
        }
        let api_key = opts
            .api_key
            .clone()
            .ok_or_else(|| PredictError::Config(s!("PPLX_API_KEY is not set")))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(PPLX_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            endpoint: opts.endpoint.clone(),
            api_key,
            model,
            temperature: opts.temperature,
        })
    }

    fn complete(&self, prompt: &str) -> Result<String, PredictError> {
        let payload = json!({
            "model": self.model.name,
            "temperature": self.temperature,
            "max_tokens": self.model.max_tokens,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let resp = self.client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(PredictError::Status { status: status.as_u16(), body });
        }
        let body: Value = resp.json()?;
        let text = completion_text(&body)?;
        debug!(chars = text.len(), "completion received");
        Ok(text)
    }
}

impl Predict for PerplexityPredictor {
    fn analyze(&self, home: &str, away: &str) -> Result<Prediction, PredictError> {
        info!(home, away, model = self.model.name, "analyzing match");
        run_chain(home, away, |prompt| self.complete(prompt))
    }
}

/// `choices[0].message.content` of a chat-completions response.
pub fn completion_text(body: &Value) -> Result<String, PredictError> {
    body.get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .ok_or_else(|| PredictError::Response(s!("missing choices[0].message.content")))
}
