//! Outbound call to the advice generator
//!
//! The one remote collaborator: an OpenAI-compatible chat-completions
//! endpoint. It gets a composed prompt and a bounded timeout; failures
//! surface as 503 and never touch market state.

use crate::error::AppError;
use crate::models::AdviceRequest;
use serde_json::json;
use std::time::Duration;

const SYSTEM_PROMPT: &str = "You are an agronomy and market assistant for Pakistani farmers. \
     Be concise (2-4 sentences). \
     If given city/weather/market context, tailor the advice; otherwise give a general actionable tip.";

pub struct AdviceClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl AdviceClient {
    pub fn new(base_url: String, api_key: Option<String>, model: String) -> Result<Self, anyhow::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(20))
            .build()?;
        Ok(Self {
            http,
            base_url,
            api_key,
            model,
        })
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let api_key = std::env::var("OPENAI_API_KEY").ok();
        let model = std::env::var("ADVICE_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        Self::new(base_url, api_key, model)
    }

    /// Generate one farming recommendation for the given context.
    pub async fn generate(&self, request: &AdviceRequest) -> Result<String, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::BadRequest("OPENAI_API_KEY not set on server".to_string()))?;

        let body = json!({
            "model": self.model,
            "temperature": 0.7,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": compose_prompt(request) },
            ],
        });

        let res = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ServiceUnavailable(format!("Advice service error: {}", e)))?;

        if !res.status().is_success() {
            return Err(AppError::ServiceUnavailable(format!(
                "Advice service returned {}",
                res.status()
            )));
        }

        let completion: serde_json::Value = res
            .json()
            .await
            .map_err(|e| AppError::ServiceUnavailable(format!("Invalid advice response: {}", e)))?;

        let advice = completion["choices"][0]["message"]["content"]
            .as_str()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .unwrap_or("Unable to generate advice right now.")
            .to_string();

        Ok(advice)
    }
}

fn compose_prompt(request: &AdviceRequest) -> String {
    let mut parts = Vec::new();
    if let Some(city) = &request.city {
        parts.push(format!("City: {}.", city));
    }
    if let Some(weather) = &request.weather_summary {
        parts.push(format!("Weather: {}.", weather));
    }
    if let Some(market) = &request.market_summary {
        parts.push(format!("Market: {}.", market));
    }
    parts.push("Provide one actionable farming recommendation.".to_string());
    parts.join(" ")
}
