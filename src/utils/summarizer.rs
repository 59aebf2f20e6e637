use serde::{Deserialize, Serialize};

use crate::utils::config::Config;

const NO_SUMMARY_FALLBACK: &str = "No se pudo generar el resumen";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Ask the chat-completion API for a narrative summary of the given
/// headlines. The response is Spanish prose grouped by topic.
pub async fn generate_news_summary(
    client: &reqwest::Client,
    config: &Config,
    headlines: &[String],
) -> Result<String, reqwest::Error> {
    let prompt = build_prompt(headlines);
    let request = ChatRequest {
        model: "gpt-4o",
        messages: vec![ChatMessage {
            role: "user",
            content: &prompt,
        }],
        temperature: 0.7,
        max_tokens: 1000,
    };

    let response = client
        .post(format!("{}/chat/completions", config.openai_base_url))
        .bearer_auth(&config.openai_api_key)
        .json(&request)
        .send()
        .await?
        .error_for_status()?
        .json::<ChatResponse>()
        .await?;

    Ok(summary_text(response))
}

fn build_prompt(headlines: &[String]) -> String {
    format!(
        "Analiza y resume los siguientes titulares de noticias, agrupándolos por tema y \
         proporcionando un resumen coherente en español:\n\nTitulares:\n{}\n\n\
         Por favor, proporciona un resumen bien estructurado que:\n\
         1. Agrupe noticias relacionadas\n\
         2. Destaque temas principales\n\
         3. Proporcione contexto cuando sea relevante\n\
         4. Mantenga un tono neutral\n\
         5. Sea fácil de leer y entender\n\n\
         Responde en formato narrativo en español.",
        headlines.join("\n")
    )
}

fn summary_text(response: ChatResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .unwrap_or_else(|| NO_SUMMARY_FALLBACK.to_string())
}
