use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Request body of the text-generation protocol.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest<'a> {
    pub inputs: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedText {
    pub generated_text: String,
}

/// Extracts the first `generated_text` from a successful response body.
///
/// Anything other than a non-empty array of objects carrying
/// `generated_text` is reported as [`Error::MalformedResponse`] with the raw
/// body attached.
pub fn parse_generated_text(body: &str) -> Result<String> {
    let malformed = || Error::MalformedResponse {
        body: body.to_string(),
    };

    let generations: Vec<GeneratedText> = serde_json::from_str(body).map_err(|_| malformed())?;
    generations
        .into_iter()
        .next()
        .map(|generation| generation.generated_text)
        .ok_or_else(malformed)
}
