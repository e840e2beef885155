use std::time::Duration;

use async_trait::async_trait;
use lugat_config::api::ApiConfig;
use lugat_types::{Entry, LookupOutcome, NOT_FOUND_TITLE, NotFoundNotice};
use reqwest::StatusCode;

use crate::{DictionaryService, LookupError};

#[derive(Clone)]
pub struct DictionaryClient {
    client: reqwest::Client,
    api: ApiConfig,
}

impl DictionaryClient {
    pub fn new(api: ApiConfig) -> Result<Self, LookupError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = api.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            api,
        })
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }
}

#[async_trait]
impl DictionaryService for DictionaryClient {
    async fn lookup(&self, term: &str) -> Result<LookupOutcome, LookupError> {
        let url = self.api.lookup_url(term);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("Lookup '{}' answered {} ({} bytes)", term, status, body.len());

        parse_lookup_body(status, &body)
    }
}

/// Interpret a lookup response body.
///
/// The service answers unknown words with a JSON object whose `title` is
/// [`NOT_FOUND_TITLE`], usually under a 404. That marker wins over the status;
/// any other non-2xx answer is an error.
pub fn parse_lookup_body(status: StatusCode, body: &str) -> Result<LookupOutcome, LookupError> {
    let value: serde_json::Value = serde_json::from_str(body)?;

    if value.get("title").and_then(|t| t.as_str()) == Some(NOT_FOUND_TITLE) {
        let notice: NotFoundNotice = serde_json::from_value(value)?;
        return Ok(LookupOutcome::NotFound(notice));
    }

    if !status.is_success() {
        return Err(LookupError::Status(status));
    }

    let entries: Vec<Entry> = serde_json::from_value(value)?;
    Ok(LookupOutcome::Found(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYBOARD: &str = r#"[
        {
            "word": "keyboard",
            "phonetic": "/ˈkiːˌbɔːd/",
            "phonetics": [
                { "audio": "https://api.dictionaryapi.dev/media/pronunciations/en/keyboard-us.mp3" }
            ],
            "meanings": [
                { "partOfSpeech": "noun", "definitions": [
                    { "definition": "A set of keys." },
                    { "definition": "A keyboard instrument." }
                ] },
                { "partOfSpeech": "verb", "definitions": [
                    { "definition": "To type on a keyboard." }
                ] }
            ]
        }
    ]"#;

    #[test]
    fn found_entries_keep_response_order() {
        let outcome = parse_lookup_body(StatusCode::OK, KEYBOARD).unwrap();
        let LookupOutcome::Found(entries) = outcome else {
            panic!("expected entries");
        };
        assert_eq!(entries.len(), 1);
        let pos: Vec<_> = entries[0]
            .meanings
            .iter()
            .map(|m| m.part_of_speech.as_str())
            .collect();
        assert_eq!(pos, ["noun", "verb"]);
        assert_eq!(
            entries[0].meanings[0].definitions[1].definition,
            "A keyboard instrument."
        );
    }

    #[test]
    fn several_entries_parse_in_response_order() {
        let body = r#"[
            {
                "word": "alpha",
                "phonetic": "/ˈælfə/",
                "phonetics": [{ "audio": "https://example.org/alpha.mp3" }],
                "meanings": [
                    { "partOfSpeech": "noun", "definitions": [
                        { "definition": "First letter." },
                        { "definition": "Dominant member." }
                    ] },
                    { "partOfSpeech": "adjective", "definitions": [
                        { "definition": "Socially dominant." }
                    ] }
                ]
            },
            {
                "word": "beta",
                "phonetic": "/ˈbiːtə/",
                "phonetics": [],
                "meanings": [
                    { "partOfSpeech": "verb", "definitions": [
                        { "definition": "To test before release." }
                    ] }
                ]
            }
        ]"#;
        let LookupOutcome::Found(entries) = parse_lookup_body(StatusCode::OK, body).unwrap() else {
            panic!("expected entries");
        };

        let words: Vec<_> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, ["alpha", "beta"]);
        let phonetics: Vec<_> = entries.iter().map(|e| e.phonetic.as_deref()).collect();
        assert_eq!(phonetics, [Some("/ˈælfə/"), Some("/ˈbiːtə/")]);
        let alpha_pos: Vec<_> = entries[0]
            .meanings
            .iter()
            .map(|m| m.part_of_speech.as_str())
            .collect();
        assert_eq!(alpha_pos, ["noun", "adjective"]);
        let alpha_defs: Vec<_> = entries[0].meanings[0]
            .definitions
            .iter()
            .map(|d| d.definition.as_str())
            .collect();
        assert_eq!(alpha_defs, ["First letter.", "Dominant member."]);
        assert_eq!(entries[1].meanings[0].part_of_speech, "verb");
        assert_eq!(entries[0].audio_clip(), Some("https://example.org/alpha.mp3"));
        assert_eq!(entries[1].audio_clip(), None);
    }

    #[test]
    fn not_found_marker_wins_over_status() {
        let body = r#"{
            "title": "No Definitions Found",
            "message": "Sorry pal, we couldn't find definitions for the word you were looking for.",
            "resolution": "You can try the search again at later time or head to the web instead."
        }"#;
        let outcome = parse_lookup_body(StatusCode::NOT_FOUND, body).unwrap();
        match outcome {
            LookupOutcome::NotFound(notice) => assert_eq!(notice.title, NOT_FOUND_TITLE),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn empty_array_is_found_not_not_found() {
        let outcome = parse_lookup_body(StatusCode::OK, "[]").unwrap();
        assert_eq!(outcome, LookupOutcome::Found(vec![]));
    }

    #[test]
    fn other_error_status_is_reported() {
        let body = r#"{"title":"API Rate Limit Exceeded"}"#;
        let err = parse_lookup_body(StatusCode::TOO_MANY_REQUESTS, body).unwrap_err();
        assert!(matches!(err, LookupError::Status(StatusCode::TOO_MANY_REQUESTS)));
        assert!(err.to_string().contains("429"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_lookup_body(StatusCode::OK, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, LookupError::Parse(_)));
    }

    #[test]
    fn unexpected_object_under_ok_is_a_parse_error() {
        let err = parse_lookup_body(StatusCode::OK, r#"{"title":"Something else"}"#).unwrap_err();
        assert!(matches!(err, LookupError::Parse(_)));
    }

    #[test]
    fn client_builds_with_and_without_timeout() {
        assert!(DictionaryClient::new(ApiConfig::default()).is_ok());
        let api = ApiConfig {
            timeout_seconds: Some(5),
            ..ApiConfig::default()
        };
        assert_eq!(DictionaryClient::new(api).unwrap().api().timeout_seconds, Some(5));
    }
}
