use serde::{Deserialize, Serialize};

/// Title the dictionary service puts in its body when a word is unknown
pub const NOT_FOUND_TITLE: &str = "No Definitions Found";

/// One lexical result for a searched word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

impl Entry {
    /// First non-empty pronunciation clip of this entry
    pub fn audio_clip(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .filter_map(|p| p.audio.as_deref())
            .find(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub audio: Option<String>,
}

/// Definitions grouped under one part of speech
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech", default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
}

/// Body the service returns for unknown words
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotFoundNotice {
    pub title: String,
}

/// Successful outcome of a lookup request
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(Vec<Entry>),
    NotFound(NotFoundNotice),
}
