/*!
 * Prompt templates for transliteration and entity extraction.
 *
 * Templates use `{source_language}`, `{target_language}` and `{text}`
 * placeholders. The text is substituted last so placeholders that happen
 * to appear inside user input are left alone.
 */

/// A prompt template with named placeholders.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// Plain transliteration of a text into the target script.
    pub const TRANSLITERATION: &'static str = "Transliterate the following text from {source_language} to {target_language} script: '{text}'. \
Respond with only the transliterated {target_language} script. \
Do not provide any extra text and do not translate the text.";

    /// Named-entity extraction with a transliteration per entity.
    pub const NAMED_ENTITIES: &'static str = r#"Extract named entities (people, organizations, locations, dates, legal terms, legal abbreviations, act names, institute names, law journal names, medical terms, proper nouns, foreign language terms like Latin words, book names, and vehicle numbers) from the following text.
For each extracted entity, transliterate it into {target_language} script.
Return a JSON object where each named entity is a key, and its corresponding transliterated {target_language} value is the value.

Text: '{text}'
Please return only the JSON object."#;

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// The transliteration template.
    pub fn transliteration() -> Self {
        Self::new(Self::TRANSLITERATION)
    }

    /// The entity extraction template.
    pub fn named_entities() -> Self {
        Self::new(Self::NAMED_ENTITIES)
    }

    /// Render the template with the given variables.
    pub fn render(&self, source_language: &str, target_language: &str, text: &str) -> String {
        self.fill(
            &[("{source_language}", source_language), ("{target_language}", target_language)],
            text,
        )
    }

    /// Render a template that only names the target language.
    ///
    /// Any `{source_language}` placeholder is left as written.
    pub fn render_for_target(&self, target_language: &str, text: &str) -> String {
        self.fill(&[("{target_language}", target_language)], text)
    }

    fn fill(&self, languages: &[(&str, &str)], text: &str) -> String {
        let rendered = languages
            .iter()
            .fold(self.template.clone(), |acc, (placeholder, value)| acc.replace(placeholder, value));

        rendered.replace("{text}", text)
    }
}

/// Build the prompt asking for a transliteration of `text`.
pub fn transliteration_prompt(source_language: &str, target_language: &str, text: &str) -> String {
    PromptTemplate::transliteration().render(source_language, target_language, text)
}

/// Build the prompt asking for entities in `text` and their transliterations.
pub fn ner_prompt(target_language: &str, text: &str) -> String {
    PromptTemplate::named_entities().render_for_target(target_language, text)
}
