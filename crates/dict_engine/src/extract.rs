use scraper::{Html, Selector};

/// Class marking the containers the definition pages put their lists in.
pub const DEFINITION_MARKER_CLASS: &str = "dict";

/// Content pulled out of one fetched page, in both extraction modes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedDefinition {
    /// Markup-preserving form: inner HTML of every definition list.
    pub html: String,
    /// Text-only form of the same lists.
    pub text: String,
}

impl ExtractedDefinition {
    /// True when the page carried no definition markup at all.
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

pub trait DefinitionExtractor: Send + Sync {
    fn extract(&self, html: &str) -> ExtractedDefinition;
}

/// Extracts definitions the way the search result pages mark them up: an
/// ordered list carrying the marker class is a definition block. Kept blocks
/// are concatenated in document order, a newline after each. A page without
/// qualifying elements yields an empty extraction, not an error; the parser
/// recovers from malformed markup on its own.
#[derive(Debug, Clone)]
pub struct MarkedListExtractor {
    marker_class: String,
}

impl Default for MarkedListExtractor {
    fn default() -> Self {
        Self::new(DEFINITION_MARKER_CLASS)
    }
}

impl MarkedListExtractor {
    pub fn new(marker_class: impl Into<String>) -> Self {
        Self {
            marker_class: marker_class.into(),
        }
    }
}

impl DefinitionExtractor for MarkedListExtractor {
    fn extract(&self, html: &str) -> ExtractedDefinition {
        let doc = Html::parse_document(html);
        let Ok(selector) = Selector::parse(&format!(".{}", self.marker_class)) else {
            return ExtractedDefinition::default();
        };

        let mut out = ExtractedDefinition::default();
        for element in doc.select(&selector) {
            if !element.value().name().eq_ignore_ascii_case("ol") {
                continue;
            }
            out.html.push_str(&element.inner_html());
            out.html.push('\n');
            out.text.push_str(&element.text().collect::<String>());
            out.text.push('\n');
        }
        out
    }
}
