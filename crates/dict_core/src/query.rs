use url::Url;

/// Search endpoint queried for every word.
pub const SEARCH_ENDPOINT: &str = "http://www.google.com/search";

/// Builds the definition-search URL for a word.
///
/// The remote serves definition markup for a `q=define:{word}` query.
/// Reserved characters in the word are percent-encoded.
pub fn definition_query_url(word: &str) -> Url {
    let mut url = Url::parse(SEARCH_ENDPOINT).expect("static endpoint parses");
    url.query_pairs_mut()
        .append_pair("q", &format!("define:{word}"));
    url
}
