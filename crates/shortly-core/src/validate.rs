use url::Url;

/// Decides whether a candidate string is a syntactically valid absolute URL.
///
/// Returns `true` iff the candidate parses with an explicit scheme and a
/// host component. Parse failures map to `false`; this never panics and
/// never touches the network. There is no scheme allow-list beyond what
/// "absolute URL with a host" requires.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}
