//! Helpers shared by the normalizer and the renderers

/// URL utilities for feed and article links
pub mod url {
    use url::Url;

    /// Network authority of a link exactly as written (host plus any port), minus
    /// userinfo and a leading `www.`. Unparseable links give an empty string.
    pub fn source_host(link: &str) -> String {
        let link = link.trim();
        if Url::parse(link).is_err() {
            return String::new();
        }
        // Url would punycode and lowercase the host
        let Some((_, rest)) = link.split_once("://") else {
            return String::new();
        };

        let authority = rest.split(&['/', '?', '#'][..]).next().unwrap_or("");
        let host = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
        host.strip_prefix("www.").unwrap_or(host).to_string()
    }

    /// Validate feed URL format
    pub fn is_valid_feed_url(url_str: &str) -> bool {
        if let Ok(url) = Url::parse(url_str) {
            url.scheme() == "http" || url.scheme() == "https"
        } else {
            false
        }
    }
}

/// Text clean-up for summaries
pub mod text {
    const LINE_BREAKS: &[&str] = &["<br>", "<br/>", "<br />", "<BR>", "<BR/>", "<BR />"];

    /// Replace `<br>` markup with a single space
    pub fn replace_line_breaks(text: &str) -> String {
        LINE_BREAKS
            .iter()
            .fold(text.to_string(), |acc, tag| acc.replace(tag, " "))
    }

    /// Hard cut at `max_chars` characters, no word-boundary handling
    pub fn truncate_chars(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((byte_index, _)) => text[..byte_index].to_string(),
            None => text.to_string(),
        }
    }

    /// Drop every `<` and `>` so leftover markup cannot survive escaping as tags
    pub fn strip_angle_brackets(text: &str) -> String {
        text.chars().filter(|c| *c != '<' && *c != '>').collect()
    }

    /// Summary as stored on an item: line breaks flattened, then capped
    pub fn clean_summary(raw: &str, max_chars: usize) -> String {
        truncate_chars(&replace_line_breaks(raw), max_chars)
    }
}
