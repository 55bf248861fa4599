//! Link-header pagination helpers

use reqwest::Url;

/// Items requested per page
pub const PAGE_SIZE: u32 = 100;

/// Extract the `rel="next"` target from a `Link` header
#[must_use]
pub fn next_link(header: &str) -> Option<String> {
    header.split(',').find_map(|part| {
        let (target, params) = part.split_once(';')?;
        let is_next = params
            .split(';')
            .any(|p| p.trim().eq_ignore_ascii_case(r#"rel="next""#));
        if !is_next {
            return None;
        }
        let target = target.trim();
        target.strip_prefix('<')?.strip_suffix('>').map(ToString::to_string)
    })
}

/// Add `per_page` to a listing URL unless it already sets one
#[must_use]
pub fn with_page_size(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };
    if parsed.query_pairs().any(|(k, _)| k == "per_page") {
        return url.to_string();
    }
    parsed.query_pairs_mut().append_pair("per_page", &PAGE_SIZE.to_string());
    parsed.to_string()
}
