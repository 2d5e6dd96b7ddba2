//! Image links: point relative image references at raw GitHub content.
//!
//! Medium fetches images itself when a post is created, so every
//! `![alt](path)` must carry an absolute URL. Hugo sites keep images under
//! `static/images/`, and posts reference them in a handful of ways
//! (`../static/images/x.jpg`, `/images/x.jpg`, `./x.jpg`, …). All of them are
//! folded onto `static/images/<file>` of the configured [`ImageHost`].
//!
//! Pure text substitution: the computed URL is not checked.

use crate::config::ImageHost;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

static RE_IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

/// Rewrite every relative image reference in `markdown` to an absolute URL.
///
/// References whose path already starts with `http` are left untouched. An
/// optional link title (`![a](x.png "caption")`) is carried over as-is.
pub fn rewrite_image_urls(markdown: &str, host: &ImageHost) -> String {
    let mut rewritten = 0usize;
    let out = RE_IMAGE.replace_all(markdown, |caps: &Captures<'_>| {
        let alt = &caps[1];
        let target = caps[2].trim_start();
        let (path, title) = match target.find(char::is_whitespace) {
            Some(i) => target.split_at(i),
            None => (target, ""),
        };

        if path.starts_with("http") {
            return caps[0].to_string();
        }

        rewritten += 1;
        format!("![{}]({}{})", alt, host.url_for(&normalize_image_path(path)), title)
    });
    debug!("Rewrote {} image reference(s)", rewritten);
    out.into_owned()
}

/// Map a local image path to its location below `static/`.
///
/// ```rust
/// use md2medium::pipeline::images::normalize_image_path;
///
/// assert_eq!(normalize_image_path("../static/images/foo.jpg"), "images/foo.jpg");
/// assert_eq!(normalize_image_path("/bar.png"), "images/bar.png");
/// ```
pub fn normalize_image_path(path: &str) -> String {
    let path = path.trim_start_matches(['.', '/']);
    let path = path.strip_prefix("static/").unwrap_or(path);
    if path.starts_with("images/") {
        path.to_string()
    } else {
        format!("images/{}", path.trim_start_matches('/'))
    }
}
