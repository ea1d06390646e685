//! Deep links into the Vault web UI.

use crate::constants::FALLBACK_LINK_PREFIX;

/// Link to an object record: `<web>/#v/<first 3 chars of id>/<id>`.
pub fn record_link(web_url: &str, id: &str) -> String {
    let prefix = match id.char_indices().nth(3) {
        Some((end, _)) => &id[..end],
        None if id.chars().count() == 3 => id,
        None => FALLBACK_LINK_PREFIX,
    };
    format!("{}/#v/{}/{}", web_url, prefix, id)
}

/// Link to a study's detail page.
pub fn study_link(web_url: &str, id: &str) -> String {
    format!("{}/#study/{}/details", web_url, id)
}
