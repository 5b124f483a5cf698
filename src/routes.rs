use worker::Url;

pub mod index;
pub mod not_found;
pub mod redirect;

/// Rebuilds the request URL to point at `path` on the same origin. The legacy
/// URL's query string and fragment are dropped, not forwarded.
pub(crate) fn same_origin(req_url: &Url, path: &str) -> Url {
    let mut url = req_url.clone();
    url.set_path(path);
    url.set_query(None);
    url.set_fragment(None);
    url
}
