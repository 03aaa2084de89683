//! URL construction for typed and raw requests.
//!
//! Pure functions: no I/O, so every routing rule is unit-testable.

use url::Url;

use crate::error::{ClientError, ClientResult};
use crate::route::{Route, RouteParams};

/// Resolve a raw path against the base URL.
///
/// Absolute `http(s)://` URLs are used as-is; anything else is appended to
/// the base URL's path.
pub fn resolve_url(base: &Url, path_or_url: &str) -> ClientResult<Url> {
    if path_or_url.starts_with("http://") || path_or_url.starts_with("https://") {
        return Ok(Url::parse(path_or_url)?);
    }

    let base = base.as_str().trim_end_matches('/');
    let path = path_or_url.trim_start_matches('/');
    Ok(Url::parse(&format!("{base}/{path}"))?)
}

/// Build the URL for a typed request.
///
/// Placeholders in the route template are filled from `params` and removed
/// from the remaining set. When `with_query` is set the remaining params,
/// followed by `extra`, become query-string pairs; otherwise they are left to
/// the request body and `extra` alone is appended.
pub fn build_route_url(
    base: &Url,
    route: &Route,
    params: &RouteParams,
    extra: &RouteParams,
    with_query: bool,
) -> ClientResult<Url> {
    let (path, remaining) = expand_template(route, params)?;
    let mut url = resolve_url(base, &path)?;

    let declared = remaining.iter().filter(|_| with_query);
    let pairs: Vec<(&str, &str)> = declared.chain(extra.iter()).collect();

    if !pairs.is_empty() {
        let mut query = url.query_pairs_mut();
        for (name, value) in pairs {
            query.append_pair(name, value);
        }
    }

    Ok(url)
}

/// Substitute `{Name}` placeholders, returning the path and unused params.
fn expand_template(route: &Route, params: &RouteParams) -> ClientResult<(String, RouteParams)> {
    let mut path = route.path.to_string();
    let mut used: Vec<&str> = Vec::new();

    for name in route.placeholders() {
        let value = params.get(name).ok_or_else(|| ClientError::InvalidRoute {
            route: route.path,
            message: format!("missing value for '{name}'"),
        })?;
        path = path.replace(&format!("{{{name}}}"), &urlencoding::encode(value));
        used.push(name);
    }

    let remaining = params
        .iter()
        .filter(|(name, _)| !used.iter().any(|u| u.eq_ignore_ascii_case(name)))
        .collect();

    Ok((path, remaining))
}
