//! URL helpers

/// Make a host-relative file path absolute against a site URL
///
/// Paths that already carry a scheme are returned unchanged.
pub fn absolute_file_url(site_url: &str, file_url: &str) -> String {
    let site_url = site_url.trim_end_matches('/');
    if file_url.starts_with("http://") || file_url.starts_with("https://") {
        file_url.to_string()
    } else if file_url.starts_with('/') {
        format!("{}{}", site_url, file_url)
    } else {
        format!("{}/{}", site_url, file_url)
    }
}
