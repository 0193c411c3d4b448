//! HTML views
//!
//! Two templates embedded in the binary, rendered by placeholder
//! substitution. Values are HTML-escaped at substitution time; the stream
//! path itself is bound verbatim, with no existence check against active
//! streams.

use ghostream_core::config::SiteConfig;

const INDEX_HTML: &str = include_str!("../templates/index.html");
const VIEWER_HTML: &str = include_str!("../templates/viewer.html");

/// Render the welcome page
pub fn render_index(site: &SiteConfig) -> String {
    render(INDEX_HTML, site, "")
}

/// Render the viewer page for a stream path
pub fn render_viewer(site: &SiteConfig, path: &str) -> String {
    render(VIEWER_HTML, site, path)
}

fn render(template: &str, site: &SiteConfig, path: &str) -> String {
    template
        .replace("{{site_name}}", &html_escape(&site.name))
        .replace("{{hostname}}", &html_escape(&site.hostname))
        .replace("{{favicon}}", &html_escape(&site.favicon))
        .replace("{{path}}", &html_escape(path))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_binds_path() {
        let site = SiteConfig::default();
        let page = render_viewer(&site, "anything/nested/path");
        assert!(page.contains("anything/nested/path"));
    }

    #[test]
    fn test_index_binds_site_metadata() {
        let site = SiteConfig {
            name: "My Stream".to_string(),
            hostname: "stream.example.com".to_string(),
            favicon: "/static/favicon.png".to_string(),
        };

        let page = render_index(&site);
        assert!(page.contains("My Stream"));
        assert!(page.contains("stream.example.com"));
        assert!(page.contains("/static/favicon.png"));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn test_path_is_escaped() {
        let site = SiteConfig::default();
        let page = render_viewer(&site, "<script>alert(1)</script>");
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
