//! Client badge shortcodes.
//!
//! Both emit an anchor styled as a badge linking to the per-client page.
//! The inline form carries a right-margin utility class for use in running
//! text; the paired form appends the badge after its wrapped content.
//!
//! The client name lands in an attribute and in text, so it is escaped for
//! both positions before interpolation.

use crate::utils::html;

/// Inline badge: `<a class="badge badge-secondary mr-2" href="/clients/{name}">{name}</a>`.
pub fn client_tag(name: &str) -> String {
    let name = html::escape_attr(name);
    format!(r#"<a class="badge badge-secondary mr-2" href="/clients/{name}">{name}</a>"#)
}

/// Paired badge: wrapped content, a space, then the badge without the margin class.
pub fn paired_client(inner: &str, name: &str) -> String {
    let name = html::escape_attr(name);
    format!(r#"{inner} <a class="badge badge-secondary" href="/clients/{name}">{name}</a>"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_tag_exact_output() {
        assert_eq!(
            client_tag("acme"),
            r#"<a class="badge badge-secondary mr-2" href="/clients/acme">acme</a>"#
        );
    }

    #[test]
    fn test_paired_client_exact_output() {
        assert_eq!(
            paired_client("Vendor:", "acme"),
            r#"Vendor: <a class="badge badge-secondary" href="/clients/acme">acme</a>"#
        );
    }

    #[test]
    fn test_client_tag_escapes_unsafe_names() {
        let out = client_tag(r#""><script>alert(1)</script>"#);
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
        assert!(out.contains("&quot;&gt;"));
    }

    #[test]
    fn test_paired_client_keeps_inner_content_verbatim() {
        // Inner content is already-rendered template output, not an argument
        let out = paired_client("<em>Partner:</em>", "acme");
        assert!(out.starts_with("<em>Partner:</em> "));
    }
}
