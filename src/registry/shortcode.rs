//! Shortcode registration and dispatch.
//!
//! Shortcodes are named template macros expanded at render time. The inline
//! form maps literal arguments to an HTML fragment; the paired form also
//! receives the rendered content between its open/close tags.
//!
//! Both signatures return `String`, not `Result`: a shortcode that cannot
//! fail by type cannot abort a page build.

use crate::types::RegistryError;
use rustc_hash::FxHashMap;

/// Inline shortcode: literal template arguments to an HTML fragment.
pub type InlineShortcode = Box<dyn Fn(&[String]) -> String + Send + Sync>;

/// Paired shortcode: rendered inner content plus arguments to an HTML fragment.
pub type PairedShortcode = Box<dyn Fn(&str, &[String]) -> String + Send + Sync>;

/// Name-keyed stores for both shortcode kinds.
#[derive(Default)]
pub struct Shortcodes {
    inline: FxHashMap<String, InlineShortcode>,
    paired: FxHashMap<String, PairedShortcode>,
}

impl Shortcodes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an inline shortcode.
    pub fn add_inline<F>(&mut self, name: impl Into<String>, f: F) -> Result<(), RegistryError>
    where
        F: Fn(&[String]) -> String + Send + Sync + 'static,
    {
        let name = name.into();
        if self.inline.contains_key(&name) {
            return Err(RegistryError::ShortcodeConflict(name));
        }
        self.inline.insert(name, Box::new(f));
        Ok(())
    }

    /// Register a paired shortcode.
    pub fn add_paired<F>(&mut self, name: impl Into<String>, f: F) -> Result<(), RegistryError>
    where
        F: Fn(&str, &[String]) -> String + Send + Sync + 'static,
    {
        let name = name.into();
        if self.paired.contains_key(&name) {
            return Err(RegistryError::PairedShortcodeConflict(name));
        }
        self.paired.insert(name, Box::new(f));
        Ok(())
    }

    /// Expand an inline shortcode.
    pub fn render(&self, name: &str, args: &[String]) -> Result<String, RegistryError> {
        let f = self
            .inline
            .get(name)
            .ok_or_else(|| RegistryError::UnknownShortcode(name.to_string()))?;
        Ok(f(args))
    }

    /// Expand a paired shortcode around rendered inner content.
    pub fn render_paired(
        &self,
        name: &str,
        inner: &str,
        args: &[String],
    ) -> Result<String, RegistryError> {
        let f = self
            .paired
            .get(name)
            .ok_or_else(|| RegistryError::UnknownPairedShortcode(name.to_string()))?;
        Ok(f(inner, args))
    }

    /// Names of all registered inline shortcodes.
    pub fn inline_names(&self) -> impl Iterator<Item = &str> {
        self.inline.keys().map(String::as_str)
    }

    /// Names of all registered paired shortcodes.
    pub fn paired_names(&self) -> impl Iterator<Item = &str> {
        self.paired.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for Shortcodes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shortcodes")
            .field("inline", &self.inline.keys().collect::<Vec<_>>())
            .field("paired", &self.paired.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_render_inline() {
        let mut shortcodes = Shortcodes::new();
        shortcodes
            .add_inline("upper", |args: &[String]| {
                args.first().map(|s| s.to_uppercase()).unwrap_or_default()
            })
            .unwrap();

        assert_eq!(shortcodes.render("upper", &args(&["acme"])).unwrap(), "ACME");
    }

    #[test]
    fn test_render_paired() {
        let mut shortcodes = Shortcodes::new();
        shortcodes
            .add_paired("wrap", |inner: &str, _: &[String]| format!("<b>{inner}</b>"))
            .unwrap();

        assert_eq!(
            shortcodes.render_paired("wrap", "hi", &[]).unwrap(),
            "<b>hi</b>"
        );
    }

    #[test]
    fn test_unknown_name_is_error() {
        let shortcodes = Shortcodes::new();
        assert!(matches!(
            shortcodes.render("missing", &[]),
            Err(RegistryError::UnknownShortcode(_))
        ));
        assert!(matches!(
            shortcodes.render_paired("missing", "", &[]),
            Err(RegistryError::UnknownPairedShortcode(_))
        ));
    }

    #[test]
    fn test_duplicate_name_is_conflict() {
        let mut shortcodes = Shortcodes::new();
        shortcodes.add_inline("tag", |_: &[String]| String::new()).unwrap();
        assert!(matches!(
            shortcodes.add_inline("tag", |_: &[String]| String::new()),
            Err(RegistryError::ShortcodeConflict(_))
        ));
    }

    #[test]
    fn test_inline_and_paired_namespaces_are_separate() {
        let mut shortcodes = Shortcodes::new();
        shortcodes.add_inline("tag", |_: &[String]| String::new()).unwrap();
        shortcodes
            .add_paired("tag", |_: &str, _: &[String]| String::new())
            .unwrap();
        assert_eq!(shortcodes.inline_names().count(), 1);
        assert_eq!(shortcodes.paired_names().count(), 1);
    }
}
