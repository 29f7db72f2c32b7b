//! Schema-checked Handlebars renderer for the built-in templates.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled.
//! On top of strict mode, [`TemplateRenderer::render`] validates the value
//! set against the template's declared field set *before* rendering: the
//! keys must match exactly, with every missing and every extra field
//! reported together in one [`BoltError::TemplateFields`] error.
//!
//! Strict mode is the backstop for the remaining failure class: a
//! `{{placeholder}}` in the body that is not in the data context fails the
//! render instead of silently passing through as literal text or an empty
//! string.
//!
//! ## Usage
//!
//! ```ignore
//! use std::collections::BTreeMap;
//! use bolt_core::templates::{self, renderer::TemplateRenderer};
//!
//! let renderer = TemplateRenderer::new();
//! let values = BTreeMap::from([("project_name".to_string(), "demo".to_string())]);
//! let readme = renderer.render(&templates::README, &values)?;
//! ```

use std::collections::BTreeMap;

use handlebars::Handlebars;
use serde_json::Value;

use crate::error::{BoltError, Result};

/// An immutable named template body plus its declared set of required fields.
///
/// The built-in specs live in the parent module as `pub const`s; nothing is
/// constructed at runtime.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSpec {
    pub name: &'static str,
    pub body: &'static str,
    pub required_fields: &'static [&'static str],
}

impl TemplateSpec {
    /// Check that `values` carries exactly the declared field set.
    ///
    /// Collects every missing field (in declared order) and every extra
    /// field (in key order) and reports them in a single error, so a caller
    /// sees everything wrong at once rather than fixing one field per retry.
    fn check_fields(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let missing: Vec<String> = self
            .required_fields
            .iter()
            .filter(|field| !values.contains_key(**field))
            .map(|field| field.to_string())
            .collect();
        let extra: Vec<String> = values
            .keys()
            .filter(|key| !self.required_fields.contains(&key.as_str()))
            .cloned()
            .collect();

        if missing.is_empty() && extra.is_empty() {
            return Ok(());
        }
        Err(BoltError::TemplateFields {
            template: self.name.to_string(),
            missing,
            extra,
        })
    }
}

/// Template renderer using Handlebars in strict mode.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled.
    ///
    /// Strict mode means a `{{placeholder}}` missing from the data context
    /// returns an error instead of rendering as empty. Field validation
    /// should catch mismatches first; strict mode covers a body whose
    /// placeholders drift from its declared fields.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        // these are plain-text files, not HTML; values substitute verbatim
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render `spec` with the given values.
    ///
    /// Fails with [`BoltError::TemplateFields`] unless the keys of `values`
    /// exactly equal `spec.required_fields`. Pure function of its inputs.
    pub fn render(&self, spec: &TemplateSpec, values: &BTreeMap<String, String>) -> Result<String> {
        spec.check_fields(values)?;

        let data: Value = values
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect::<serde_json::Map<String, Value>>()
            .into();

        self.hbs
            .render_template(spec.body, &data)
            .map_err(|e| BoltError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates;

    fn values<const N: usize>(pairs: [(&str, &str); N]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_readme_renders_exact_heading() {
        let renderer = TemplateRenderer::new();
        let out = renderer
            .render(&templates::README, &values([("project_name", "Foo")]))
            .unwrap();
        assert_eq!(out, "# Foo\n");
    }

    #[test]
    fn test_rendered_output_has_no_unresolved_placeholders() {
        let renderer = TemplateRenderer::new();
        let cases = [
            renderer
                .render(&templates::README, &values([("project_name", "demo")]))
                .unwrap(),
            renderer
                .render(
                    &templates::SETUP_PY,
                    &values([("project_name", "demo"), ("author", "Ada")]),
                )
                .unwrap(),
            renderer
                .render(
                    &templates::LICENSE,
                    &values([("author", "Ada"), ("year", "2026")]),
                )
                .unwrap(),
            renderer.render(&templates::GITIGNORE, &BTreeMap::new()).unwrap(),
        ];
        for out in &cases {
            assert!(!out.contains("{{"), "unresolved placeholder in: {out}");
            assert!(!out.contains("}}"), "unresolved placeholder in: {out}");
        }
    }

    #[test]
    fn test_setup_py_substitutes_both_fields() {
        let renderer = TemplateRenderer::new();
        let out = renderer
            .render(
                &templates::SETUP_PY,
                &values([("project_name", "demo_pkg"), ("author", "Ada Lovelace")]),
            )
            .unwrap();
        assert!(out.contains("name='demo_pkg'"));
        assert!(out.contains("author='Ada Lovelace'"));
        assert!(out.contains("read_requirements()"));
        assert!(out.contains("twine upload dist/*"));
    }

    #[test]
    fn test_missing_field_is_a_validation_error() {
        let renderer = TemplateRenderer::new();
        let err = renderer
            .render(&templates::SETUP_PY, &values([("project_name", "demo")]))
            .unwrap_err();
        match err {
            BoltError::TemplateFields { missing, extra, .. } => {
                assert_eq!(missing, vec!["author".to_string()]);
                assert!(extra.is_empty());
            }
            other => panic!("expected TemplateFields, got {other:?}"),
        }
    }

    #[test]
    fn test_extra_field_is_a_validation_error() {
        let renderer = TemplateRenderer::new();
        let err = renderer
            .render(
                &templates::README,
                &values([("project_name", "demo"), ("version", "1.0")]),
            )
            .unwrap_err();
        match err {
            BoltError::TemplateFields { missing, extra, .. } => {
                assert!(missing.is_empty());
                assert_eq!(extra, vec!["version".to_string()]);
            }
            other => panic!("expected TemplateFields, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_and_extra_reported_together_missing_first() {
        let renderer = TemplateRenderer::new();
        let err = renderer
            .render(
                &templates::LICENSE,
                &values([("author", "Ada"), ("yaer", "2026")]),
            )
            .unwrap_err();
        let msg = err.to_string();
        match err {
            BoltError::TemplateFields { missing, extra, .. } => {
                assert_eq!(missing, vec!["year".to_string()]);
                assert_eq!(extra, vec!["yaer".to_string()]);
            }
            other => panic!("expected TemplateFields, got {other:?}"),
        }
        // one message carries both problems, missing before extra
        let missing_at = msg.find("missing").unwrap();
        let extra_at = msg.find("extra").unwrap();
        assert!(missing_at < extra_at, "unexpected ordering in: {msg}");
        assert!(msg.contains("year"));
        assert!(msg.contains("yaer"));
    }

    #[test]
    fn test_gitignore_takes_no_fields() {
        let renderer = TemplateRenderer::new();
        let out = renderer.render(&templates::GITIGNORE, &BTreeMap::new()).unwrap();
        assert!(out.contains("__pycache__/"));

        let err = renderer
            .render(&templates::GITIGNORE, &values([("project_name", "demo")]))
            .unwrap_err();
        assert!(matches!(err, BoltError::TemplateFields { .. }));
    }

    #[test]
    fn test_values_substitute_verbatim() {
        // no HTML escaping; these are plain-text files
        let renderer = TemplateRenderer::new();
        let out = renderer
            .render(
                &templates::LICENSE,
                &values([("author", "Miles O'Brien & Co."), ("year", "2026")]),
            )
            .unwrap();
        assert!(out.contains("Miles O'Brien & Co."));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let renderer = TemplateRenderer::new();
        let vals = values([("author", "Ada"), ("year", "2026")]);
        let first = renderer.render(&templates::LICENSE, &vals).unwrap();
        let second = renderer.render(&templates::LICENSE, &vals).unwrap();
        assert_eq!(first, second);
        assert!(first.contains("Copyright (c) 2026 Ada"));
    }

    #[test]
    fn test_strict_mode_rejects_undeclared_placeholder() {
        // a body whose placeholders drifted from its declared fields must
        // fail at render time, not pass through literally
        let drifted = TemplateSpec {
            name: "drifted",
            body: "hello {{who}}",
            required_fields: &[],
        };
        let renderer = TemplateRenderer::new();
        let err = renderer.render(&drifted, &BTreeMap::new()).unwrap_err();
        assert!(matches!(err, BoltError::TemplateRender(_)));
    }
}
