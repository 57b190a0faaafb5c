//! Placeholder substitution for template text
//!
//! Templates embed literal `{{KEY}}` tokens. Substitution is plain text
//! replacement: every occurrence of a token whose key is in the context is
//! replaced; everything else, including unknown `{{...}}` tokens, passes
//! through untouched. Replacement values are never re-scanned, so the
//! operation is single-pass and non-recursive.

use chrono::Datelike;

/// Key for the project name placeholder
pub const PROJECT_NAME_KEY: &str = "PROJECT_NAME";

/// Key for the author/organization placeholder
pub const AUTHOR_NAME_KEY: &str = "AUTHOR_NAME";

/// Named values to splice into template text
///
/// `YEAR` never needs to be supplied; [`substitute`] always provides it
/// from the current date.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionContext {
    values: Vec<(String, String)>,
}

impl SubstitutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values.push((key.to_string(), value.into()));
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Apply a substitution context to template text
///
/// Pure string transformation; absent keys leave their tokens as literal
/// text in the output.
pub fn substitute(content: &str, ctx: &SubstitutionContext) -> String {
    let mut out = content.to_string();
    for (key, value) in ctx.entries() {
        out = out.replace(&format!("{{{{{}}}}}", key), value);
    }
    let year = chrono::Utc::now().year();
    out.replace("{{YEAR}}", &year.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_every_occurrence() {
        let ctx = SubstitutionContext::new().with(PROJECT_NAME_KEY, "shop");
        let out = substitute("{{PROJECT_NAME}} and {{PROJECT_NAME}} again", &ctx);
        assert_eq!(out, "shop and shop again");
    }

    #[test]
    fn test_no_placeholders_is_identity() {
        let ctx = SubstitutionContext::new().with(PROJECT_NAME_KEY, "shop");
        let content = "plain text, no tokens here";
        assert_eq!(substitute(content, &ctx), content);
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let ctx = SubstitutionContext::new();
        let out = substitute("{{SOMETHING_ELSE}} stays", &ctx);
        assert_eq!(out, "{{SOMETHING_ELSE}} stays");
    }

    #[test]
    fn test_year_is_implicit() {
        let ctx = SubstitutionContext::new();
        let expected = chrono::Utc::now().year().to_string();
        assert_eq!(substitute("(c) {{YEAR}}", &ctx), format!("(c) {}", expected));
    }

    #[test]
    fn test_replacement_not_rescanned() {
        // A value containing brace syntax must survive verbatim.
        let ctx = SubstitutionContext::new().with("A", "{{B}}");
        let out = substitute("{{A}}", &ctx);
        assert_eq!(out, "{{B}}");
    }

    #[test]
    fn test_empty_context_never_errors() {
        let ctx = SubstitutionContext::new();
        let out = substitute("{{PROJECT_NAME}} {{AUTHOR_NAME}}", &ctx);
        assert_eq!(out, "{{PROJECT_NAME}} {{AUTHOR_NAME}}");
    }
}
