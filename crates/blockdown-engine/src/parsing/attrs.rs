//! Attribute extraction for tag segments.
//!
//! Two value syntaxes exist: `name="literal"` for plain values and
//! ``name={`template`}`` for values that need to carry quote characters
//! (code bodies). Both are accepted anywhere in the attribute substring, in
//! any order. Text matching neither form contributes nothing.

use crate::escape::{unescape_attr, unescape_template};
use crate::registry::BlockRegistry;

/// Extracts `(name, value)` pairs in source order. Values are unescaped
/// according to the syntax they were written in, so callers receive the
/// payload the serializer was originally given.
pub(crate) fn extract_attrs(registry: &BlockRegistry, attr_text: &str) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    for caps in registry.attr().captures_iter(attr_text) {
        let Some(name) = caps.get(1) else { continue };
        let value = if let Some(lit) = caps.get(2) {
            unescape_attr(lit.as_str())
        } else if let Some(tpl) = caps.get(3) {
            unescape_template(tpl.as_str())
        } else {
            continue;
        };
        attrs.push((name.as_str().to_string(), value));
    }
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(attr_text: &str) -> Vec<(String, String)> {
        extract_attrs(&BlockRegistry::new(), attr_text)
    }

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(extract(""), vec![]);
        assert_eq!(extract("   "), vec![]);
    }

    #[test]
    fn extracts_double_quoted_value() {
        assert_eq!(
            extract("href=\"https://example.com\""),
            vec![pair("href", "https://example.com")]
        );
    }

    #[test]
    fn extracts_backtick_template_value() {
        assert_eq!(
            extract("code={`const x = 1;`}"),
            vec![pair("code", "const x = 1;")]
        );
    }

    #[test]
    fn both_forms_mix_in_any_order() {
        assert_eq!(
            extract("code={`let y;`} language=\"typescript\""),
            vec![pair("code", "let y;"), pair("language", "typescript")]
        );
        assert_eq!(
            extract("language=\"typescript\" code={`let y;`}"),
            vec![pair("language", "typescript"), pair("code", "let y;")]
        );
    }

    #[test]
    fn whitespace_around_equals_is_accepted() {
        assert_eq!(extract("href = \"u\""), vec![pair("href", "u")]);
    }

    #[test]
    fn escaped_backticks_stay_inside_the_value() {
        assert_eq!(
            extract("code={`const s = \\`hi\\`;`}"),
            vec![pair("code", "const s = `hi`;")]
        );
    }

    #[test]
    fn escaped_interpolation_is_restored() {
        assert_eq!(
            extract("code={`let t = \\${x};`}"),
            vec![pair("code", "let t = ${x};")]
        );
    }

    #[test]
    fn quoted_entities_are_restored() {
        assert_eq!(
            extract("href=\"a&amp;b=&quot;c&quot;\""),
            vec![pair("href", "a&b=\"c\"")]
        );
    }

    #[test]
    fn template_value_may_span_lines() {
        assert_eq!(
            extract("code={`line one\nline two`}"),
            vec![pair("code", "line one\nline two")]
        );
    }

    #[test]
    fn unquoted_value_is_skipped() {
        assert_eq!(extract("level=3"), vec![]);
    }

    #[test]
    fn junk_between_attrs_is_skipped() {
        assert_eq!(
            extract("?! href=\"u\" --nonsense-- language=\"rust\""),
            vec![pair("href", "u"), pair("language", "rust")]
        );
    }

    #[test]
    fn unterminated_quote_is_skipped() {
        assert_eq!(extract("href=\"never closed"), vec![]);
    }

    #[test]
    fn duplicate_names_are_kept_in_order() {
        assert_eq!(
            extract("href=\"first\" href=\"second\""),
            vec![pair("href", "first"), pair("href", "second")]
        );
    }

    #[test]
    fn empty_values_are_extracted() {
        assert_eq!(
            extract("href=\"\" code={``}"),
            vec![pair("href", ""), pair("code", "")]
        );
    }
}
