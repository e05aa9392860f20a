//! Escaping for the three value positions in the tag vocabulary.
//!
//! Each profile pairs an escape (applied on serialize) with an exact inverse
//! (applied on parse). The inverses reverse only the sequences the escapes
//! produce; anything else in the input passes through byte-for-byte, so raw
//! hand-written text is never mangled by a round trip.
//!
//! - body: text between open and close tags (headings, paragraphs, links)
//! - attr: double-quoted attribute values (`href`, `language`)
//! - template: backtick-quoted attribute values (`code`)

/// Escape text for the body position. `${` is neutralized so the serialized
/// document can never grow a live interpolation marker.
pub(crate) fn escape_body(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace("${", "&#36;{")
}

pub(crate) fn unescape_body(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&#36;{", "${")
        .replace("&amp;", "&")
}

/// Escape text for a double-quoted attribute value.
pub(crate) fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace("${", "&#36;{")
}

pub(crate) fn unescape_attr(s: &str) -> String {
    s.replace("&quot;", "\"")
        .replace("&#36;{", "${")
        .replace("&amp;", "&")
}

/// Escape text for a backtick-quoted attribute value. Backslash is escaped
/// first; without that, a payload ending in `\` followed by a backtick would
/// be indistinguishable from an escaped backtick on the way back in.
pub(crate) fn escape_template(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Inverse of [`escape_template`]: one left-to-right pass collapsing exactly
/// the pairs the escape produces. A backslash before anything else is kept
/// as written.
pub(crate) fn unescape_template(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];
        if let Some(t) = tail.strip_prefix('\\') {
            out.push('\\');
            rest = t;
        } else if let Some(t) = tail.strip_prefix('`') {
            out.push('`');
            rest = t;
        } else if let Some(t) = tail.strip_prefix("${") {
            out.push_str("${");
            rest = t;
        } else {
            out.push('\\');
            rest = tail;
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_escapes_markup_characters() {
        assert_eq!(escape_body("a & b"), "a &amp; b");
        assert_eq!(escape_body("1 < 2 > 0"), "1 &lt; 2 &gt; 0");
        assert_eq!(escape_body("cost: ${price}"), "cost: &#36;{price}");
    }

    #[test]
    fn body_round_trips() {
        for text in [
            "plain",
            "a & b < c > d",
            "already &amp; escaped",
            "literal &lt; entity",
            "${x} and &#36;{y}",
            "",
        ] {
            assert_eq!(unescape_body(&escape_body(text)), text, "text {text:?}");
        }
    }

    #[test]
    fn attr_escapes_quote_and_ampersand() {
        assert_eq!(escape_attr(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_attr("a&b"), "a&amp;b");
        assert_eq!(escape_attr("${h}"), "&#36;{h}");
        // angle brackets are legal inside a quoted attribute
        assert_eq!(escape_attr("a<b>c"), "a<b>c");
    }

    #[test]
    fn attr_round_trips() {
        for value in [
            "https://example.com?a=1&b=2",
            r#"with "quotes" inside"#,
            "${tpl}",
            "&quot; typed by hand",
        ] {
            assert_eq!(unescape_attr(&escape_attr(value)), value, "value {value:?}");
        }
    }

    #[test]
    fn template_escapes_backticks() {
        assert_eq!(escape_template("const s = `hi`;"), "const s = \\`hi\\`;");
        assert_eq!(escape_template("${name}"), "\\${name}");
        assert_eq!(escape_template("a\\b"), "a\\\\b");
    }

    #[test]
    fn template_round_trips() {
        for code in [
            "const s = `hi`;",
            "let t = `${x}`;",
            "path: C:\\Users\\me",
            "trailing backslash \\",
            "\\`",
            "`${`",
            "",
        ] {
            assert_eq!(
                unescape_template(&escape_template(code)),
                code,
                "code {code:?}"
            );
        }
    }

    #[test]
    fn template_unescape_keeps_unknown_pairs() {
        // hand-written input may contain backslashes the escaper never made
        assert_eq!(unescape_template("a\\nb"), "a\\nb");
        assert_eq!(unescape_template("end\\"), "end\\");
        assert_eq!(unescape_template("\\$x"), "\\$x");
    }

    #[test]
    fn template_unescape_collapses_pairs() {
        assert_eq!(unescape_template("\\`code\\`"), "`code`");
        assert_eq!(unescape_template("\\${x}"), "${x}");
        assert_eq!(unescape_template("\\\\`"), "\\`");
    }
}
