//! Escaping text for XML request bodies.

const HEX: &[u8; 16] = b"0123456789ABCDEF";

fn push_hex_ref(out: &mut String, c: char) {
    let b = c as u32 as u8;
    out.push_str("&#x");
    out.push(HEX[(b >> 4) as usize] as char);
    out.push(HEX[(b & 0x0f) as usize] as char);
    out.push(';');
}

/// Characters XML 1.0 does not allow in text at all.
fn is_non_xml_char(c: char) -> bool {
    matches!(c, '\u{FFFE}' | '\u{FFFF}')
}

/// Escapes `s` for use as XML text or attribute content.
///
/// Markup characters become character references, control characters
/// become `&#xHH;`, and characters XML cannot represent become U+FFFD.
/// Each character is handled once, so existing references are escaped
/// again rather than passed through.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            '\u{0}'..='\u{1F}' | '\u{7F}'..='\u{9F}' => push_hex_ref(&mut out, c),
            c if is_non_xml_char(c) => out.push('\u{FFFD}'),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_controls() {
        assert_eq!(escape_xml("\u{0}"), "&#x00;");
        assert_eq!(escape_xml("\u{1b}[0m"), "&#x1B;[0m");
        assert_eq!(escape_xml("\u{7f}\u{85}"), "&#x7F;&#x85;");
        assert_eq!(escape_xml("a\tb\r\n"), "a&#x9;b&#xD;&#xA;");
    }

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape_xml("<>&\"'"), "&lt;&gt;&amp;&#34;&#39;");
        assert_eq!(escape_xml("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(escape_xml("photos/2015 (1).jpg"), "photos/2015 (1).jpg");
        assert_eq!(escape_xml("文件名"), "文件名");
        assert_eq!(escape_xml("\u{FFFF}"), "\u{FFFD}");
    }
}
