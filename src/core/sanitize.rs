// src/core/sanitize.rs

/// Collapse runs of whitespace into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Decode the character references a color table realistically contains:
/// the common named ones plus decimal/hex numeric references.
/// Anything unrecognised is kept verbatim.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        // Entities are short; don't scan past the next few bytes for ';'
        let semi = tail.char_indices().take(12).find(|&(_, c)| c == ';').map(|(i, _)| i);
        let decoded = semi.and_then(|semi| decode_one(&tail[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((ch, semi)) => {
                out.push(ch);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_one(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }
    let ch = match name {
        "nbsp" => ' ',
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "num" => '#',
        _ => return None,
    };
    Some(ch)
}

/// Escape text placed between tags (e.g. textarea content).
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a double-quoted attribute value.
pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  Alice \n\t Blue  "), "Alice Blue");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn entities_named_and_numeric() {
        assert_eq!(decode_entities("R&amp;D&nbsp;x"), "R&D x");
        assert_eq!(decode_entities("&#35;FF0000"), "#FF0000");
        assert_eq!(decode_entities("&#x23;ff"), "#ff");
        assert_eq!(decode_entities("&lt;b&gt;"), "<b>");
    }

    #[test]
    fn unknown_entities_survive() {
        assert_eq!(decode_entities("a & b"), "a & b");
        assert_eq!(decode_entities("&bogus; &amp"), "&bogus; &amp");
    }

    #[test]
    fn escape_round_trips_through_decode() {
        let raw = r#"[{"name":"a<b>&c"}]"#;
        assert_eq!(decode_entities(&escape_text(raw)), raw);
        assert_eq!(decode_entities(&escape_attr(raw)), raw);
        assert!(!escape_attr(raw).contains('"'));
    }
}
