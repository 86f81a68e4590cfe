// src/core/html.rs
// Naive HTML walking, just enough to read a table and fill in a form field.
// Byte offsets are always absolute into the document string.
// Tag and attribute names are matched case-insensitively (ASCII).

use std::ops::Range;

use super::sanitize::{decode_entities, escape_attr, escape_text, normalize_ws};

const VOID: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose content is text, not markup.
const RAW_TEXT: &[&str] = &["script", "style", "textarea", "title"];

/// Table-structure closers that also end any table element left open inside them.
const TABLE_STRUCT: &[&str] = &["table", "thead", "tbody", "tfoot", "tr", "td", "th"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKind {
    Open,
    Close,
    /// `<br>`, `<input ...>` or anything written `<x/>`
    Void,
    /// `<!-- ... -->`, `<!doctype ...>` or `<?...>`; carries no name
    Comment,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub kind: TagKind,
    pub start: usize,
    pub end: usize,
}

impl Tag {
    pub fn span(&self) -> Range<usize> { self.start..self.end }
}

/// Tag iterator over `s[from..to]`. Comments and declarations come out as
/// `TagKind::Comment`; the bodies of raw-text elements are skipped.
pub struct Tags<'a> {
    s: &'a str,
    b: &'a [u8],
    i: usize,
    n: usize,
}

impl<'a> Tags<'a> {
    pub fn new(s: &'a str) -> Self { Self::within(s, 0..s.len()) }

    pub fn within(s: &'a str, range: Range<usize>) -> Self {
        let n = range.end.min(s.len());
        Self { s, b: s.as_bytes(), i: range.start.min(n), n }
    }

    /// Continue scanning from an absolute offset.
    pub fn seek(&mut self, pos: usize) { self.i = pos.min(self.n); }

    /// Index just past the `>` closing the tag opened at `from`, honouring quotes.
    fn tag_end(&self, from: usize) -> usize {
        let mut i = from;
        let mut quote: Option<u8> = None;
        while i < self.n {
            let c = self.b[i];
            match quote {
                Some(q) if c == q => quote = None,
                Some(_) => {}
                None if c == b'"' || c == b'\'' => quote = Some(c),
                None if c == b'>' => return i + 1,
                None => {}
            }
            i += 1;
        }
        self.n
    }

    fn read_name(&self, from: usize) -> (String, usize) {
        let mut i = from;
        while i < self.n && (self.b[i].is_ascii_alphanumeric() || self.b[i] == b'-') {
            i += 1;
        }
        (self.s[from..i].to_ascii_lowercase(), i)
    }

    /// Start of `</name` at or after `from`, or the end of the range.
    fn raw_close(&self, name: &str, from: usize) -> usize {
        let pat = format!("</{name}");
        let hay = &self.b[from..self.n];
        hay.windows(pat.len())
            .position(|w| w.eq_ignore_ascii_case(pat.as_bytes()))
            .map(|p| from + p)
            .unwrap_or(self.n)
    }
}

impl<'a> Iterator for Tags<'a> {
    type Item = Tag;

    fn next(&mut self) -> Option<Tag> {
        loop {
            let lt = self.s.get(self.i..self.n)?.find('<')? + self.i;
            let next = if lt + 1 < self.n { Some(self.b[lt + 1]) } else { None };

            if self.s[lt..self.n].starts_with("<!--") {
                let end = self.s[lt + 4..self.n].find("-->").map(|p| lt + 4 + p + 3).unwrap_or(self.n);
                self.i = end;
                return Some(Tag { name: String::new(), kind: TagKind::Comment, start: lt, end });
            }
            match next {
                Some(b'!') | Some(b'?') => {
                    let end = self.tag_end(lt + 1);
                    self.i = end;
                    return Some(Tag { name: String::new(), kind: TagKind::Comment, start: lt, end });
                }
                Some(b'/') => {
                    let (name, after) = self.read_name(lt + 2);
                    let end = self.tag_end(after);
                    self.i = end;
                    if name.is_empty() { continue; }
                    return Some(Tag { name, kind: TagKind::Close, start: lt, end });
                }
                Some(c) if c.is_ascii_alphabetic() => {
                    let (name, after) = self.read_name(lt + 1);
                    let end = self.tag_end(after);
                    let self_closing = end >= 2 && self.b[end - 1] == b'>' && self.b[end - 2] == b'/';
                    let kind = if self_closing || VOID.contains(&name.as_str()) {
                        TagKind::Void
                    } else {
                        TagKind::Open
                    };
                    self.i = if kind == TagKind::Open && RAW_TEXT.contains(&name.as_str()) {
                        self.raw_close(&name, end)
                    } else {
                        end
                    };
                    return Some(Tag { name, kind, start: lt, end });
                }
                _ => {
                    // A bare '<' in text
                    self.i = lt + 1;
                }
            }
        }
    }
}

/// One element located in the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    /// The opening tag, `<` through `>`
    pub open: Range<usize>,
    /// Content between the tags
    pub inner: Range<usize>,
    /// Whether a matching `</name>` was actually present
    pub closed: bool,
    /// Where scanning resumes after this element
    pub end: usize,
}

/// Elements implicitly closed when `opening` starts while they are on top of the stack.
fn implied_closes(opening: &str, stack: &mut Vec<String>) -> usize {
    let mut popped = 0;
    let top_is = |st: &Vec<String>, names: &[&str]| st.last().is_some_and(|t| names.contains(&t.as_str()));
    match opening {
        "td" | "th" => {
            if top_is(stack, &["td", "th"]) { stack.pop(); popped += 1; }
        }
        "tr" => {
            while top_is(stack, &["td", "th"]) { stack.pop(); popped += 1; }
            if top_is(stack, &["tr"]) { stack.pop(); popped += 1; }
        }
        _ => {}
    }
    popped
}

/// Build the element for an opening tag by scanning forward for where it ends.
pub fn element_from(s: &str, open: &Tag, limit: usize) -> Element {
    let limit = limit.min(s.len()).max(open.end);
    let ending = |inner_end: usize, closed: bool, end: usize| Element {
        name: open.name.clone(),
        open: open.span(),
        inner: open.end..inner_end,
        closed,
        end,
    };
    if open.kind == TagKind::Void {
        return ending(open.end, true, open.end);
    }
    if RAW_TEXT.contains(&open.name.as_str()) {
        let tags = Tags::within(s, open.end..limit);
        let close = tags.raw_close(&open.name, open.end);
        return if close < limit {
            ending(close, true, tags.tag_end(close + 2))
        } else {
            ending(limit, false, limit)
        };
    }

    let mut stack = vec![open.name.clone()];
    for tag in Tags::within(s, open.end..limit) {
        match tag.kind {
            TagKind::Void | TagKind::Comment => {}
            TagKind::Open => {
                let popped = implied_closes(&tag.name, &mut stack);
                if stack.is_empty() && popped > 0 {
                    return ending(tag.start, false, tag.start);
                }
                stack.push(tag.name);
            }
            TagKind::Close => {
                if let Some(pos) = stack.iter().rposition(|n| *n == tag.name) {
                    stack.truncate(pos);
                    if stack.is_empty() {
                        return ending(tag.start, true, tag.end);
                    }
                } else if TABLE_STRUCT.contains(&tag.name.as_str())
                    && TABLE_STRUCT.contains(&open.name.as_str())
                {
                    // e.g. `</tr>` reaching a `<td>` that was never closed
                    return ending(tag.start, false, tag.start);
                }
            }
        }
    }
    ending(limit, false, limit)
}

/// First element whose `id` attribute equals `id` exactly.
pub fn find_by_id(s: &str, id: &str) -> Option<Element> {
    Tags::new(s)
        .filter(|t| matches!(t.kind, TagKind::Open | TagKind::Void))
        .find(|t| attr_value(&s[t.span()], "id").as_deref() == Some(id))
        .map(|t| element_from(s, &t, s.len()))
}

/// Direct children of `parent` whose tag name is one of `names`.
pub fn children(s: &str, parent: &Element, names: &[&str]) -> Vec<Element> {
    let mut out = Vec::new();
    let mut tags = Tags::within(s, parent.inner.clone());
    while let Some(tag) = tags.next() {
        if matches!(tag.kind, TagKind::Close | TagKind::Comment) {
            continue; // stray closer or comment at this level
        }
        let el = element_from(s, &tag, parent.inner.end);
        tags.seek(el.end.max(tag.end));
        if names.contains(&el.name.as_str()) {
            out.push(el);
        }
    }
    out
}

/// Visible text of a fragment: tags and comments dropped, raw-text bodies
/// (scripts, styles) dropped, entities decoded, whitespace collapsed.
pub fn text_content(s: &str, range: Range<usize>) -> String {
    let mut raw = String::with_capacity(range.len());
    let mut pos = range.start;
    let mut tags = Tags::within(s, range.clone());
    while let Some(tag) = tags.next() {
        raw.push_str(&s[pos..tag.start]);
        if tag.name == "br" {
            raw.push(' ');
        }
        pos = tag.end;
        if tag.kind == TagKind::Open && RAW_TEXT.contains(&tag.name.as_str()) && tag.name != "textarea" {
            // Tags has already jumped to the closer; skip the body too
            pos = tags.i;
        }
    }
    raw.push_str(&s[pos.min(range.end)..range.end]);
    normalize_ws(&decode_entities(&raw))
}

/// One attribute inside an opening tag, offsets relative to the tag text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    /// Span of the whole `name=value` text
    pub span: Range<usize>,
    /// Raw value span, without quotes
    pub value: Option<Range<usize>>,
}

/// Attributes of an opening tag such as `<input id="output" value='x'>`.
pub fn attrs(tag: &str) -> Vec<Attr> {
    let b = tag.as_bytes();
    let n = b.len();
    let mut out = Vec::new();

    // Skip `<name`
    let mut i = 1;
    while i < n && (b[i].is_ascii_alphanumeric() || b[i] == b'-') { i += 1; }

    loop {
        while i < n && (b[i].is_ascii_whitespace() || b[i] == b'/') { i += 1; }
        if i >= n || b[i] == b'>' { break; }

        let start = i;
        while i < n && !b[i].is_ascii_whitespace() && !matches!(b[i], b'=' | b'>' | b'/') { i += 1; }
        let name = tag[start..i].to_ascii_lowercase();

        let mut j = i;
        while j < n && b[j].is_ascii_whitespace() { j += 1; }
        if j < n && b[j] == b'=' {
            j += 1;
            while j < n && b[j].is_ascii_whitespace() { j += 1; }
            let value = if j < n && (b[j] == b'"' || b[j] == b'\'') {
                let q = b[j];
                let vs = j + 1;
                let ve = tag[vs..].bytes().position(|c| c == q).map(|p| vs + p).unwrap_or(n);
                i = (ve + 1).min(n);
                vs..ve
            } else {
                let vs = j;
                let mut ve = j;
                while ve < n && !b[ve].is_ascii_whitespace() && b[ve] != b'>' { ve += 1; }
                i = ve;
                vs..ve
            };
            out.push(Attr { name, span: start..i, value: Some(value) });
        } else {
            out.push(Attr { name, span: start..i, value: None });
        }
    }
    out
}

/// Decoded value of one attribute (`Some("")` for a bare attribute).
pub fn attr_value(tag: &str, name: &str) -> Option<String> {
    attrs(tag)
        .into_iter()
        .find(|a| a.name == name)
        .map(|a| a.value.map(|v| decode_entities(&tag[v])).unwrap_or_default())
}

/// Rewrite the opening tag so `name="value"`, replacing or appending the attribute.
pub fn with_attr(tag: &str, name: &str, value: &str) -> String {
    let rendered = format!("{name}=\"{}\"", escape_attr(value));
    if let Some(a) = attrs(tag).into_iter().find(|a| a.name == name) {
        return format!("{}{}{}", &tag[..a.span.start], rendered, &tag[a.span.end..]);
    }
    // Insert before `>` or `/>`
    let mut at = tag.rfind('>').unwrap_or(tag.len());
    if at > 0 && tag.as_bytes()[at - 1] == b'/' { at -= 1; }
    let head = tag[..at].trim_end();
    format!("{head} {rendered}{}", &tag[at..].trim_start_matches(' '))
}

/// Document with `el`'s content replaced by `text` (escaped).
pub fn replace_inner(s: &str, el: &Element, text: &str) -> String {
    let mut out = String::with_capacity(s.len() + text.len());
    out.push_str(&s[..el.inner.start]);
    out.push_str(&escape_text(text));
    if !el.closed {
        out.push_str(&format!("</{}>", el.name));
    }
    out.push_str(&s[el.inner.end..]);
    out
}

/// Document with `el`'s opening tag rewritten to carry `name="value"`.
pub fn replace_attr(s: &str, el: &Element, name: &str, value: &str) -> String {
    let tag = with_attr(&s[el.open.clone()], name, value);
    format!("{}{}{}", &s[..el.open.start], tag, &s[el.open.end..])
}
