//! Section markup reading for decks
//!
//! Deck files are HTML, which `quick_xml` does not read directly: attribute
//! values may be unquoted, `<` and `&` may appear bare in text, and void
//! elements such as `<br>` are never closed. `to_well_formed` rewrites those
//! forms the way an HTML tokenizer reads them, then `quick_xml` walks the
//! result. Sections are reported the way `querySelectorAll("section")` sees
//! them.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::escape::{resolve_html5_entity, unescape_with};
use quick_xml::events::{BytesStart, Event};

use crate::errors::{Result, SlidenavError};

/// Elements that never have content or an end tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content is not markup and never shown
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// A `<section>` block with its flattened text
#[derive(Debug)]
pub(crate) struct RawSection {
    pub attrs: Vec<(String, String)>,
    pub text: SectionText,
}

impl RawSection {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Plain-text rendering of one section
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct SectionText {
    pub title: Option<String>,
    pub body: Vec<String>,
}

/// Find every `<section>` block in document order
///
/// Nested sections are reported separately, outer first, and the outer one
/// keeps the inner one's text. A section left open at the end of input runs
/// to the end of input.
pub(crate) fn scan_sections(src: &str) -> Result<Vec<RawSection>> {
    let xml = to_well_formed(src)?;
    let mut reader = Reader::from_str(&xml);
    {
        let config = reader.config_mut();
        config.check_end_names = false;
        config.allow_unmatched_ends = true;
    }

    let mut buf = Vec::new();
    let mut found: Vec<Option<RawSection>> = Vec::new();
    let mut open: Vec<OpenSection> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = element_name(e.name().as_ref());
                for section in open.iter_mut() {
                    section.text.open_tag(&name);
                }
                if name == "section" {
                    open.push(OpenSection {
                        slot: found.len(),
                        attrs: attributes(e),
                        text: TextBuilder::default(),
                    });
                    found.push(None);
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name = element_name(e.name().as_ref());
                for section in open.iter_mut() {
                    section.text.void_tag(&name);
                }
            }
            Ok(Event::End(ref e)) => {
                let name = element_name(e.name().as_ref());
                if name == "section"
                    && let Some(section) = open.pop()
                {
                    section.close(&mut found);
                }
                for section in open.iter_mut() {
                    section.text.close_tag(&name);
                }
            }
            Ok(Event::Text(ref e)) => {
                let text = String::from_utf8_lossy(e);
                for section in open.iter_mut() {
                    section.text.push(&text);
                }
            }
            Ok(Event::GeneralRef(ref e)) => {
                let text = resolve_reference(&String::from_utf8_lossy(e));
                for section in open.iter_mut() {
                    section.text.push(&text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(SlidenavError::deck_parse(format!(
                    "malformed markup at byte {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    while let Some(section) = open.pop() {
        section.close(&mut found);
    }
    Ok(found.into_iter().flatten().collect())
}

struct OpenSection {
    slot: usize,
    attrs: Vec<(String, String)>,
    text: TextBuilder,
}

impl OpenSection {
    fn close(self, found: &mut [Option<RawSection>]) {
        found[self.slot] = Some(RawSection {
            attrs: self.attrs,
            text: self.text.finish(),
        });
    }
}

fn element_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).to_ascii_lowercase()
}

fn attributes(e: &BytesStart<'_>) -> Vec<(String, String)> {
    e.attributes()
        .flatten()
        .map(|attr| {
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let raw = String::from_utf8_lossy(&attr.value);
            let value = unescape_with(&raw, resolve_html5_entity)
                .map(Cow::into_owned)
                .unwrap_or_else(|_| raw.to_string());
            (key, value)
        })
        .collect()
}

/// Text for a `&name;` reference; unknown names stay literal
fn resolve_reference(name: &str) -> String {
    let raw = format!("&{};", name);
    match unescape_with(&raw, resolve_html5_entity) {
        Ok(text) => text.into_owned(),
        Err(_) => raw,
    }
}

/// Flattens one section's content to a title and body lines
///
/// The first heading becomes the title and is left out of the body.
#[derive(Default)]
struct TextBuilder {
    out: LineBuilder,
    title: Option<String>,
    heading: Option<String>,
    pre_depth: usize,
}

impl TextBuilder {
    fn open_tag(&mut self, name: &str) {
        match name {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                if self.title.is_none() && self.heading.is_none() {
                    self.heading = Some(String::new());
                } else {
                    self.out.newline();
                }
            }
            "li" => {
                self.out.newline();
                self.out.push_raw("• ");
            }
            "pre" => {
                self.out.newline();
                self.pre_depth += 1;
            }
            _ if is_block(name) => self.out.newline(),
            _ => {}
        }
    }

    fn close_tag(&mut self, name: &str) {
        match name {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => match self.heading.take() {
                Some(text) => self.title = Some(collapse_whitespace(&text)),
                None => self.out.newline(),
            },
            "pre" => {
                self.out.newline();
                self.pre_depth = self.pre_depth.saturating_sub(1);
            }
            _ if is_block(name) => self.out.newline(),
            _ => {}
        }
    }

    fn void_tag(&mut self, name: &str) {
        if name == "br" {
            self.out.newline();
        }
    }

    fn push(&mut self, text: &str) {
        match self.heading.as_mut() {
            Some(heading) => heading.push_str(text),
            None => self.out.push_text(text, self.pre_depth > 0),
        }
    }

    fn finish(mut self) -> SectionText {
        // 未闭合的标题
        if let Some(text) = self.heading.take() {
            self.title = Some(collapse_whitespace(&text));
        }
        SectionText {
            title: self.title.filter(|t| !t.is_empty()),
            body: self.out.finish(),
        }
    }
}

fn is_block(name: &str) -> bool {
    matches!(
        name,
        "p" | "div" | "section" | "ul" | "ol" | "tr" | "table" | "blockquote"
    )
}

/// Rewrite HTML into markup `quick_xml` reads with the same structure
///
/// Tag and attribute names are lowercased, attribute values are quoted,
/// valueless attributes get an empty value and repeated ones are dropped.
/// Void elements become self-closing, a `/>` on any other element is an
/// ordinary start tag. Comments, doctypes and processing instructions are
/// dropped along with script and style content. A `<` that cannot start a
/// tag and an `&` that does not start a known reference are escaped.
fn to_well_formed(src: &str) -> Result<String> {
    let bytes = src.as_bytes();
    let mut out = String::with_capacity(src.len() + src.len() / 8);
    let mut pos = 0;

    while let Some(rel) = src[pos..].find(['<', '&']) {
        let at = pos + rel;
        out.push_str(&src[pos..at]);
        let rest = &src[at..];

        if rest.starts_with('&') {
            pos = at + push_reference(rest, &mut out);
            continue;
        }

        pos = if let Some(body) = rest.strip_prefix("<!--") {
            // 未闭合的注释吞掉剩余内容
            body.find("-->").map_or(src.len(), |i| at + 4 + i + 3)
        } else if rest.starts_with("<!") || rest.starts_with("<?") {
            rest.find('>').map_or(src.len(), |i| at + i + 1)
        } else if rest.starts_with("</") && bytes.get(at + 2).is_some_and(u8::is_ascii_alphabetic) {
            let name = rest[2..2 + tag_name_len(&rest[2..])].to_ascii_lowercase();
            if name == "br" {
                out.push_str("<br/>");
            } else if !VOID_ELEMENTS.contains(&name.as_str()) {
                out.push_str("</");
                out.push_str(&name);
                out.push('>');
            }
            rest.find('>').map_or(src.len(), |i| at + i + 1)
        } else if bytes.get(at + 1).is_some_and(u8::is_ascii_alphabetic) {
            start_tag(src, at, &mut out)?
        } else {
            out.push_str("&lt;");
            at + 1
        };
    }
    out.push_str(&src[pos..]);
    Ok(out)
}

/// Copy the start tag at `at`, returning where scanning resumes
fn start_tag(src: &str, at: usize, out: &mut String) -> Result<usize> {
    let bytes = src.as_bytes();
    let mut i = at + 1;
    let name_len = tag_name_len(&src[i..]);
    let name = src[i..i + name_len].to_ascii_lowercase();
    i += name_len;

    let unterminated =
        || SlidenavError::deck_parse(format!("unterminated <{}> tag at byte {}", name, at));
    let skip_whitespace = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_whitespace) {
            i += 1;
        }
        i
    };

    out.push('<');
    out.push_str(&name);
    let mut seen: Vec<String> = Vec::new();

    loop {
        i = skip_whitespace(i);
        match bytes.get(i).copied() {
            None => return Err(unterminated()),
            Some(b'>') => {
                i += 1;
                break;
            }
            Some(b'/') => {
                i += 1;
                continue;
            }
            _ => {}
        }

        let start = i;
        while bytes
            .get(i)
            .is_some_and(|&b| !b.is_ascii_whitespace() && !matches!(b, b'/' | b'>' | b'='))
        {
            i += 1;
        }
        let attr = src[start..i].to_ascii_lowercase();

        let mut value = "";
        let after_name = skip_whitespace(i);
        if bytes.get(after_name) == Some(&b'=') {
            i = skip_whitespace(after_name + 1);
            match bytes.get(i).copied() {
                Some(quote @ (b'"' | b'\'')) => {
                    let body = i + 1;
                    let close = src[body..]
                        .find(char::from(quote))
                        .ok_or_else(unterminated)?;
                    value = &src[body..body + close];
                    i = body + close + 1;
                }
                _ => {
                    let start = i;
                    while bytes
                        .get(i)
                        .is_some_and(|&b| !b.is_ascii_whitespace() && b != b'>')
                    {
                        i += 1;
                    }
                    value = &src[start..i];
                }
            }
        }

        let valid = !attr.is_empty() && !attr.contains(['"', '\'', '<', '&']);
        if valid && !seen.contains(&attr) {
            out.push(' ');
            out.push_str(&attr);
            out.push_str("=\"");
            push_attribute_value(value, out);
            out.push('"');
            seen.push(attr);
        }
    }

    if VOID_ELEMENTS.contains(&name.as_str()) {
        out.push_str("/>");
        return Ok(i);
    }
    out.push('>');

    if RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
        let closing = format!("</{}", name);
        return Ok(src[i..]
            .to_ascii_lowercase()
            .find(&closing)
            .map_or(src.len(), |rel| i + rel));
    }
    Ok(i)
}

fn tag_name_len(s: &str) -> usize {
    s.find(|c: char| c.is_ascii_whitespace() || c == '/' || c == '>')
        .unwrap_or(s.len())
}

fn push_attribute_value(value: &str, out: &mut String) {
    let mut rest = value;
    while let Some(rel) = rest.find(['"', '<', '&']) {
        out.push_str(&rest[..rel]);
        let tail = &rest[rel..];
        let consumed = match tail.as_bytes()[0] {
            b'"' => {
                out.push_str("&quot;");
                1
            }
            b'<' => {
                out.push_str("&lt;");
                1
            }
            _ => push_reference(tail, out),
        };
        rest = &tail[consumed..];
    }
    out.push_str(rest);
}

/// Copy the reference at the start of `s` or escape its `&`
///
/// Numeric references are rewritten in decimal. Returns the bytes consumed.
fn push_reference(s: &str, out: &mut String) -> usize {
    let parsed = s[1..].find(';').and_then(|semi| {
        let name = &s[1..1 + semi];
        let canonical = match name.strip_prefix('#') {
            Some(number) => {
                let (digits, radix) = match number.strip_prefix(['x', 'X']) {
                    Some(hex) => (hex, 16),
                    None => (number, 10),
                };
                let code = (!digits.is_empty()
                    && digits.chars().all(|c| c.is_digit(radix)))
                .then(|| u32::from_str_radix(digits, radix).ok())
                .flatten()
                .filter(|&code| code != 0 && char::from_u32(code).is_some())?;
                format!("&#{};", code)
            }
            None if name.bytes().all(|b| b.is_ascii_alphanumeric())
                && resolve_html5_entity(name).is_some() =>
            {
                format!("&{};", name)
            }
            None => return None,
        };
        Some((canonical, semi + 2))
    });

    match parsed {
        Some((canonical, len)) => {
            out.push_str(&canonical);
            len
        }
        None => {
            out.push_str("&amp;");
            1
        }
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Default)]
struct LineBuilder {
    lines: Vec<String>,
    current: String,
}

impl LineBuilder {
    fn push_raw(&mut self, s: &str) {
        self.current.push_str(s);
    }

    fn push_text(&mut self, text: &str, preserve: bool) {
        if preserve {
            let mut parts = text.split('\n');
            if let Some(first) = parts.next() {
                self.current.push_str(first);
            }
            for part in parts {
                self.newline();
                self.current.push_str(part);
            }
            return;
        }

        for (idx, word) in text.split_whitespace().enumerate() {
            let needs_space = if idx == 0 {
                text.starts_with(|c: char| c.is_whitespace())
            } else {
                true
            };
            if needs_space && !self.current.is_empty() && !self.current.ends_with(' ') {
                self.current.push(' ');
            }
            self.current.push_str(word);
        }
        if text.ends_with(|c: char| c.is_whitespace())
            && !self.current.is_empty()
            && !self.current.ends_with(' ')
        {
            self.current.push(' ');
        }
    }

    fn newline(&mut self) {
        let line = std::mem::take(&mut self.current);
        self.lines.push(line.trim_end().to_string());
    }

    fn finish(mut self) -> Vec<String> {
        self.newline();

        let mut out: Vec<String> = Vec::with_capacity(self.lines.len());
        for line in self.lines {
            if line.is_empty() && out.last().is_none_or(|l| l.is_empty()) {
                continue;
            }
            out.push(line);
        }
        while out.last().is_some_and(|l| l.is_empty()) {
            out.pop();
        }
        out
    }
}
