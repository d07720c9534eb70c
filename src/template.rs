use std::fs;
use std::path::Path;

use crate::error::TemplateError;

const RATE: &str = "rate";
const BODY: &str = "body";

/// Values substituted into the chart page.
pub struct Page {
    pub rate: String,
    pub body: String,
}

impl Page {
    pub fn new(rate: f64, body: String) -> Self {
        Self {
            rate: format!("{rate:.2}"),
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Text(String),
    Rate,
    Body,
}

/// HTML page with `{{rate}}` and `{{body}}` placeholders, parsed once at
/// startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    segments: Vec<Segment>,
}

impl PageTemplate {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(open) = rest.find("{{") {
            if open > 0 {
                segments.push(Segment::Text(rest[..open].to_string()));
            }
            let after_open = &rest[open + 2..];
            let close = after_open
                .find("}}")
                .ok_or(TemplateError::Unclosed(offset + open))?;

            let segment = match after_open[..close].trim() {
                RATE => Segment::Rate,
                BODY => Segment::Body,
                other => return Err(TemplateError::UnknownPlaceholder(other.to_string())),
            };
            segments.push(segment);

            let consumed = open + 2 + close + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        if !segments.contains(&Segment::Rate) {
            return Err(TemplateError::MissingPlaceholder(RATE));
        }
        if !segments.contains(&Segment::Body) {
            return Err(TemplateError::MissingPlaceholder(BODY));
        }

        Ok(Self { segments })
    }

    /// `page.body` is inserted verbatim; `page.rate` is escaped.
    pub fn render(&self, page: &Page) -> String {
        let mut html = String::with_capacity(page.body.len() + 1024);
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => html.push_str(text),
                Segment::Rate => push_escaped(&mut html, &page.rate),
                Segment::Body => html.push_str(&page.body),
            }
        }
        html
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
