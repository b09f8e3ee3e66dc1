//! File templates with `{{ key }}` placeholders.
//!
//! Layout markup lives in plain HTML files under the templates directory so it
//! can be edited without a rebuild; dynamic fragments are produced by
//! [`crate::pages`] and passed in as pre-rendered HTML.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap());

#[derive(Debug, Clone)]
enum Slot {
    Text(String),
    Html(String),
}

/// Values bound into a template.
#[derive(Debug, Clone, Default)]
pub struct Context {
    slots: HashMap<&'static str, Slot>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind plain text; it is HTML-escaped on output.
    pub fn text(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.slots.insert(key, Slot::Text(value.into()));
        self
    }

    /// Bind markup that is inserted as is.
    pub fn html(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.slots.insert(key, Slot::Html(value.into()));
        self
    }

    fn lookup(&self, key: &str) -> String {
        match self.slots.get(key) {
            Some(Slot::Text(text)) => escape_html(text),
            Some(Slot::Html(html)) => html.clone(),
            None => String::new(),
        }
    }
}

/// Template files rooted at one directory.
#[derive(Debug, Clone)]
pub struct Templates {
    dir: PathBuf,
}

impl Templates {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Render `name` with `ctx`. An unreadable template renders as `""`.
    pub fn render(&self, name: &str, ctx: &Context) -> String {
        let Some(path) = self.resolve(name) else {
            tracing::warn!(template = name, "template name escapes templates directory");
            return String::new();
        };
        match std::fs::read_to_string(&path) {
            Ok(source) => fill(&source, ctx),
            Err(e) => {
                tracing::warn!(template = %path.display(), "template unreadable: {e}");
                String::new()
            }
        }
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let rel = Path::new(name);
        let inside = rel
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        inside.then(|| self.dir.join(rel))
    }
}

fn fill(source: &str, ctx: &Context) -> String {
    PLACEHOLDER_RE
        .replace_all(source, |caps: &Captures<'_>| ctx.lookup(&caps[1]))
        .into_owned()
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
