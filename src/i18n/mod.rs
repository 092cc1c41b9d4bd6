//! Internationalization (i18n) support
//!
//! Message catalogs live in `<i18n_dir>/<lang>.yml` (or `.json`) and map a
//! source message to its translation. Plural messages map to either a
//! `{one, other}` mapping or a two-item list.

use anyhow::Result;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Catalog key holding number formatting options
const NUMBER_FORMAT_KEY: &str = "number_format";

/// Grammatical number used to pick a plural form
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Plurality {
    One,
    Other,
}

impl Plurality {
    pub fn of(n: u64) -> Self {
        if n == 1 {
            Plurality::One
        } else {
            Plurality::Other
        }
    }
}

/// An argument for `format_message`
#[derive(Debug, Clone, Copy)]
pub enum Arg<'a> {
    Int(u64),
    Str(&'a str),
}

impl Arg<'_> {
    fn render(&self) -> String {
        match self {
            Arg::Int(n) => n.to_string(),
            Arg::Str(s) => s.to_string(),
        }
    }
}

/// Internationalization handler
#[derive(Debug, Clone)]
pub struct I18n {
    /// Current language
    language: String,
    /// Language data: lang -> source message -> translation
    translations: HashMap<String, HashMap<String, serde_yaml::Value>>,
}

impl I18n {
    /// Create a new i18n handler
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            translations: HashMap::new(),
        }
    }

    /// Load language files from a directory
    pub fn load_languages<P: AsRef<Path>>(&mut self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str());
            if !matches!(ext, Some("yml") | Some("yaml") | Some("json")) {
                continue;
            }

            let lang = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("en")
                .to_string();

            let content = fs::read_to_string(&path)?;

            // serde_yaml reads JSON catalogs as well
            match serde_yaml::from_str::<HashMap<String, serde_yaml::Value>>(&content) {
                Ok(data) => {
                    tracing::debug!("Loaded language file: {:?}", path);
                    self.translations.insert(lang, data);
                }
                Err(e) => {
                    tracing::warn!("Failed to parse language file {:?}: {}", path, e);
                }
            }
        }

        Ok(())
    }

    /// Register a catalog directly
    pub fn add_catalog(&mut self, lang: &str, data: HashMap<String, serde_yaml::Value>) {
        self.translations.insert(lang.to_string(), data);
    }

    /// Translate a message, falling back to English and then to the source text
    pub fn translate(&self, msgid: &str) -> String {
        match self.lookup(msgid) {
            Some(serde_yaml::Value::String(s)) => s.clone(),
            _ => msgid.to_string(),
        }
    }

    /// Translate a message with singular and plural source forms
    pub fn translate_plural(&self, singular: &str, plural: &str, n: u64) -> String {
        let number = Plurality::of(n);
        let fallback = match number {
            Plurality::One => singular,
            Plurality::Other => plural,
        };

        let form = match self.lookup(singular) {
            Some(serde_yaml::Value::Mapping(forms)) => {
                let key = match number {
                    Plurality::One => "one",
                    Plurality::Other => "other",
                };
                forms
                    .get(serde_yaml::Value::String(key.to_string()))
                    .and_then(|v| v.as_str())
            }
            Some(serde_yaml::Value::Sequence(forms)) => {
                let idx = usize::from(number == Plurality::Other);
                forms.get(idx).and_then(|v| v.as_str())
            }
            _ => None,
        };

        form.unwrap_or(fallback).to_string()
    }

    /// Format an integer with the current language's thousands separator
    pub fn format_number(&self, n: u64) -> String {
        let sep = self
            .lookup(NUMBER_FORMAT_KEY)
            .and_then(|v| v.get("thousands_sep"))
            .and_then(|v| v.as_str())
            .unwrap_or(",");

        let digits = n.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 * sep.len());
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push_str(sep);
            }
            out.push(c);
        }
        out
    }

    fn lookup(&self, key: &str) -> Option<&serde_yaml::Value> {
        if let Some(value) = self.translations.get(&self.language).and_then(|d| d.get(key)) {
            return Some(value);
        }

        if self.language != "en" {
            return self.translations.get("en").and_then(|d| d.get(key));
        }

        None
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("en")
    }
}

/// Substitute printf-style placeholders
///
/// Supports positional (`%1$d`, `%2$s`) and sequential (`%d`, `%s`)
/// placeholders plus `%%`. Unknown or missing placeholders are kept as-is.
pub fn format_message(template: &str, args: &[Arg<'_>]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut next_arg = 0;
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let spec = &rest[pos + 1..];

        if let Some(after) = spec.strip_prefix('%') {
            out.push('%');
            rest = after;
            continue;
        }

        let digits = spec.chars().take_while(|c| c.is_ascii_digit()).count();
        let positional = digits > 0 && spec[digits..].starts_with('$');
        let (index, conv_at) = if positional {
            // Placeholders are 1-based
            let n: usize = spec[..digits].parse().unwrap_or(0);
            (n.checked_sub(1), digits + 1)
        } else {
            (Some(next_arg), 0)
        };

        match spec[conv_at..].chars().next() {
            Some(conv @ ('d' | 's')) => {
                match index.and_then(|i| args.get(i)) {
                    Some(arg) => out.push_str(&arg.render()),
                    None => {
                        out.push('%');
                        out.push_str(&spec[..conv_at]);
                        out.push(conv);
                    }
                }
                if !positional {
                    next_arg += 1;
                }
                rest = &spec[conv_at + 1..];
            }
            _ => {
                out.push('%');
                rest = spec;
            }
        }
    }

    out.push_str(rest);
    out
}
