use once_cell::sync::Lazy;
use serde_json::Value;
use yew::prelude::*;

static EN: Lazy<Value> = Lazy::new(|| parse_catalog("en", include_str!("../locales/en.json")));
static KO: Lazy<Value> = Lazy::new(|| parse_catalog("ko", include_str!("../locales/ko.json")));

fn parse_catalog(code: &str, raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        log::error!("Locale catalog {} is not valid JSON: {}", code, e);
        Value::Null
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ko,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ko];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ko => "ko",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Ko => "KO",
        }
    }

    fn catalog(&self) -> &'static Value {
        match self {
            Locale::En => Lazy::force(&EN),
            Locale::Ko => Lazy::force(&KO),
        }
    }
}

/// Walk a dotted key through objects and (numeric segments) arrays.
fn resolve<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Display-text lookups for one locale. Keys missing from the active locale
/// fall back to English; keys missing everywhere come back verbatim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn lookup(&self, key: &str) -> Option<&'static Value> {
        resolve(self.locale.catalog(), key).or_else(|| resolve(Locale::En.catalog(), key))
    }

    pub fn t(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(Value::String(text)) => text.clone(),
            _ => key.to_string(),
        }
    }

    /// `t` with `{{name}}` placeholders filled in.
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter().fold(self.t(key), |text, (name, value)| {
            text.replace(&format!("{{{{{}}}}}", name), value)
        })
    }

    /// Ordered option-key to label pairs of an object entry, in catalog order.
    pub fn options(&self, key: &str) -> Vec<(String, String)> {
        match self.lookup(key) {
            Some(Value::Object(map)) => map
                .iter()
                .filter_map(|(option, label)| label.as_str().map(|l| (option.clone(), l.to_string())))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Number of entries of an array entry, zero if it is not an array.
    pub fn len(&self, key: &str) -> usize {
        match self.lookup(key) {
            Some(Value::Array(items)) => items.len(),
            _ => 0,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct I18nContext {
    pub locale: Locale,
    pub set_locale: Callback<Locale>,
}

impl I18nContext {
    pub fn translator(&self) -> Translator {
        Translator::new(self.locale)
    }
}

#[hook]
pub fn use_translator() -> Translator {
    use_context::<I18nContext>()
        .map(|ctx| ctx.translator())
        .unwrap_or_default()
}
