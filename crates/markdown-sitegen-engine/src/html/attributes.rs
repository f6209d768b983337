/// The value of an HTML attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Rendered as `key="value"`.
    Text(String),
    /// `true` renders as a bare `key`, `false` omits the attribute.
    Flag(bool),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Flag(value)
    }
}

/// An insertion-ordered attribute list.
///
/// Setting a key twice keeps its first position and the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, AttrValue)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the attributes as they appear inside an opening tag.
    ///
    /// Returns an empty string when nothing renders, otherwise a leading
    /// space followed by space-separated entries. Keys and text values are
    /// trimmed.
    pub fn to_html(&self) -> String {
        let rendered: Vec<String> = self
            .0
            .iter()
            .filter_map(|(key, value)| match value {
                AttrValue::Text(text) => Some(format!("{}=\"{}\"", key.trim(), text.trim())),
                AttrValue::Flag(true) => Some(key.trim().to_string()),
                AttrValue::Flag(false) => None,
            })
            .collect();

        if rendered.is_empty() {
            String::new()
        } else {
            format!(" {}", rendered.join(" "))
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entries: Vec<(String, AttrValue)> = Vec::new();
        for (key, value) in iter {
            let key = key.into();
            let value = value.into();
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some(existing) => existing.1 = value,
                None => entries.push((key, value)),
            }
        }
        Self(entries)
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
