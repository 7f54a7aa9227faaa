//! Language guide: the display mapping from language name to language code.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::json::null_as_default;

/// One entry of the language guide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    /// Human-readable name, e.g. `French`.
    pub name: String,
    /// Code sent as `destination_language`, e.g. `fr`.
    pub code: String,
}

/// Ordered mapping from language name to language code.
///
/// Entries keep the order in which the backend listed them. The guide is
/// informational: user input is never checked against it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageGuide {
    languages: Vec<Language>,
}

impl LanguageGuide {
    /// Build a guide from already ordered entries.
    #[must_use]
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Iterate entries in backend order.
    pub fn iter(&self) -> std::slice::Iter<'_, Language> {
        self.languages.iter()
    }
}

impl<'a> IntoIterator for &'a LanguageGuide {
    type Item = &'a Language;
    type IntoIter = std::slice::Iter<'a, Language>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: Into<String>, C: Into<String>> FromIterator<(N, C)> for LanguageGuide {
    fn from_iter<I: IntoIterator<Item = (N, C)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(name, code)| Language {
                    name: name.into(),
                    code: code.into(),
                })
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for LanguageGuide {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GuideVisitor;

        impl<'de> Visitor<'de> for GuideVisitor {
            type Value = LanguageGuide;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of language names to language codes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut languages = Vec::with_capacity(map.size_hint().unwrap_or_default());
                while let Some((name, code)) = map.next_entry::<String, String>()? {
                    languages.push(Language { name, code });
                }
                Ok(LanguageGuide::new(languages))
            }
        }

        deserializer.deserialize_map(GuideVisitor)
    }
}

/// Body of `GET /supported-languages`.
#[derive(Debug, Default, Deserialize)]
pub struct SupportedLanguages {
    #[serde(default, deserialize_with = "null_as_default")]
    pub language_guide: LanguageGuide,
}
