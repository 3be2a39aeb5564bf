//! I define the [`LanguageTag`] wrapper type,
//! which guarantees that the underlying text
//! is a valid [BCP47](https://tools.ietf.org/search/bcp47) language tag,
//! or at least satisfies Turtle's `LANGTAG` production.
use crate::{Result, TermError};
use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::Arc;

lazy_static! {
    static ref LANG_TAG: Regex = Regex::new(LANG_TAG_SRC).unwrap();
    static ref TURTLE_LANG_TAG: Regex = Regex::new(TURTLE_LANG_TAG_SRC).unwrap();
}

/// A language tag, as carried by a
/// [language tagged string](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string).
///
/// Language tags are compared, ordered and hashed case-insensitively,
/// but keep the case they were created with.
///
/// NB: [`LanguageTag::new`] is actually slightly more permissive than BCP47,
/// as it does not check that the different subtags are registered (language, country...) codes.
#[derive(Clone, Debug)]
pub struct LanguageTag(Arc<str>);

impl LanguageTag {
    /// Build a new [`LanguageTag`] from `tag`,
    /// returning an error if it is not a valid BCP47 language tag.
    pub fn new<T: Into<Arc<str>>>(tag: T) -> Result<Self> {
        let tag = tag.into();
        if LANG_TAG.is_match(&tag) {
            Ok(LanguageTag(tag))
        } else {
            Err(TermError::InvalidLanguageTag {
                tag: tag.to_string(),
                err: "does not comply with BCP47".into(),
            })
        }
    }

    /// Build a new [`LanguageTag`] from `tag`,
    /// returning an error if it does not satisfy Turtle's `LANGTAG` production
    /// (without the leading `@`).
    pub fn new_turtle<T: Into<Arc<str>>>(tag: T) -> Result<Self> {
        let tag = tag.into();
        if TURTLE_LANG_TAG.is_match(&tag) {
            Ok(LanguageTag(tag))
        } else {
            Err(TermError::InvalidLanguageTag {
                tag: tag.to_string(),
                err: "does not comply with Turtle's LANGTAG".into(),
            })
        }
    }

    /// Build a new [`LanguageTag`] from `tag`, without checking it.
    pub fn new_unchecked<T: Into<Arc<str>>>(tag: T) -> Self {
        LanguageTag(tag.into())
    }

    /// Gets a reference to the underlying `str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn folded(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars().map(|c| c.to_ascii_lowercase())
    }
}

impl std::ops::Deref for LanguageTag {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LanguageTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq for LanguageTag {
    fn eq(&self, other: &LanguageTag) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl PartialEq<str> for LanguageTag {
    fn eq(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl PartialEq<&str> for LanguageTag {
    fn eq(&self, other: &&str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl Eq for LanguageTag {}

impl PartialOrd for LanguageTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LanguageTag {
    fn cmp(&self, other: &LanguageTag) -> Ordering {
        self.folded().cmp(other.folded())
    }
}

impl std::hash::Hash for LanguageTag {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.folded().for_each(|c| c.hash(state));
    }
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Match Turtle's `LANGTAG` production, without the leading `@`.
pub static TURTLE_LANG_TAG_SRC: &str = r"^[a-zA-Z]+(-[a-zA-Z0-9]+)*$";

/// Match a valid BCP47 language tag
pub static LANG_TAG_SRC: &str = r"(?xi-u)^
(
  (?:
    (?: #language
      (?:
        [A-Z]{2,3}
        (?: #extlang
          (?:
            -[A-Z]{3}
          ){0,3}
        )
      )
    |
      [A-Z]{4,8}
    )
    (?: #script
      -[A-Z]{4}
    )?
    (?: #region
      -
      (?:
        [A-Z]{2}
      |
        [0-9]{3}
      )
    )?
    (?: #variant
      -
      (?:
        [A-Z0-9]{5,8}
      |
        [0-9][A-Z0-9]{3}
      )
    )*
    (?: #extension
      -[0-9A-WY-Z]
      (?:
        -[A-Z0-9]{2,8}
      )+
    )*
    (?: #privateUse
      -X
      (?:
        -[A-Z0-9]{1,8}
      )+
    )?
  )
|
  (?: #privateUse
    X
    (?:
      -[A-Z0-9]{1,8}
    )+
  )
|
  (?: #grandfathered
    en-GB-oed|i-ami|i-bnn|i-default|i-enochian|i-hak|i-klingon|i-lux|i-mingo|i-navajo|i-pwn|i-tao|i-tay|i-tsu|sgn-BE-FR|sgn-BE-NL|sgn-CH-DE
    # NB regular grandfathered tags are not included,
    # as they will be matched by the normal case
  )
)$";
