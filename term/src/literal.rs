//! I define [`Literal`], and the value-aware ordering and canonicalization
//! of literals whose datatype is a recognized XSD datatype.
use crate::ns::{rdf, xsd};
use crate::{Iri, LanguageTag};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::Arc;

lazy_static! {
    static ref INTEGER: Regex = Regex::new(r"^[+-]?[0-9]+$").unwrap();
    static ref DECIMAL: Regex = Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)$").unwrap();
    static ref DOUBLE: Regex =
        Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?$").unwrap();
}

/// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal).
///
/// The derived equality is strict:
/// lexical forms, datatypes and language tags must all be equal
/// (the latter case-insensitively).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Literal {
    lexical: Arc<str>,
    datatype: Iri,
    language: Option<LanguageTag>,
}

impl Literal {
    /// A literal with the given lexical form and datatype.
    ///
    /// NB: `datatype` should not be `rdf:langString`; use [`Literal::new_lang`] instead.
    pub fn new_dt<T: Into<Arc<str>>>(lexical: T, datatype: Iri) -> Self {
        Literal {
            lexical: lexical.into(),
            datatype,
            language: None,
        }
    }

    /// A language-tagged string.
    pub fn new_lang<T: Into<Arc<str>>>(lexical: T, tag: LanguageTag) -> Self {
        Literal {
            lexical: lexical.into(),
            datatype: Iri::new_unchecked(rdf::langString),
            language: Some(tag),
        }
    }

    /// A simple literal, i.e. a literal of datatype `xsd:string`.
    pub fn new_simple<T: Into<Arc<str>>>(lexical: T) -> Self {
        Self::new_dt(lexical, Iri::new_unchecked(xsd::string))
    }

    /// The lexical form of this literal.
    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    /// The datatype of this literal.
    pub fn datatype(&self) -> &Iri {
        &self.datatype
    }

    /// The language tag of this literal, if any.
    pub fn language(&self) -> Option<&LanguageTag> {
        self.language.as_ref()
    }

    /// Whether the lexical form is valid for the datatype.
    ///
    /// Literals whose datatype is not recognized are always considered well-formed.
    pub fn is_well_formed(&self) -> bool {
        match kind_of(&self.datatype) {
            None => true,
            Some(kind) => parse(kind, &self.lexical).is_some(),
        }
    }

    /// The canonical form of this literal,
    /// if its datatype is recognized, its lexical form is valid,
    /// and it is not already canonical.
    pub fn canonical(&self) -> Option<Literal> {
        let kind = kind_of(&self.datatype)?;
        let (canonical, _) = parse(kind, &self.lexical)?;
        if canonical == *self.lexical {
            None
        } else {
            Some(Literal {
                lexical: canonical.into(),
                datatype: self.datatype.clone(),
                language: None,
            })
        }
    }

    fn sort_key(&self) -> Option<SortKey> {
        let kind = kind_of(&self.datatype)?;
        parse(kind, &self.lexical).map(|(_, key)| key)
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Well-formed numeric literals come first, ordered by value regardless of their datatype.
/// Other literals are ordered by datatype, then by value (well-formed values first),
/// then by lexical form.
///
/// Remaining ties are broken so that only equal literals compare as `Equal`.
impl Ord for Literal {
    fn cmp(&self, other: &Self) -> Ordering {
        let k1 = self.sort_key();
        let k2 = other.sort_key();
        let by_value = match (&k1, &k2) {
            (Some(SortKey::Number(v1, i1)), Some(SortKey::Number(v2, i2))) => v1
                .total_cmp(v2)
                .then_with(|| self.datatype.cmp(&other.datatype))
                .then_with(|| i1.cmp(i2)),
            (Some(SortKey::Number(..)), _) => Ordering::Less,
            (_, Some(SortKey::Number(..))) => Ordering::Greater,
            _ => self
                .datatype
                .cmp(&other.datatype)
                .then_with(|| match (&k1, &k2) {
                    (Some(k1), Some(k2)) => k1.cmp_same_kind(k2),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }),
        };
        by_value
            .then_with(|| self.lexical.cmp(&other.lexical))
            .then_with(|| self.language.cmp(&other.language))
    }
}

/// The recognized XSD datatypes, grouped by how their lexical space is parsed.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Kind {
    Integer { min: Option<i128>, max: Option<i128> },
    Decimal,
    Double,
    Float,
    Boolean,
    DateTime,
    Date,
}

fn kind_of(datatype: &Iri) -> Option<Kind> {
    let suffix = datatype.as_str().strip_prefix(xsd::PREFIX)?;
    let int = |min: Option<i128>, max: Option<i128>| Some(Kind::Integer { min, max });
    match suffix {
        "integer" => int(None, None),
        "long" => int(Some(i64::MIN.into()), Some(i64::MAX.into())),
        "int" => int(Some(i32::MIN.into()), Some(i32::MAX.into())),
        "short" => int(Some(i16::MIN.into()), Some(i16::MAX.into())),
        "byte" => int(Some(i8::MIN.into()), Some(i8::MAX.into())),
        "nonNegativeInteger" => int(Some(0), None),
        "positiveInteger" => int(Some(1), None),
        "nonPositiveInteger" => int(None, Some(0)),
        "negativeInteger" => int(None, Some(-1)),
        "unsignedLong" => int(Some(0), Some(u64::MAX.into())),
        "unsignedInt" => int(Some(0), Some(u32::MAX.into())),
        "unsignedShort" => int(Some(0), Some(u16::MAX.into())),
        "unsignedByte" => int(Some(0), Some(u8::MAX.into())),
        "decimal" => Some(Kind::Decimal),
        "double" => Some(Kind::Double),
        "float" => Some(Kind::Float),
        "boolean" => Some(Kind::Boolean),
        "dateTime" | "dateTimeStamp" => Some(Kind::DateTime),
        "date" => Some(Kind::Date),
        _ => None,
    }
}

/// The value of a well-formed literal, as used for ordering.
#[derive(Clone, Debug)]
enum SortKey {
    /// Numeric value, and exact value for integers.
    Number(f64, Option<i128>),
    Boolean(bool),
    /// Date-times with a timezone are converted to UTC,
    /// date-times without one are compared as if they were UTC.
    Instant(NaiveDateTime),
    Date(NaiveDate),
}

impl SortKey {
    /// Compare two keys obtained from literals with the same datatype.
    fn cmp_same_kind(&self, other: &SortKey) -> Ordering {
        use SortKey::*;
        match (self, other) {
            (Number(v1, i1), Number(v2, i2)) => v1.total_cmp(v2).then_with(|| i1.cmp(i2)),
            (Boolean(b1), Boolean(b2)) => b1.cmp(b2),
            (Instant(d1), Instant(d2)) => d1.cmp(d2),
            (Date(d1), Date(d2)) => d1.cmp(d2),
            _ => Ordering::Equal,
        }
    }
}

/// Parse `lex` according to `kind`,
/// returning its canonical lexical form and its sort key,
/// or `None` if `lex` is malformed.
fn parse(kind: Kind, lex: &str) -> Option<(String, SortKey)> {
    match kind {
        Kind::Integer { min, max } => {
            if !INTEGER.is_match(lex) {
                return None;
            }
            let i: i128 = lex.parse().ok()?;
            if min.is_some_and(|min| i < min) || max.is_some_and(|max| i > max) {
                return None;
            }
            Some((i.to_string(), SortKey::Number(i as f64, Some(i))))
        }
        Kind::Decimal => {
            if !DECIMAL.is_match(lex) {
                return None;
            }
            let v: f64 = lex.parse().ok()?;
            Some((canonical_decimal(lex), SortKey::Number(v, None)))
        }
        Kind::Double => {
            let v = parse_floating(lex)?;
            Some((canonical_floating(v), SortKey::Number(v, None)))
        }
        Kind::Float => {
            let v = parse_floating(lex)? as f32;
            Some((canonical_floating(v), SortKey::Number(v.into(), None)))
        }
        Kind::Boolean => {
            let b = match lex {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => return None,
            };
            Some((b.to_string(), SortKey::Boolean(b)))
        }
        Kind::DateTime => {
            if let Ok(dt) = DateTime::parse_from_rfc3339(lex) {
                let utc = dt.with_timezone(&Utc).naive_utc();
                let canonical = utc.format("%Y-%m-%dT%H:%M:%S%.fZ").to_string();
                Some((canonical, SortKey::Instant(utc)))
            } else {
                let naive = NaiveDateTime::parse_from_str(lex, "%Y-%m-%dT%H:%M:%S%.f").ok()?;
                let canonical = naive.format("%Y-%m-%dT%H:%M:%S%.f").to_string();
                Some((canonical, SortKey::Instant(naive)))
            }
        }
        Kind::Date => {
            let date = NaiveDate::parse_from_str(lex, "%Y-%m-%d").ok()?;
            Some((date.format("%Y-%m-%d").to_string(), SortKey::Date(date)))
        }
    }
}

fn parse_floating(lex: &str) -> Option<f64> {
    match lex {
        "INF" | "+INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        _ if DOUBLE.is_match(lex) => lex.parse().ok(),
        _ => None,
    }
}

fn canonical_floating<F: Copy + Into<f64> + std::fmt::UpperExp>(v: F) -> String {
    let as_f64: f64 = v.into();
    if as_f64.is_nan() {
        "NaN".into()
    } else if as_f64.is_infinite() {
        if as_f64 > 0.0 { "INF" } else { "-INF" }.into()
    } else if as_f64 == 0.0 {
        "0E0".into()
    } else {
        format!("{v:E}")
    }
}

/// Assumes that `lex` matches [`DECIMAL`].
fn canonical_decimal(lex: &str) -> String {
    let (negative, unsigned) = match lex.as_bytes()[0] {
        b'-' => (true, &lex[1..]),
        b'+' => (false, &lex[1..]),
        _ => (false, lex),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let int_part = int_part.trim_start_matches('0');
    let frac_part = frac_part.trim_end_matches('0');
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let frac_part = if frac_part.is_empty() { "0" } else { frac_part };
    let is_zero = int_part == "0" && frac_part == "0";
    let sign = if negative && !is_zero { "-" } else { "" };
    format!("{sign}{int_part}.{frac_part}")
}
