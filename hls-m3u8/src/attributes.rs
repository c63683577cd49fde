//! Attribute lists: `NAME=VALUE,NAME="VALUE",...`
//!
//! Values are kept exactly as written (quotes included) so that attributes
//! this crate does not model survive a decode/encode cycle untouched. Known
//! attributes go through [`sanitize_attribute_value`] and the typed
//! accessors on [`Attributes`].

use std::{collections::HashMap, fmt::Display, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;
use smol_str::SmolStr;

use crate::error::TagError;

pub const YES: &str = "YES";
pub const NO: &str = "NO";
pub const NONE: &str = "NONE";

/// Attribute name to raw attribute value, quotes retained.
pub type AttributeMap = HashMap<SmolStr, SmolStr>;

lazy_static! {
    static ref ATTRIBUTE_REGEX: Regex =
        Regex::new(r#"([A-Za-z0-9_-]+)\s*=\s*("[^"]*"|[^,]*)"#).expect("Regular expression error");
}

/// Splits an attribute list into a name to raw value map.
///
/// Line breaks are removed first, so a tag spread over several lines parses
/// like a single one. Fragments without `=` are skipped.
pub fn parse_attributes(input: impl AsRef<str>) -> AttributeMap {
    let input = input.as_ref().replace(['\n', '\r'], "");
    let mut result = HashMap::new();
    for (_, [key, value]) in ATTRIBUTE_REGEX.captures_iter(&input).map(|x| x.extract()) {
        result.insert(key.into(), value.into());
    }

    result
}

/// Strips one pair of surrounding double quotes. A lone leading or trailing
/// quote is stripped as well.
pub fn sanitize_attribute_value(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

pub fn format_yes_no(value: bool) -> &'static str {
    if value { YES } else { NO }
}

/// Parses an integer literal with an optional sign and an optional
/// `0x`, `0o` or `0b` base prefix.
pub fn parse_int_literal(text: &str) -> Option<i64> {
    let (negative, radix, digits) = split_int_literal(text)?;
    let magnitude = i128::from_str_radix(digits, radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}

/// Like [`parse_int_literal`] over the full `u64` range. A `-` sign is
/// rejected.
pub fn parse_uint_literal(text: &str) -> Option<u64> {
    match split_int_literal(text)? {
        (true, _, _) => None,
        (false, radix, digits) => u64::from_str_radix(digits, radix).ok(),
    }
}

fn split_int_literal(text: &str) -> Option<(bool, u32, &str)> {
    let (negative, unsigned) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        Some("0o" | "0O") => (8, &unsigned[2..]),
        Some("0b" | "0B") => (2, &unsigned[2..]),
        _ => (10, unsigned),
    };

    // from_str_radix accepts its own sign, which must not follow ours
    if !digits.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        return None;
    }

    Some((negative, radix, digits))
}

/// Video resolution, written as `WIDTHxHEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl FromStr for Resolution {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TagError::InvalidResolution(s.into());
        let mut parts = s.split('x');
        let (Some(width), Some(height)) = (parts.next(), parts.next()) else {
            return Err(invalid());
        };

        let side = |text: &str| {
            parse_int_literal(text)
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(invalid)
        };

        Ok(Self {
            width: side(width)?,
            height: side(height)?,
        })
    }
}

impl Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A parsed attribute list with typed accessors.
///
/// Every accessor returns `Ok(None)` when the attribute is absent and an
/// error only when it is present but cannot be converted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(AttributeMap);

impl Attributes {
    pub fn parse(input: impl AsRef<str>) -> Self {
        Self(parse_attributes(input))
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(SmolStr::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn string(&self, key: &str) -> Option<SmolStr> {
        self.raw(key).map(|v| sanitize_attribute_value(v).into())
    }

    pub fn int(&self, key: &str) -> Result<Option<i64>, TagError> {
        let Some(value) = self.raw(key).map(sanitize_attribute_value) else {
            return Ok(None);
        };

        parse_int_literal(value)
            .map(Some)
            .ok_or_else(|| TagError::InvalidInteger {
                key: key.into(),
                value: value.into(),
            })
    }

    /// Like [`Attributes::int`] over the full `u64` range, rejecting
    /// negative values.
    pub fn unsigned(&self, key: &str) -> Result<Option<u64>, TagError> {
        let Some(value) = self.raw(key).map(sanitize_attribute_value) else {
            return Ok(None);
        };

        parse_uint_literal(value)
            .map(Some)
            .ok_or_else(|| TagError::InvalidInteger {
                key: key.into(),
                value: value.into(),
            })
    }

    pub fn float(&self, key: &str) -> Result<Option<f64>, TagError> {
        let Some(value) = self.raw(key).map(sanitize_attribute_value) else {
            return Ok(None);
        };

        value
            .parse()
            .map(Some)
            .map_err(|_| TagError::InvalidFloat {
                key: key.into(),
                value: value.into(),
            })
    }

    /// `YES` is true, any other present value is false.
    pub fn yes_no(&self, key: &str) -> Option<bool> {
        self.raw(key).map(|v| sanitize_attribute_value(v) == YES)
    }

    pub fn bandwidth(&self, key: &str) -> Result<u64, TagError> {
        let value = self
            .raw(key)
            .map(sanitize_attribute_value)
            .ok_or(TagError::BandwidthMissing)?;

        parse_uint_literal(value).ok_or_else(|| TagError::BandwidthInvalid(value.into()))
    }

    pub fn resolution(&self, key: &str) -> Result<Option<Resolution>, TagError> {
        self.raw(key)
            .map(|v| sanitize_attribute_value(v).parse())
            .transpose()
    }

    /// Copies every attribute not listed in `known`, values untouched.
    pub fn residual(&self, known: &[&str]) -> AttributeMap {
        self.0
            .iter()
            .filter(|(key, _)| !known.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl From<AttributeMap> for Attributes {
    fn from(value: AttributeMap) -> Self {
        Self(value)
    }
}

/// Builds the `NAME=VALUE,...` part of a tag line.
#[derive(Debug, Default)]
pub(crate) struct AttributeListWriter {
    parts: Vec<String>,
}

impl AttributeListWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.parts.push(format!("{}={}", key, value));
        self
    }

    pub fn quoted(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.parts.push(format!("{}=\"{}\"", key, value));
        self
    }

    pub fn plain_opt(&mut self, key: &str, value: Option<impl Display>) -> &mut Self {
        if let Some(value) = value {
            self.plain(key, value);
        }
        self
    }

    pub fn quoted_opt(&mut self, key: &str, value: Option<impl Display>) -> &mut Self {
        if let Some(value) = value {
            self.quoted(key, value);
        }
        self
    }

    pub fn yes_no_opt(&mut self, key: &str, value: Option<bool>) -> &mut Self {
        self.plain_opt(key, value.map(format_yes_no))
    }

    /// Appends unknown attributes verbatim, sorted by name so output is stable.
    pub fn residual(&mut self, attributes: &AttributeMap) -> &mut Self {
        let mut residual = attributes.iter().collect::<Vec<_>>();
        residual.sort_unstable_by(|a, b| a.0.cmp(b.0));
        for (key, value) in residual {
            self.plain(key, value);
        }
        self
    }
}

impl Display for AttributeListWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.parts.join(","))
    }
}
