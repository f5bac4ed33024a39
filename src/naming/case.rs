//! Case-style conversion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwatchError};

/// Output naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameStyle {
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "snake_case")]
    SnakeCase,
}

impl NameStyle {
    /// Convert `name` to this style.
    pub fn apply(self, name: &str) -> String {
        match self {
            NameStyle::CamelCase => to_camel_case(name),
            NameStyle::SnakeCase => to_snake_case(name),
        }
    }
}

impl fmt::Display for NameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameStyle::CamelCase => write!(f, "camelCase"),
            NameStyle::SnakeCase => write!(f, "snake_case"),
        }
    }
}

impl FromStr for NameStyle {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "camelCase" => Ok(NameStyle::CamelCase),
            "snake_case" => Ok(NameStyle::SnakeCase),
            other => Err(SwatchError::Parse {
                message: format!("Unknown name style: {}", other),
                help: Some("Use 'camelCase' or 'snake_case'".to_string()),
            }),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    /// Non-ASCII, non-alphanumeric, e.g. the combining dot that lowercasing
    /// `İ` produces. Stays inside the current word.
    Mark,
    Separator,
}

fn classify(c: char) -> CharClass {
    if c.is_numeric() {
        CharClass::Digit
    } else if c.is_uppercase() {
        CharClass::Upper
    } else if c.is_alphabetic() {
        CharClass::Lower
    } else if c.is_ascii() || c.is_whitespace() || c.is_control() {
        CharClass::Separator
    } else {
        CharClass::Mark
    }
}

/// Split a name into words.
///
/// ASCII punctuation, whitespace and control characters separate words and
/// are dropped. Inside a run of letters and digits a new word starts at an
/// uppercase letter that follows a lowercase letter or digit, and at a digit
/// that follows a letter. Digit runs stay together. Other characters, such as
/// combining marks, attach to the word they appear in.
pub fn tokenize(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<CharClass> = None;

    for c in name.chars() {
        let class = classify(c);
        match class {
            CharClass::Separator => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
                prev = None;
                continue;
            }
            CharClass::Mark => {
                current.push(c);
                continue;
            }
            _ => {}
        }

        let boundary = matches!(
            (prev, class),
            (Some(CharClass::Lower | CharClass::Digit), CharClass::Upper)
                | (Some(CharClass::Lower | CharClass::Upper), CharClass::Digit)
        );
        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        current.push(c);
        prev = Some(class);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Uppercase the first character and lowercase the rest. A first character
/// whose uppercase form is more than one character (`ß` -> `SS`) stays
/// lowercase, since the expansion would read back as a separate word.
fn titlecase(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let mut out: String = match (upper.next(), upper.next()) {
        (Some(single), None) => single.to_string(),
        _ => first.to_lowercase().collect(),
    };
    out.extend(chars.flat_map(char::to_lowercase));
    out
}

/// `background_primary` -> `backgroundPrimary`
pub fn to_camel_case(name: &str) -> String {
    tokenize(name)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                word.to_lowercase()
            } else {
                titlecase(word)
            }
        })
        .collect()
}

/// `backgroundPrimary` -> `background_primary`
pub fn to_snake_case(name: &str) -> String {
    tokenize(name)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}
