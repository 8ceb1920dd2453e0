use nom::{
    bytes::complete::take_while,
    character::complete::satisfy,
    combinator::recognize,
    sequence::pair,
    IResult,
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// How private backing fields are told apart from their public counterparts.
///
/// A private name is an identifier decorated with leading and/or trailing
/// `private_marker` characters (`__order_items`). Stripping the decoration
/// gives the public name (`order_items`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConvention {
    pub private_marker: char,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {error}", .path.display())]
    Io {
        path: PathBuf,
        error: std::io::Error,
    },
    #[error("Invalid naming convention: {message}")]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },
    #[error("Private marker `{0}` must not be a letter, digit or whitespace")]
    InvalidMarker(char),
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            private_marker: '_',
        }
    }
}

impl NamingConvention {
    pub fn new(private_marker: char) -> Result<Self, ConfigError> {
        let convention = Self { private_marker };
        convention.validate()?;
        Ok(convention)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let convention: Self = toml::from_str(content).map_err(|error| ConfigError::Parse {
            path: None,
            message: error.to_string(),
        })?;
        convention.validate()?;
        Ok(convention)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|error| ConfigError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        Self::from_toml_str(&content).map_err(|error| match error {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let marker = self.private_marker;
        if marker.is_alphanumeric() || marker.is_whitespace() {
            return Err(ConfigError::InvalidMarker(marker));
        }
        Ok(())
    }

    pub fn is_public(&self, name: &str) -> bool {
        !name.starts_with(self.private_marker)
    }

    /// The public name a decorated private name maps to.
    ///
    /// `None` when `private_name` is not a decorated identifier or is made of
    /// markers only.
    pub fn public_name<'a>(&self, private_name: &'a str) -> Option<&'a str> {
        let marker = self.private_marker;
        let (rest, name) = decorated_identifier(marker, private_name).ok()?;
        if !rest.is_empty() {
            return None;
        }
        let public = name.trim_matches(marker);
        tracing::trace!(private = private_name, public, "naming: stripped decoration");
        match public.chars().next() {
            Some(first) if !first.is_numeric() => Some(public),
            _ => None,
        }
    }
}

fn decorated_identifier(marker: char, input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c: char| c.is_alphabetic() || c == '_' || c == marker),
        take_while(|c: char| c.is_alphanumeric() || c == '_' || c == marker),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn strips_leading_and_trailing_markers() {
        let convention = NamingConvention::default();
        assert_eq!(convention.public_name("__order_items"), Some("order_items"));
        assert_eq!(convention.public_name("_x_"), Some("x"));
        assert_eq!(convention.public_name("plain"), Some("plain"));
    }

    #[test]
    fn rejects_names_that_are_not_identifiers() {
        let convention = NamingConvention::default();
        assert_eq!(convention.public_name(""), None);
        assert_eq!(convention.public_name("___"), None);
        assert_eq!(convention.public_name("__1st"), None);
        assert_eq!(convention.public_name("__bad-name"), None);
        assert_eq!(convention.public_name("__order items"), None);
    }

    #[test]
    fn public_names_do_not_start_with_the_marker() {
        let convention = NamingConvention::default();
        assert!(convention.is_public("order_items"));
        assert!(!convention.is_public("_order_items"));
    }

    #[test]
    fn custom_marker_is_honoured() {
        let convention = NamingConvention::new('$').unwrap();
        assert_eq!(convention.public_name("$$items$"), Some("items"));
        assert_eq!(convention.public_name("$order_items"), Some("order_items"));
        assert_eq!(convention.public_name("$_order_items_$"), Some("_order_items_"));
        // Underscores are plain identifier characters under a custom marker.
        assert_eq!(convention.public_name("__items"), Some("__items"));
        assert_eq!(convention.public_name("$bad-name"), None);
        assert!(convention.is_public("_items"));
        assert!(matches!(
            NamingConvention::new('x'),
            Err(ConfigError::InvalidMarker('x'))
        ));
    }

    #[test]
    fn loads_from_toml() {
        let convention = NamingConvention::from_toml_str(r#"private_marker = "$""#).unwrap();
        assert_eq!(convention.private_marker, '$');
        assert_eq!(
            NamingConvention::from_toml_str("").unwrap(),
            NamingConvention::default()
        );
        assert!(matches!(
            NamingConvention::from_toml_str("private_marker = 3"),
            Err(ConfigError::Parse { path: None, .. })
        ));
    }

    #[test]
    fn load_reports_the_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("naming.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "private_marker = \"ab\"").unwrap();

        match NamingConvention::load(&path) {
            Err(ConfigError::Parse { path: Some(p), .. }) => assert_eq!(p, path),
            other => panic!("expected parse error, got {:?}", other),
        }

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            NamingConvention::load(&missing),
            Err(ConfigError::Io { .. })
        ));
    }
}
