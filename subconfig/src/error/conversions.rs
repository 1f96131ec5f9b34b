//! Constructors and trait-based conversions for `ConfigError`.

use camino::Utf8Path;

use super::ConfigError;

impl ConfigError {
    /// Construct a [`ConfigError::File`] for `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use subconfig::ConfigError;
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    /// let err = ConfigError::file("exp.yaml", io);
    /// assert!(err.to_string().contains("exp.yaml"));
    /// ```
    #[must_use]
    pub fn file(
        path: impl AsRef<Utf8Path>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::File {
            path: path.as_ref().to_owned(),
            source: source.into(),
        }
    }

    /// Returns the field name carried by construction errors.
    ///
    /// File and serde errors do not identify a single field and yield
    /// `None`.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::RequiredFieldNull { field, .. }
            | Self::InvalidNestedType { field, .. }
            | Self::MissingField { field, .. }
            | Self::UnknownField { field, .. } => Some(field),
            _ => None,
        }
    }
}
