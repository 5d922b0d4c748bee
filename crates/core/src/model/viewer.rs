/// Who is looking at the report.
///
/// Staff bypass every visibility suppression. The optional timezone and
/// language are never interpreted here; they ride along on due-date render
/// requests for the external date renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewerContext {
    pub is_staff: bool,
    pub timezone: Option<String>,
    pub language: Option<String>,
}

impl ViewerContext {
    /// A regular student viewer.
    #[must_use]
    pub fn student() -> Self {
        Self::default()
    }

    /// A staff viewer, who sees scores regardless of visibility policy.
    #[must_use]
    pub fn staff() -> Self {
        Self {
            is_staff: true,
            ..Self::default()
        }
    }

    /// Sets the timezone handed to the external date renderer.
    #[must_use]
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    /// Sets the language handed to the external date renderer.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}
