use chrono::{Locale, TimeZone as _, Utc};

/// A locale tag that [`chrono`] has no data for.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown locale: {0:?}")]
pub struct UnknownLocale(pub String);

/// Parse a locale tag like `"en-US"`, `"fr_FR"` or `"de_DE.UTF-8"`.
///
/// # Errors
/// If the tag does not name a locale known to [`chrono`].
pub fn parse_locale(tag: &str) -> Result<Locale, UnknownLocale> {
    let without_encoding = tag.split(['.', '@']).next().unwrap_or_default();
    let normalized = without_encoding.trim().replace('-', "_");
    Locale::try_from(normalized.as_str()).map_err(|_| UnknownLocale(tag.to_owned()))
}

/// Month names in one language.
#[derive(Clone, Copy, Debug)]
pub struct MonthNames {
    locale: Locale,
}

impl Default for MonthNames {
    fn default() -> Self {
        Self::new(Locale::en_US)
    }
}

impl MonthNames {
    #[inline]
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    #[inline]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The long name of `month` (1-12), e.g. `"March"`.
    ///
    /// `None` for months outside `1..=12`.
    pub fn long(&self, month: u32) -> Option<String> {
        let date = Utc.with_ymd_and_hms(2000, month, 1, 0, 0, 0).single()?;
        Some(date.format_localized("%B", self.locale).to_string())
    }
}
