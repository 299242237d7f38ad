//! Type definitions for the number pattern engine
//!
//! This module defines the locale symbols, the decomposed format pattern and the
//! options that drive formatting and parsing.

/// Decimal, grouping and sign characters used by one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocaleSymbols {
    /// Separator between integer and fractional digits
    pub decimal_separator: char,
    /// Separator inserted between digit groups
    pub group_separator: char,
    /// Sign rendered in front of negative values
    pub negative_sign: char,
}

impl LocaleSymbols {
    pub const fn new(decimal_separator: char, group_separator: char, negative_sign: char) -> Self {
        Self {
            decimal_separator,
            group_separator,
            negative_sign,
        }
    }
}

impl Default for LocaleSymbols {
    fn default() -> Self {
        Self::new('.', ',', '-')
    }
}

/// A single placeholder inside the digit mask of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskToken {
    /// Digit placeholder (0) that always renders, zero-padded
    DigitOrZero,
    /// Digit placeholder (#) that hides insignificant zeros
    DigitIfNeeded,
    /// Grouping separator position (,)
    ThousandsSeparator,
    /// Any other character found between the first and last pattern character
    Literal(char),
}

/// A pattern string split into literal text and digit masks
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormatPattern {
    /// Literal text before the mask
    pub prefix: String,
    /// Literal text after the mask
    pub suffix: String,
    /// Pattern started with `-`: the sign goes in front of the prefix
    pub negative_in_front: bool,
    /// Mask segment before the decimal point
    pub integer_mask: Vec<MaskToken>,
    /// Mask segment after the decimal point, `None` when the pattern has no `.`
    pub fraction_mask: Option<Vec<MaskToken>>,
    /// A `^` marker was present
    pub scale_enabled: bool,
}

impl FormatPattern {
    /// True when the suffix is exactly `%`
    pub fn is_percent(&self) -> bool {
        self.suffix == "%"
    }

    /// Number of digits between the last grouping separator and the end of the integer mask.
    /// `None` means the integer portion is never grouped.
    pub fn group_width(&self) -> Option<usize> {
        self.integer_mask
            .iter()
            .rposition(|t| *t == MaskToken::ThousandsSeparator)
            .map(|idx| self.integer_mask.len() - idx - 1)
    }

    /// Number of fraction placeholders, zero when there is no fraction mask
    pub fn fraction_len(&self) -> usize {
        self.fraction_mask.as_ref().map_or(0, Vec::len)
    }
}

/// Options controlling how a value is formatted or a display string is parsed
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    /// Pattern string, e.g. `#,###.00`
    pub format: String,
    /// Locale code, matched case-insensitively
    pub locale: String,
    /// Emit the decimal separator even when no fraction digit is rendered
    pub decimal_separator_always_shown: bool,
    /// Format NaN as zero instead of returning `None`
    pub nan_force_zero: bool,
    /// Round the fraction to the mask precision; truncate when false
    pub round: bool,
    /// Divide by powers of 1000 and append a scale label. Also enabled by `^` in the pattern.
    pub scale: bool,
    /// Scale labels indexed by power of 1000
    pub scale_names: Vec<String>,
    /// Put the scale label where the decimal separator would be
    pub use_scale_as_decimal_separator: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            format: "#,###.00".to_string(),
            locale: "us".to_string(),
            decimal_separator_always_shown: false,
            nan_force_zero: true,
            round: true,
            scale: false,
            scale_names: ["", "K", "M", "B", "T"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            use_scale_as_decimal_separator: false,
        }
    }
}

impl FormatOptions {
    pub fn new(format: impl Into<String>) -> Self {
        Self::default().with_format(format)
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_decimal_separator_always_shown(mut self, shown: bool) -> Self {
        self.decimal_separator_always_shown = shown;
        self
    }

    pub fn with_nan_force_zero(mut self, force: bool) -> Self {
        self.nan_force_zero = force;
        self
    }

    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    pub fn with_scale(mut self, scale: bool) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_scale_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scale_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_scale_as_decimal_separator(mut self, enabled: bool) -> Self {
        self.use_scale_as_decimal_separator = enabled;
        self
    }
}
