/// Candle span of a series (one row = one day/week/month)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CandleSpan {
    /// Daily candles
    Daily,
    /// Weekly candles
    Weekly,
    /// Monthly candles
    Monthly,
}

/// Error parsing a candle span string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseCandleSpanError;

impl std::fmt::Display for ParseCandleSpanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid candle span string")
    }
}

impl std::error::Error for ParseCandleSpanError {}

impl std::str::FromStr for CandleSpan {
    type Err = ParseCandleSpanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DAILY" => Ok(CandleSpan::Daily),
            "WEEKLY" => Ok(CandleSpan::Weekly),
            "MONTHLY" => Ok(CandleSpan::Monthly),
            _ => Err(ParseCandleSpanError),
        }
    }
}

impl CandleSpan {
    /// Number of observations per trading year.
    #[must_use]
    pub fn periods_per_year(&self) -> f64 {
        match self {
            CandleSpan::Daily => 252.0,
            CandleSpan::Weekly => 52.0,
            CandleSpan::Monthly => 12.0,
        }
    }

    /// Trading years covered by `days` calendar days of this span.
    ///
    /// Daily rows count as trading days (252/year); weekly rows are scaled
    /// down by the 5-day week, monthly rows by a 20-day month.
    #[must_use]
    pub fn trading_years(&self, days: f64) -> f64 {
        match self {
            CandleSpan::Daily => days / 252.0,
            CandleSpan::Weekly => (days / 5.0) / 52.0,
            CandleSpan::Monthly => (days / 20.0) / 12.0,
        }
    }

    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CandleSpan::Daily => "DAILY",
            CandleSpan::Weekly => "WEEKLY",
            CandleSpan::Monthly => "MONTHLY",
        }
    }
}
