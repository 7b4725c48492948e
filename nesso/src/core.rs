use chrono::{DateTime, Utc};

use nesso_core::{
    CorrelationParams, CorrelationResult, DataPoint, DayBoundary, EngineConfig, NessoError,
    align_daily, filter_lookback, lookback_cutoff,
};

use crate::methods;

const SECONDS_PER_DAY: i32 = 86_400;

/// Stateless correlation engine.
///
/// Holds only an immutable [`EngineConfig`]; every call is a pure computation
/// over its arguments. An `Engine` is cheap to clone and safe to share across
/// threads without synchronization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Engine {
    pub(crate) cfg: EngineConfig,
}

/// Builder for constructing an [`Engine`] with custom defaults.
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    cfg: EngineConfig,
}

impl EngineBuilder {
    /// Create a builder seeded with [`EngineConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration, e.g. one loaded from JSON.
    #[must_use]
    pub fn config(mut self, cfg: EngineConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Minimum samples each filtered series must carry when a request does
    /// not set `min_data_points`.
    #[must_use]
    pub const fn default_min_data_points(mut self, n: usize) -> Self {
        self.cfg.default_min_data_points = n;
        self
    }

    /// Lag bound for `crossCorrelation` when a request does not set `max_lag`.
    ///
    /// Zero is legal: the search degenerates to lag 0.
    #[must_use]
    pub const fn cross_correlation_max_lag(mut self, lag: u32) -> Self {
        self.cfg.cross_correlation_max_lag = lag;
        self
    }

    /// Lag bound for `leadLag` when a request does not set `max_lag`.
    #[must_use]
    pub const fn lead_lag_max_lag(mut self, lag: u32) -> Self {
        self.cfg.lead_lag_max_lag = lag;
        self
    }

    /// Calendar convention used to bucket timestamps into days.
    ///
    /// The default, [`DayBoundary::Utc`], buckets by the UTC date. A fixed
    /// offset or an IANA zone moves the midnight boundary, which changes which
    /// samples share a day near midnight.
    #[must_use]
    pub const fn day_boundary(mut self, boundary: DayBoundary) -> Self {
        self.cfg.day_boundary = boundary;
        self
    }

    /// Build the engine.
    ///
    /// # Errors
    /// Returns `InvalidArg` if a fixed-offset day boundary is not strictly
    /// within ±24 hours.
    pub fn build(self) -> Result<Engine, NessoError> {
        if let DayBoundary::FixedOffset { seconds } = self.cfg.day_boundary
            && seconds.unsigned_abs() >= SECONDS_PER_DAY.unsigned_abs()
        {
            return Err(NessoError::InvalidArg(format!(
                "day boundary offset {seconds}s must be strictly within ±{SECONDS_PER_DAY}s"
            )));
        }
        Ok(Engine { cfg: self.cfg })
    }
}

impl Engine {
    /// Engine with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a new `Engine`.
    ///
    /// ```
    /// use nesso::{DayBoundary, Engine};
    ///
    /// let engine = Engine::builder()
    ///     .default_min_data_points(10)
    ///     .lead_lag_max_lag(7)
    ///     .day_boundary(DayBoundary::FixedOffset { seconds: -5 * 3600 })
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(engine.config().lead_lag_max_lag, 7);
    /// ```
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    /// Correlate using the wall clock as the end of the lookback window.
    ///
    /// # Errors
    /// See [`Engine::correlate_at`].
    pub fn correlate(
        &self,
        events: &[DataPoint],
        stocks: &[DataPoint],
        params: &CorrelationParams,
    ) -> Result<CorrelationResult, NessoError> {
        self.correlate_at(events, stocks, params, Utc::now())
    }

    /// Correlate an event series against a market series, with `now` as the
    /// end of the lookback window.
    ///
    /// Steps, each of which may fail:
    /// 1. `lookback_days` must be positive (`InvalidArg`).
    /// 2. Both series are filtered to `timestamp >= now - lookback_days`.
    /// 3. Each filtered series must carry at least the effective
    ///    `min_data_points` samples (`InsufficientData`).
    /// 4. Every filtered value must be finite (`InvalidData`).
    /// 5. The series are aligned onto shared days; fewer than two aligned
    ///    days fails with `InsufficientData`.
    /// 6. The selected method runs over the aligned series.
    ///
    /// Identical arguments always produce identical results.
    ///
    /// # Errors
    /// Returns `InvalidArg`, `InsufficientData` or `InvalidData` as above.
    /// Errors are never downgraded to a low-confidence result.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "nesso::engine",
            name = "nesso::engine::correlate",
            skip(self, events, stocks, params),
            fields(
                method = %params.method,
                lookback_days = params.lookback_days,
                events = events.len(),
                stocks = stocks.len(),
            ),
        )
    )]
    pub fn correlate_at(
        &self,
        events: &[DataPoint],
        stocks: &[DataPoint],
        params: &CorrelationParams,
        now: DateTime<Utc>,
    ) -> Result<CorrelationResult, NessoError> {
        if params.lookback_days == 0 {
            return Err(rejected(NessoError::InvalidArg(
                "lookback_days must be at least 1".to_string(),
            )));
        }

        let cutoff = lookback_cutoff(now, params.lookback_days);
        let events = filter_lookback(events, cutoff);
        let stocks = filter_lookback(stocks, cutoff);

        let min = params.effective_min_data_points(&self.cfg);
        ensure_min_len("event series", events.len(), min)?;
        ensure_min_len("stock series", stocks.len(), min)?;
        ensure_finite("event series", &events)?;
        ensure_finite("stock series", &stocks)?;

        let aligned = align_daily(
            events.iter().copied(),
            stocks.iter().copied(),
            self.cfg.day_boundary,
        );

        methods::dispatch(
            &aligned,
            params.method,
            params.effective_max_lag(&self.cfg),
        )
        .map_err(rejected)
    }
}

fn ensure_min_len(what: &str, actual: usize, required: usize) -> Result<(), NessoError> {
    if actual < required {
        return Err(rejected(NessoError::insufficient_data(what, required, actual)));
    }
    Ok(())
}

fn ensure_finite(what: &str, points: &[&DataPoint]) -> Result<(), NessoError> {
    match points.iter().find(|p| !p.value.is_finite()) {
        Some(p) => Err(rejected(NessoError::InvalidData(format!(
            "{what} has non-finite value {} at {}",
            p.value, p.timestamp
        )))),
        None => Ok(()),
    }
}

fn rejected(err: NessoError) -> NessoError {
    #[cfg(feature = "tracing")]
    tracing::debug!(target: "nesso::engine", error = %err, "correlation request rejected");
    err
}
