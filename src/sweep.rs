//! Frequency sweeps and the wavelengths derived from them.

use std::fmt;

use log::info;

use crate::constants::wavelength_from_frequency;
use crate::errors::{positive, OpticsError};
use crate::math::{argmin, Scalar};
use crate::units::FrequencyUnit;

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Generates samples from `start` spaced by `step`, stopping short of `stop`.
#[must_use]
pub fn arange(start: Scalar, stop: Scalar, step: Scalar) -> Vec<Scalar> {
    let span = stop - start;
    if step.is_nan() || span.is_nan() || step <= 0.0 || span <= 0.0 {
        return Vec::new();
    }
    let n = (span / step).ceil() as usize;
    (0..n)
        .map(|i| start + step * i as Scalar)
        .take_while(|&x| x < stop)
        .collect()
}

/// Optional parameters from which a [`FrequencySweep`] is resolved.
///
/// Exactly one construction mode must be fully specified:
/// `start`/`stop`/`count`, `center`/`span`/`count`, `single`, or `values`.
/// Fields of a linear mode that is only partly given are rejected.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// First sample of a linear sweep.
    pub start: Option<Scalar>,
    /// Last sample of a linear sweep.
    pub stop: Option<Scalar>,
    /// Center of a linear sweep.
    pub center: Option<Scalar>,
    /// Full width of a linear sweep.
    pub span: Option<Scalar>,
    /// Number of samples for the linear modes.
    pub count: Option<usize>,
    /// A single frequency.
    pub single: Option<Scalar>,
    /// Explicit samples.
    pub values: Option<Vec<Scalar>>,
    /// Unit of every frequency above (e.g. `"GHz"`).
    pub units: String,
    /// Label used in summaries.
    pub comment: Option<String>,
    /// Log a summary after construction.
    pub verbose: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: None,
            stop: None,
            center: None,
            span: None,
            count: None,
            single: None,
            values: None,
            units: String::from("GHz"),
            comment: None,
            verbose: false,
        }
    }
}

impl SweepConfig {
    /// Start/stop mode.
    #[must_use]
    pub fn start_stop(mut self, start: Scalar, stop: Scalar, count: usize) -> Self {
        self.start = Some(start);
        self.stop = Some(stop);
        self.count = Some(count);
        self
    }

    /// Center/span mode.
    #[must_use]
    pub fn center_span(mut self, center: Scalar, span: Scalar, count: usize) -> Self {
        self.center = Some(center);
        self.span = Some(span);
        self.count = Some(count);
        self
    }

    /// Single-frequency mode.
    #[must_use]
    pub fn single(mut self, value: Scalar) -> Self {
        self.single = Some(value);
        self
    }

    /// Explicit-array mode.
    #[must_use]
    pub fn values(mut self, values: Vec<Scalar>) -> Self {
        self.values = Some(values);
        self
    }

    /// Sets the frequency unit.
    #[must_use]
    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    /// Sets the descriptive label.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Enables or disables the post-construction summary.
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn resolve(&self) -> Result<Vec<Scalar>, OpticsError> {
        let range = self.start.is_some() && self.stop.is_some() && self.count.is_some();
        let centered = self.center.is_some() && self.span.is_some() && self.count.is_some();
        if (self.start.is_some() || self.stop.is_some()) && !range {
            return Err(OpticsError::Configuration(String::from(
                "start/stop sweep needs start, stop and count",
            )));
        }
        if (self.center.is_some() || self.span.is_some()) && !centered {
            return Err(OpticsError::Configuration(String::from(
                "center/span sweep needs center, span and count",
            )));
        }
        if self.count.is_some() && !range && !centered {
            return Err(OpticsError::Configuration(String::from(
                "count only applies to start/stop or center/span sweeps",
            )));
        }

        let mut modes: Vec<Vec<Scalar>> = Vec::with_capacity(1);
        if let (Some(start), Some(stop), Some(count)) = (self.start, self.stop, self.count) {
            modes.push(linear_samples(start, stop, count)?);
        }
        if let (Some(center), Some(span), Some(count)) = (self.center, self.span, self.count) {
            modes.push(linear_samples(center - span / 2.0, center + span / 2.0, count)?);
        }
        if let Some(single) = self.single {
            modes.push(vec![single]);
        }
        if let Some(values) = &self.values {
            modes.push(values.clone());
        }
        match modes.len() {
            1 => Ok(modes.remove(0)),
            0 => Err(OpticsError::Configuration(String::from(
                "frequency sweep needs start/stop/count, center/span/count, single or values",
            ))),
            n => Err(OpticsError::Configuration(format!(
                "frequency sweep is ambiguous: {n} construction modes specified"
            ))),
        }
    }
}

fn linear_samples(start: Scalar, stop: Scalar, count: usize) -> Result<Vec<Scalar>, OpticsError> {
    if count == 0 {
        return Err(OpticsError::Configuration(String::from(
            "frequency sweep needs at least one sample",
        )));
    }
    Ok(linspace(start, stop, count))
}

/// Ordered frequency samples (Hz) with their free-space wavelengths (m).
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone)]
pub struct FrequencySweep {
    frequencies: Vec<Scalar>,
    wavelengths: Vec<Scalar>,
    center_index: usize,
    unit: FrequencyUnit,
    comment: Option<String>,
}

impl FrequencySweep {
    /// Resolves a sweep from a [`SweepConfig`].
    pub fn from_config(config: &SweepConfig) -> Result<Self, OpticsError> {
        let unit = FrequencyUnit::parse(&config.units)?;
        let samples = config.resolve()?;
        let sweep = Self::build(samples, unit, config.comment.clone())?;
        if config.verbose {
            info!("{sweep}");
        }
        Ok(sweep)
    }

    /// `count` uniformly spaced samples from `start` to `stop` inclusive.
    pub fn linear(
        start: Scalar,
        stop: Scalar,
        count: usize,
        unit: &str,
    ) -> Result<Self, OpticsError> {
        Self::from_config(&SweepConfig::default().start_stop(start, stop, count).units(unit))
    }

    /// `count` uniformly spaced samples over `center ± span / 2`.
    pub fn centered(
        center: Scalar,
        span: Scalar,
        count: usize,
        unit: &str,
    ) -> Result<Self, OpticsError> {
        Self::from_config(&SweepConfig::default().center_span(center, span, count).units(unit))
    }

    /// A sweep of exactly one frequency.
    pub fn single(value: Scalar, unit: &str) -> Result<Self, OpticsError> {
        Self::from_config(&SweepConfig::default().single(value).units(unit))
    }

    /// A sweep over explicit samples.
    pub fn from_values(values: Vec<Scalar>, unit: &str) -> Result<Self, OpticsError> {
        Self::from_config(&SweepConfig::default().values(values).units(unit))
    }

    fn build(
        samples: Vec<Scalar>,
        unit: FrequencyUnit,
        comment: Option<String>,
    ) -> Result<Self, OpticsError> {
        if samples.is_empty() {
            return Err(OpticsError::Configuration(String::from(
                "frequency sweep needs at least one sample",
            )));
        }
        let frequencies = samples
            .into_iter()
            .map(|f| positive("frequency", unit.to_si(f)))
            .collect::<Result<Vec<_>, _>>()?;
        let wavelengths = frequencies.iter().copied().map(wavelength_from_frequency).collect();
        let center_index = frequencies.len() / 2;
        Ok(Self {
            frequencies,
            wavelengths,
            center_index,
            unit,
            comment,
        })
    }

    /// Frequency samples in hertz.
    #[must_use]
    pub fn frequencies(&self) -> &[Scalar] {
        &self.frequencies
    }

    /// Frequency samples converted to `unit`.
    pub fn frequencies_in(&self, unit: &str) -> Result<Vec<Scalar>, OpticsError> {
        let unit = FrequencyUnit::parse(unit)?;
        Ok(self.frequencies.iter().map(|&f| unit.from_si(f)).collect())
    }

    /// Free-space wavelengths in meters, aligned with [`Self::frequencies`].
    #[must_use]
    pub fn wavelengths(&self) -> &[Scalar] {
        &self.wavelengths
    }

    /// Index of the middle sample (`len / 2`).
    #[must_use]
    pub fn center_index(&self) -> usize {
        self.center_index
    }

    /// Frequency of the middle sample in hertz.
    #[must_use]
    pub fn center_frequency(&self) -> Scalar {
        self.frequencies[self.center_index]
    }

    /// Unit the sweep was specified in.
    #[must_use]
    pub fn unit(&self) -> FrequencyUnit {
        self.unit
    }

    /// Descriptive label, if any.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// Always false for a constructed sweep.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Index of the sample closest to `frequency` (given in `unit`).
    ///
    /// Ties resolve to the lowest index.
    pub fn index_of(&self, frequency: Scalar, unit: &str) -> Result<usize, OpticsError> {
        let target = FrequencyUnit::parse(unit)?.to_si(frequency);
        let distances: Vec<Scalar> = self.frequencies.iter().map(|f| (f - target).abs()).collect();
        Ok(argmin(&distances).unwrap_or(0))
    }
}

impl PartialEq for FrequencySweep {
    fn eq(&self, other: &Self) -> bool {
        self.frequencies == other.frequencies
    }
}

impl fmt::Display for FrequencySweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.unit.from_si(self.frequencies[0]);
        let stop = self.unit.from_si(self.frequencies[self.frequencies.len() - 1]);
        match &self.comment {
            Some(comment) => writeln!(f, "Frequency sweep: {comment}")?,
            None => writeln!(f, "Frequency sweep:")?,
        }
        write!(
            f,
            "\tf = {start:.1} to {stop:.1} {}, {} pts",
            self.unit,
            self.frequencies.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::SPEED_OF_LIGHT;

    #[test]
    fn linspace_basic() {
        let v = linspace(0.0, 1.0, 5);
        assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert!(linspace(3.0, 7.0, 0).is_empty());
    }

    #[test]
    fn arange_stops_short_of_end() {
        assert_eq!(arange(0.0, 1.0, 0.25), vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(arange(0.0, 0.9, 0.5), vec![0.0, 0.5]);
        assert!(arange(0.0, 0.0, 0.1).is_empty());
        assert!(arange(0.0, 1.0, 0.0).is_empty());
    }

    #[test]
    fn linear_sweep_includes_both_ends() {
        let sweep = FrequencySweep::linear(200.0, 300.0, 101, "GHz").unwrap();
        assert_eq!(sweep.len(), 101);
        assert_relative_eq!(sweep.frequencies()[0], 200e9);
        assert_relative_eq!(sweep.frequencies()[100], 300e9);
        assert_eq!(sweep.center_index(), 50);
        assert_relative_eq!(sweep.center_frequency(), 250e9);
    }

    #[test]
    fn wavelengths_track_frequencies() {
        let sweep = FrequencySweep::from_values(vec![100.0, 200.0, 300.0], "ghz").unwrap();
        assert_eq!(sweep.wavelengths().len(), sweep.frequencies().len());
        for (f, w) in sweep.frequencies().iter().zip(sweep.wavelengths()) {
            assert_relative_eq!(*w, SPEED_OF_LIGHT / f);
        }
    }

    #[test]
    fn center_span_equals_start_stop() {
        let a = FrequencySweep::linear(200.0, 300.0, 101, "GHz").unwrap();
        let b = FrequencySweep::centered(250.0, 100.0, 101, "GHz").unwrap();
        assert_eq!(a, b);
        let c = FrequencySweep::linear(200.0, 300.0, 11, "GHz").unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn single_point_sweep() {
        let sweep = FrequencySweep::single(230.0, "GHz").unwrap();
        assert_eq!(sweep.len(), 1);
        assert_eq!(sweep.center_index(), 0);
        assert_relative_eq!(sweep.frequencies()[0], 230e9);
        let same = FrequencySweep::linear(230.0, 230.0, 1, "GHz").unwrap();
        assert_eq!(sweep, same);
    }

    #[test]
    fn config_requires_exactly_one_mode() {
        let none = FrequencySweep::from_config(&SweepConfig::default());
        assert!(matches!(none, Err(OpticsError::Configuration(_))));

        let partial = SweepConfig {
            start: Some(200.0),
            stop: Some(300.0),
            ..SweepConfig::default()
        };
        assert!(matches!(
            FrequencySweep::from_config(&partial),
            Err(OpticsError::Configuration(_))
        ));

        let both = SweepConfig::default().single(250.0).values(vec![1.0, 2.0]);
        assert!(matches!(
            FrequencySweep::from_config(&both),
            Err(OpticsError::Configuration(_))
        ));

        let zero = SweepConfig::default().start_stop(200.0, 300.0, 0);
        assert!(matches!(
            FrequencySweep::from_config(&zero),
            Err(OpticsError::Configuration(_))
        ));

        let empty = SweepConfig::default().values(Vec::new());
        assert!(matches!(
            FrequencySweep::from_config(&empty),
            Err(OpticsError::Configuration(_))
        ));
    }

    #[test]
    fn config_rejects_leftover_linear_fields() {
        let stray_center = SweepConfig {
            center: Some(1.0),
            ..SweepConfig::default().start_stop(1.0, 3.0, 3)
        };
        assert!(matches!(
            FrequencySweep::from_config(&stray_center),
            Err(OpticsError::Configuration(_))
        ));

        let stray_stop = SweepConfig {
            stop: Some(300.0),
            ..SweepConfig::default().center_span(250.0, 100.0, 11)
        };
        assert!(FrequencySweep::from_config(&stray_stop).is_err());

        let stray_count = SweepConfig {
            count: Some(5),
            ..SweepConfig::default().single(250.0)
        };
        assert!(FrequencySweep::from_config(&stray_count).is_err());

        // Range and center fields together are two complete modes.
        let both = SweepConfig::default()
            .start_stop(200.0, 300.0, 11)
            .center_span(250.0, 100.0, 11);
        assert!(matches!(
            FrequencySweep::from_config(&both),
            Err(OpticsError::Configuration(msg)) if msg.contains("ambiguous")
        ));
    }

    #[test]
    fn rejects_bad_units_and_frequencies() {
        assert!(matches!(
            FrequencySweep::single(1.0, "furlongs"),
            Err(OpticsError::InvalidUnit { .. })
        ));
        assert!(matches!(
            FrequencySweep::from_values(vec![100.0, 0.0], "GHz"),
            Err(OpticsError::InvalidParameter { name: "frequency", .. })
        ));
        assert!(FrequencySweep::linear(-10.0, 10.0, 3, "GHz").is_err());
    }

    #[test]
    fn index_of_finds_nearest_sample() {
        let sweep = FrequencySweep::centered(250.0, 100.0, 101, "GHz").unwrap();
        assert_eq!(sweep.index_of(250.0, "GHz").unwrap(), 50);
        assert_eq!(sweep.index_of(200.0, "GHz").unwrap(), 0);
        assert_eq!(sweep.index_of(0.3, "THz").unwrap(), 100);
        assert_eq!(sweep.index_of(231.2, "GHz").unwrap(), 31);
        assert_eq!(sweep.index_of(1.0, "Hz").unwrap(), 0);
        assert_eq!(sweep.index_of(1.0e6, "GHz").unwrap(), 100);
        assert!(sweep.index_of(250.0, "parsec").is_err());
    }

    #[test]
    fn index_of_breaks_ties_low() {
        let sweep = FrequencySweep::from_values(vec![1.0, 2.0, 3.0], "Hz").unwrap();
        assert_eq!(sweep.index_of(1.5, "Hz").unwrap(), 0);
        assert_eq!(sweep.index_of(2.5, "Hz").unwrap(), 1);
    }

    #[test]
    fn frequencies_in_other_units() {
        let sweep = FrequencySweep::single(250.0, "GHz").unwrap();
        assert_relative_eq!(sweep.frequencies_in("MHz").unwrap()[0], 250_000.0);
    }

    #[test]
    fn summary_mentions_range_and_label() {
        let config = SweepConfig::default()
            .start_stop(200.0, 300.0, 11)
            .comment("band 6");
        let sweep = FrequencySweep::from_config(&config).unwrap();
        let text = sweep.to_string();
        assert!(text.contains("band 6"));
        assert!(text.contains("200.0 to 300.0 GHz, 11 pts"));
    }
}
