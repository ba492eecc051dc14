//! Seasonal transmissibility schedule
//!
//! A periodic, two-phase piecewise-constant rate function of time, together
//! with its running integral and the integral's exact inverse. Within each
//! period of length `t2` the rate is `lambda` up to the phase boundary `t1`
//! and `lambda + d_lambda` afterwards.
//!
//! The integral and its inverse are closed-form: the per-period cumulative
//! values at the phase boundaries are computed once at construction, and any
//! query reduces to a periodic decomposition plus linear extrapolation in the
//! active phase. There is no numerical integration and no drift, which makes
//! the pair usable for time-rescaled (non-homogeneous) event sampling.
//!
//! # Example
//!
//! ```
//! use sis_simulator_core_rs::TransmissibilitySchedule;
//!
//! let schedule = TransmissibilitySchedule::new(10.0, 20.0, 2.0, 6.0).unwrap();
//! assert_eq!(schedule.evaluate(5.0), 2.0);   // first phase
//! assert_eq!(schedule.evaluate(15.0), 8.0);  // second phase
//! assert_eq!(schedule.evaluate_integral(20.0), 100.0); // one full period
//! ```

use std::io;

use thiserror::Error;

/// Errors raised when constructing a schedule from invalid parameters
#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("phase boundary must be positive, got t1 = {0}")]
    NonPositivePhase(f64),

    #[error("period must exceed the phase boundary: t1 = {t1}, t2 = {t2}")]
    PeriodNotAfterPhase { t1: f64, t2: f64 },

    #[error("base transmissibility must be non-negative, got lambda = {0}")]
    NegativeBaseRate(f64),

    #[error("second-phase transmissibility is negative: lambda = {lambda}, d_lambda = {d_lambda}")]
    NegativeSecondPhaseRate { lambda: f64, d_lambda: f64 },
}

/// Periodic two-phase transmissibility rate function
///
/// Immutable after construction. The cached integral bounds `l_t1` and `l_t2`
/// are derived deterministically from the four input parameters and never
/// change independently.
#[derive(Debug, Clone, PartialEq)]
pub struct TransmissibilitySchedule {
    /// Phase boundary within a period
    t1: f64,
    /// Period length
    t2: f64,
    /// Base rate during the first phase
    lambda: f64,
    /// Rate increment applied during the second phase
    d_lambda: f64,
    /// Integral of the rate from 0 to `t1`
    l_t1: f64,
    /// Integral of the rate over one full period
    l_t2: f64,
}

impl TransmissibilitySchedule {
    /// Build a schedule from its four scalar parameters
    ///
    /// Requires `0 < t1 < t2`, `lambda >= 0`, and a non-negative net rate in
    /// the second phase (`lambda + d_lambda >= 0`). `d_lambda` itself may be
    /// zero or negative.
    ///
    /// # Example
    /// ```
    /// use sis_simulator_core_rs::TransmissibilitySchedule;
    ///
    /// let schedule = TransmissibilitySchedule::new(10.0, 20.0, 2.0, 0.0).unwrap();
    /// assert_eq!(schedule.period(), 20.0);
    /// ```
    pub fn new(t1: f64, t2: f64, lambda: f64, d_lambda: f64) -> Result<Self, ScheduleError> {
        if t1 <= 0.0 {
            return Err(ScheduleError::NonPositivePhase(t1));
        }
        if t2 <= t1 {
            return Err(ScheduleError::PeriodNotAfterPhase { t1, t2 });
        }
        if lambda < 0.0 {
            return Err(ScheduleError::NegativeBaseRate(lambda));
        }
        if lambda + d_lambda < 0.0 {
            return Err(ScheduleError::NegativeSecondPhaseRate { lambda, d_lambda });
        }

        let l_t1 = lambda * t1;
        let l_t2 = l_t1 + (lambda + d_lambda) * (t2 - t1);

        Ok(Self {
            t1,
            t2,
            lambda,
            d_lambda,
            l_t1,
            l_t2,
        })
    }

    /// Instantaneous rate at time `t >= 0`
    pub fn evaluate(&self, t: f64) -> f64 {
        let dt = t - (t / self.t2).floor() * self.t2;
        if dt < self.t1 {
            self.lambda
        } else {
            self.lambda + self.d_lambda
        }
    }

    /// Running integral of the rate from 0 to `t`
    ///
    /// Exact closed form: whole periods contribute `l_t2` each, the remainder
    /// extrapolates linearly within the active phase.
    pub fn evaluate_integral(&self, t: f64) -> f64 {
        let periods = (t / self.t2).floor();
        let dt = t - periods * self.t2;
        if dt < self.t1 {
            periods * self.l_t2 + self.lambda * dt
        } else {
            periods * self.l_t2 + self.l_t1 + (self.lambda + self.d_lambda) * (dt - self.t1)
        }
    }

    /// Inverse of [`evaluate_integral`](Self::evaluate_integral)
    ///
    /// Given a cumulative value `l >= 0`, returns the unique `t >= 0` with
    /// `evaluate_integral(t) == l`, by periodic decomposition against the
    /// per-period total and linear inversion within the active phase.
    pub fn evaluate_integral_inverse(&self, l: f64) -> f64 {
        let periods = (l / self.l_t2).floor();
        let dl = l - periods * self.l_t2;
        if dl < self.l_t1 {
            periods * self.t2 + dl / self.lambda
        } else {
            periods * self.t2 + self.t1 + (dl - self.l_t1) / (self.lambda + self.d_lambda)
        }
    }

    /// Phase boundary within a period
    pub fn phase_boundary(&self) -> f64 {
        self.t1
    }

    /// Period length
    pub fn period(&self) -> f64 {
        self.t2
    }

    /// Base rate during the first phase
    pub fn base_rate(&self) -> f64 {
        self.lambda
    }

    /// Rate increment applied during the second phase
    pub fn rate_increment(&self) -> f64 {
        self.d_lambda
    }

    /// Cached integral value at the phase boundary
    pub fn integral_at_phase_boundary(&self) -> f64 {
        self.l_t1
    }

    /// Cached integral value over one full period
    pub fn integral_per_period(&self) -> f64 {
        self.l_t2
    }

    /// Write a TSV trace of the rate and its integral to `writer`
    ///
    /// Emits a `t\tl\tL` header followed by one row per sample point from 0
    /// up to (excluding) `t_max` in increments of `step`.
    ///
    /// # Example
    /// ```
    /// use sis_simulator_core_rs::TransmissibilitySchedule;
    ///
    /// let schedule = TransmissibilitySchedule::new(10.0, 20.0, 2.0, 0.0).unwrap();
    /// let mut out = Vec::new();
    /// schedule.write_trace(&mut out, 1.0, 0.5).unwrap();
    /// let text = String::from_utf8(out).unwrap();
    /// assert!(text.starts_with("t\tl\tL\n"));
    /// ```
    pub fn write_trace<W: io::Write>(&self, writer: &mut W, t_max: f64, step: f64) -> io::Result<()> {
        writeln!(writer, "t\tl\tL")?;
        let mut t = 0.0;
        while t < t_max {
            writeln!(
                writer,
                "{:.3}\t{:.3}\t{:.3}",
                t,
                self.evaluate(t),
                self.evaluate_integral(t)
            )?;
            t += step;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_phase_boundary() {
        assert_eq!(
            TransmissibilitySchedule::new(0.0, 20.0, 2.0, 0.0),
            Err(ScheduleError::NonPositivePhase(0.0))
        );
        assert!(TransmissibilitySchedule::new(-1.0, 20.0, 2.0, 0.0).is_err());
    }

    #[test]
    fn test_rejects_period_not_after_phase() {
        assert_eq!(
            TransmissibilitySchedule::new(10.0, 10.0, 2.0, 0.0),
            Err(ScheduleError::PeriodNotAfterPhase { t1: 10.0, t2: 10.0 })
        );
        assert!(TransmissibilitySchedule::new(10.0, 5.0, 2.0, 0.0).is_err());
    }

    #[test]
    fn test_rejects_negative_rates() {
        assert!(TransmissibilitySchedule::new(10.0, 20.0, -2.0, 0.0).is_err());
        assert_eq!(
            TransmissibilitySchedule::new(10.0, 20.0, 2.0, -3.0),
            Err(ScheduleError::NegativeSecondPhaseRate {
                lambda: 2.0,
                d_lambda: -3.0
            })
        );
    }

    #[test]
    fn test_negative_increment_with_non_negative_net_rate_is_valid() {
        let schedule = TransmissibilitySchedule::new(10.0, 20.0, 2.0, -2.0).unwrap();
        assert_eq!(schedule.evaluate(15.0), 0.0);
    }

    #[test]
    fn test_cached_integral_bounds() {
        let schedule = TransmissibilitySchedule::new(10.0, 20.0, 2.0, 6.0).unwrap();
        assert_eq!(schedule.integral_at_phase_boundary(), 20.0);
        assert_eq!(schedule.integral_per_period(), 100.0);
    }

    #[test]
    fn test_evaluate_phases() {
        let schedule = TransmissibilitySchedule::new(10.0, 20.0, 2.0, 6.0).unwrap();
        assert_eq!(schedule.evaluate(0.0), 2.0);
        assert_eq!(schedule.evaluate(9.99), 2.0);
        assert_eq!(schedule.evaluate(10.0), 8.0);
        assert_eq!(schedule.evaluate(19.99), 8.0);
        // wraps into the next period
        assert_eq!(schedule.evaluate(20.0), 2.0);
        assert_eq!(schedule.evaluate(35.0), 8.0);
    }

    #[test]
    fn test_integral_within_first_period() {
        let schedule = TransmissibilitySchedule::new(10.0, 20.0, 2.0, 6.0).unwrap();
        assert_eq!(schedule.evaluate_integral(0.0), 0.0);
        assert_eq!(schedule.evaluate_integral(5.0), 10.0);
        assert_eq!(schedule.evaluate_integral(10.0), 20.0);
        assert_eq!(schedule.evaluate_integral(15.0), 60.0);
        assert_eq!(schedule.evaluate_integral(20.0), 100.0);
    }

    #[test]
    fn test_integral_across_periods() {
        let schedule = TransmissibilitySchedule::new(10.0, 20.0, 2.0, 6.0).unwrap();
        assert_eq!(schedule.evaluate_integral(25.0), 110.0);
        assert_eq!(schedule.evaluate_integral(40.0), 200.0);
    }

    #[test]
    fn test_integral_inverse_basics() {
        let schedule = TransmissibilitySchedule::new(10.0, 20.0, 2.0, 6.0).unwrap();
        assert_eq!(schedule.evaluate_integral_inverse(0.0), 0.0);
        assert_eq!(schedule.evaluate_integral_inverse(10.0), 5.0);
        assert_eq!(schedule.evaluate_integral_inverse(60.0), 15.0);
        assert_eq!(schedule.evaluate_integral_inverse(110.0), 25.0);
    }

    #[test]
    fn test_trace_format() {
        let schedule = TransmissibilitySchedule::new(10.0, 20.0, 2.0, 0.0).unwrap();
        let mut out = Vec::new();
        schedule.write_trace(&mut out, 0.03, 0.01).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "t\tl\tL");
        assert_eq!(lines[1], "0.000\t2.000\t0.000");
        assert_eq!(lines[2], "0.010\t2.000\t0.020");
    }
}
