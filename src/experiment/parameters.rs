use crate::*;

/// Experiment parameters as supplied by the caller.
///
/// Deserializes with defaults for any missing field, so a config file
/// only needs to name what differs from the default four-stimulus design.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Number of distinct stimuli.
    pub stimuli: usize,
    /// Target share of catch trials among all trials.
    pub catch_frequency: Frequency,
    /// Connect the catch stimulus to every stimulus equally often.
    pub catch_to_all: bool,
    /// Include same-stimulus transitions such as (1, 1).
    pub stim_repeat: bool,
    /// Times each transition occurs within one round.
    pub pair_repeats: usize,
    /// Independent rounds stitched into one sequence.
    pub seq_repeats: usize,
    /// Balance ordered triplets instead of ordered pairs.
    pub triplets: bool,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            stimuli: DEFAULT_STIMULI,
            catch_frequency: 0.,
            catch_to_all: false,
            stim_repeat: true,
            pair_repeats: 1,
            seq_repeats: 1,
            triplets: false,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<(), EulerError> {
        let fail = |s: String| Err(EulerError::InvalidConfiguration(s));
        if self.stimuli < 1 {
            return fail("stimuli must be at least 1".into());
        }
        if self.pair_repeats < 1 {
            return fail("pair_repeats must be at least 1".into());
        }
        if self.seq_repeats < 1 {
            return fail("seq_repeats must be at least 1".into());
        }
        if !(0. ..=MAX_CATCH_FREQUENCY).contains(&self.catch_frequency) {
            return fail(format!(
                "catch_frequency {} outside [0, {}]",
                self.catch_frequency, MAX_CATCH_FREQUENCY
            ));
        }
        if self.triplets && self.stimuli < 2 && !self.stim_repeat {
            return fail("triplets without stim_repeat need at least 2 stimuli".into());
        }
        Ok(())
    }

    pub fn mode(&self) -> Mode {
        if self.triplets {
            Mode::Triplet
        } else {
            Mode::Pairwise
        }
    }

    /// Catch frequency in effect: clamped to [0, 0.5], and zero in
    /// triplet mode where catch trials would break the triplet balance.
    pub fn frequency(&self) -> Frequency {
        match self.triplets {
            true => 0.,
            false if self.catch_frequency.is_nan() => 0.,
            false => self.catch_frequency.clamp(0., MAX_CATCH_FREQUENCY),
        }
    }

    /// Catch connections per round.
    ///
    /// With `catch_to_all` each stimulus gets one per pair repeat. Otherwise
    /// `floor(base / (1/f - 2))` per pair repeat, where `base` counts the
    /// trials of one unrepeated round. The denominator vanishes at
    /// f = 0.5 and is floored to 1 there.
    pub fn catches(&self) -> usize {
        let f = self.frequency();
        if self.triplets {
            0
        } else if self.catch_to_all {
            self.stimuli * self.pair_repeats
        } else if f > 0. {
            let loops = if self.stim_repeat { 0 } else { 1 };
            let base = self.stimuli * self.stimuli.saturating_sub(loops) + 1;
            let denominator = match 1. / f - 2. {
                d if d > 0. => d,
                _ => 1.,
            };
            (base as Frequency / denominator).floor() as usize * self.pair_repeats
        } else {
            0
        }
    }
}
