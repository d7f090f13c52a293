use crate::*;

/// A validated experiment: its parameters, the pristine base graph of
/// required transitions, and the catch connections each round receives.
///
/// The base graph is never mutated. Every round augments a fresh copy,
/// so one `Experiment` can serve any number of sequence requests.
#[derive(Debug, Clone)]
pub struct Experiment {
    parameters: Parameters,
    base: Multigraph,
    catches: usize,
}

impl TryFrom<Parameters> for Experiment {
    type Error = EulerError;
    fn try_from(parameters: Parameters) -> Result<Self, Self::Error> {
        parameters.validate()?;
        let catches = parameters.catches();
        let base = parameters.mode().build(
            parameters.stimuli,
            parameters.pair_repeats,
            parameters.stim_repeat,
        );
        base.validate()?;
        log::debug!(
            "experiment ready: {} stimuli, {} transitions, {} catch connections",
            parameters.stimuli,
            base.m(),
            catches
        );
        Ok(Self {
            parameters,
            base,
            catches,
        })
    }
}

impl Experiment {
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
    pub fn base(&self) -> &Multigraph {
        &self.base
    }
    pub fn catches(&self) -> usize {
        self.catches
    }
    pub fn mode(&self) -> Mode {
        self.parameters.mode()
    }

    /// Base vertex a sequence starting with `start` begins at. Triplet
    /// mode has several pairs headed by the same stimulus; one is drawn
    /// uniformly. Without a start, the stimulus itself is drawn uniformly.
    pub fn resolve(
        &self,
        start: Option<Stimulus>,
        rng: &mut impl Chance,
    ) -> Result<VertexId, EulerError> {
        let stimulus = match start {
            Some(Stimulus::Trial(n)) if n < self.parameters.stimuli => Stimulus::Trial(n),
            Some(s) => {
                return Err(EulerError::InvalidConfiguration(format!(
                    "start {} is not one of {} stimuli",
                    s, self.parameters.stimuli
                )));
            }
            None => Stimulus::Trial(rng.index(self.parameters.stimuli)),
        };
        rng.choose(&self.base.headed(stimulus))
            .copied()
            .ok_or_else(|| {
                EulerError::GraphInvariantViolation(format!("no vertex starts with {}", stimulus))
            })
    }
}
