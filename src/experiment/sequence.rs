use crate::*;
use std::collections::BTreeMap;

/// The emitted trial sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
#[serde(transparent)]
pub struct Sequence(Vec<Stimulus>);

impl Sequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Stimulus> {
        self.0.iter()
    }
    pub fn stimuli(&self) -> &[Stimulus] {
        &self.0
    }
    /// occurrences of one stimulus
    pub fn count(&self, stimulus: Stimulus) -> usize {
        self.0.iter().filter(|&&s| s == stimulus).count()
    }
    /// multiset of adjacent ordered pairs
    pub fn transitions(&self) -> BTreeMap<(Stimulus, Stimulus), usize> {
        let mut counts = BTreeMap::new();
        for w in self.0.windows(2) {
            *counts.entry((w[0], w[1])).or_insert(0) += 1;
        }
        counts
    }
    /// multiset of adjacent ordered triplets
    pub fn triplets(&self) -> BTreeMap<(Stimulus, Stimulus, Stimulus), usize> {
        let mut counts = BTreeMap::new();
        for w in self.0.windows(3) {
            *counts.entry((w[0], w[1], w[2])).or_insert(0) += 1;
        }
        counts
    }
}

impl From<Vec<Stimulus>> for Sequence {
    fn from(stimuli: Vec<Stimulus>) -> Self {
        Self(stimuli)
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels = self.0.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        write!(f, "{}", labels.join(" "))
    }
}

impl Experiment {
    /// Sample a sequence of `seq_repeats` stitched rounds.
    ///
    /// Each round covers every required transition exactly `pair_repeats`
    /// times. Rounds are closed walks, so round `k + 1` starts where round
    /// `k` ended and its duplicated first vertex is dropped. Each vertex
    /// contributes its first label; the final vertex contributes all of
    /// its labels, which completes the last pair in triplet mode.
    pub fn sequence(
        &self,
        start: Option<Stimulus>,
        rng: &mut impl Chance,
    ) -> Result<Sequence, EulerError> {
        let mut root = self.resolve(start, rng)?;
        let mut stimuli = Vec::new();
        let mut last = None;
        for round in 0..self.parameters().seq_repeats {
            let (graph, tour) = self.round(root, rng)?;
            let skip = if round == 0 { 0 } else { 1 };
            stimuli.extend(
                tour.vertices()[skip..]
                    .iter()
                    .map(|&v| graph.vertex(v).head()),
            );
            root = tour.last();
            last = Some(graph);
            log::debug!("round {} walked {} vertices", round, tour.len());
        }
        if let Some(graph) = last {
            stimuli.extend(graph.vertex(root).labels()[1..].iter().copied());
        }
        Ok(Sequence::from(stimuli))
    }

    /// One independent Eulerian circuit through a freshly augmented graph.
    pub fn round(
        &self,
        root: VertexId,
        rng: &mut impl Chance,
    ) -> Result<(Multigraph, Tour), EulerError> {
        let graph = self.base().augment(self.catches(), rng);
        graph.validate()?;
        log::trace!("augmented graph\n{}", graph);
        let tree = Arborescence::sample(&graph, root, rng)?;
        let schedule = Schedule::shuffle(&graph, &tree, rng);
        let tour = Tour::extract(&graph, &schedule, root)?;
        Ok((graph, tour))
    }
}
