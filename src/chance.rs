use rand::seq::IndexedRandom;
use rand::seq::SliceRandom;

/// Every random draw in the pipeline goes through this trait.
///
/// Blanket-implemented for any [`rand::Rng`], so a seeded
/// `SmallRng` makes a whole sampling run reproducible while
/// `rand::rng()` serves production use.
pub trait Chance {
    /// Uniform index in `0..n`. Requires `n > 0`.
    fn index(&mut self, n: usize) -> usize;
    /// Uniform permutation in place.
    fn shuffle<T>(&mut self, items: &mut [T]);
    /// Uniform element, or `None` for an empty slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>;
}

impl<R> Chance for R
where
    R: rand::Rng + ?Sized,
{
    fn index(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(self)
    }
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn index_within_bounds() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        assert!((0..1000).map(|_| rng.index(7)).all(|i| i < 7));
    }

    #[test]
    fn index_covers_range() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let mut seen = [false; 5];
        (0..1000).for_each(|_| seen[rng.index(5)] = true);
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn shuffle_is_permutation() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let mut items = (0..32).collect::<Vec<usize>>();
        Chance::shuffle(rng, &mut items);
        let mut sorted = items.clone();
        sorted.sort();
        assert!(sorted == (0..32).collect::<Vec<_>>());
    }

    #[test]
    fn choose_empty_is_none() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let empty: [usize; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert!(rng.choose(&[9]) == Some(&9));
    }

    #[test]
    fn seeded_draws_reproduce() {
        let draw = |seed| {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            (0..16).map(|_| rng.index(100)).collect::<Vec<_>>()
        };
        assert!(draw(42) == draw(42));
    }
}
