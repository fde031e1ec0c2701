use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::topology::{Dimensions, Position};

/// Decides the initial state of a cell. Called exactly once per cell while a
/// world is built; the return value is the cell's starting `alive` flag.
pub trait Seed {
    fn seed(&mut self, position: Position, dimensions: Dimensions) -> bool;
}

impl<F> Seed for F
where
    F: FnMut(Position, Dimensions) -> bool,
{
    fn seed(&mut self, position: Position, dimensions: Dimensions) -> bool {
        self(position, dimensions)
    }
}

/// Built-in seeding strategies.
#[derive(Debug, Clone)]
pub enum Seeder {
    /// Each cell alive with probability 1/2.
    Random(StdRng),
    /// Each cell draws from its own generator, seeded by a hash of its
    /// position and the salt. The same salt always yields the same grid.
    PositionHash { salt: u64 },
    /// Alive iff `x * y` is a Fibonacci number.
    Fibonacci,
    /// Alive iff the position is in the set.
    Points(HashSet<Position>),
}

impl Seeder {
    pub fn random() -> Seeder {
        Seeder::Random(StdRng::from_entropy())
    }

    /// Random, but reproducible from `seed`.
    pub fn seeded(seed: u64) -> Seeder {
        Seeder::Random(StdRng::seed_from_u64(seed))
    }

    pub fn position_hash(salt: u64) -> Seeder {
        Seeder::PositionHash { salt }
    }

    pub fn points(points: impl IntoIterator<Item = Position>) -> Seeder {
        Seeder::Points(points.into_iter().collect())
    }
}

impl Seed for Seeder {
    fn seed(&mut self, position: Position, _: Dimensions) -> bool {
        match self {
            Seeder::Random(rng) => rng.gen_bool(0.5),
            Seeder::PositionHash { salt } => {
                let mut hasher = DefaultHasher::new();
                (*salt, position.x, position.y).hash(&mut hasher);
                StdRng::seed_from_u64(hasher.finish()).gen_bool(0.5)
            }
            Seeder::Fibonacci => is_fibonacci(position.x * position.y),
            Seeder::Points(points) => points.contains(&position),
        }
    }
}

fn is_fibonacci(n: usize) -> bool {
    let (mut a, mut b) = (0usize, 1usize);
    while a < n {
        let Some(next) = a.checked_add(b) else {
            return b == n;
        };
        (a, b) = (b, next);
    }
    a == n
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(seeder: &mut impl Seed, dims: Dimensions) -> Vec<bool> {
        (0..dims.area())
            .map(|idx| seeder.seed(dims.position(idx), dims))
            .collect()
    }

    #[test]
    fn test_is_fibonacci() {
        let fibs: Vec<usize> = (0..100).filter(|&n| is_fibonacci(n)).collect();
        assert_eq!(fibs, vec![0, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89]);
        assert!(is_fibonacci(12_200_160_415_121_876_738));
        assert!(!is_fibonacci(usize::MAX));
    }

    #[test]
    fn test_fibonacci_seeder() {
        let dims = Dimensions::new(10, 10).unwrap();
        let mut seeder = Seeder::Fibonacci;
        // a zero coordinate makes the product 0
        assert!(seeder.seed(Position::new(0, 7), dims));
        assert!(seeder.seed(Position::new(4, 2), dims));
        assert!(!seeder.seed(Position::new(2, 2), dims));
        assert!(!seeder.seed(Position::new(3, 3), dims));
    }

    #[test]
    fn test_position_hash_is_reproducible() {
        let dims = Dimensions::new(16, 16).unwrap();
        let first = sample(&mut Seeder::position_hash(7), dims);
        let second = sample(&mut Seeder::position_hash(7), dims);
        let other = sample(&mut Seeder::position_hash(8), dims);
        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let dims = Dimensions::new(16, 16).unwrap();
        let first = sample(&mut Seeder::seeded(42), dims);
        let second = sample(&mut Seeder::seeded(42), dims);
        assert_eq!(first, second);
        assert!(first.iter().any(|&alive| alive));
        assert!(first.iter().any(|&alive| !alive));
    }

    #[test]
    fn test_points() {
        let dims = Dimensions::new(4, 4).unwrap();
        let mut seeder = Seeder::points([Position::new(1, 2)]);
        let alive = sample(&mut seeder, dims);
        assert_eq!(alive.iter().filter(|&&a| a).count(), 1);
        assert!(alive[dims.index(Position::new(1, 2))]);
    }

    #[test]
    fn test_closure_seeder() {
        let dims = Dimensions::new(3, 2).unwrap();
        let mut calls = 0;
        let alive = sample(
            &mut |p: Position, _: Dimensions| {
                calls += 1;
                p.x == p.y
            },
            dims,
        );
        assert_eq!(alive, vec![true, false, false, false, true, false]);
        assert_eq!(calls, 6);
    }
}
