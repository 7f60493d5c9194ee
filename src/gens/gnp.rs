use rand_distr::Geometric;

use super::*;

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a node
    AvgDeg(f64),
}

/// `G(n,p)` graphs contain every possible edge of a graph with `n` nodes with probability `p`
/// independent from each other.
///
/// Candidate edges are numbered `u * n + v`; instead of flipping a coin per candidate, the
/// generator jumps over the failures with geometrically distributed step sizes. Undirected
/// generators only emit normalized edges `u <= v`.
#[derive(Debug, Copy, Clone)]
pub struct Gnp {
    n: NumNodes,
    p: GnpType,
    directed: bool,
    loops: bool,
}

impl Default for Gnp {
    fn default() -> Self {
        Self {
            n: 0,
            p: GnpType::NotSet,
            directed: false,
            loops: true,
        }
    }
}

impl Gnp {
    /// Creates a new empty (undirected, loops allowed) `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly.
    /// ** Panics if `p` is not in `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!((0.0..=1.0).contains(&prob), "{prob} is not a probability");
        self.p = GnpType::Prob(prob);
        self
    }

    /// Emit edges `(u, v)` and `(v, u)` independently
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Whether self-loops may be emitted
    pub fn loops(mut self, loops: bool) -> Self {
        self.loops = loops;
        self
    }

    fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probability of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                let p = if self.n == 0 { 0.0 } else { d / self.n as f64 };
                assert!(
                    (0.0..=1.0).contains(&p),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        }
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/n`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl GraphGenerator for Gnp {
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng,
    {
        let p = self.probability();
        let n = self.n as u64;
        let max_value = n * n;

        let distr = if p > 0.0 {
            match Geometric::new(p) {
                Ok(distr) => Some(distr),
                Err(err) => panic!("cannot sample jumps for p = {p}: {err}"),
            }
        } else {
            None
        };

        let mut next = 0u64;
        let jumps = std::iter::from_fn(move || {
            let distr = distr?;
            if next >= max_value {
                return None;
            }

            let skip: u64 = rng.sample(distr);
            match next.checked_add(skip) {
                Some(x) if x < max_value => {
                    next = x + 1;
                    Some(x)
                }
                _ => {
                    next = max_value;
                    None
                }
            }
        });

        let (directed, loops) = (self.directed, self.loops);
        jumps
            .map(move |x| Edge((x / n) as Node, (x % n) as Node))
            .filter(move |e| (directed || e.is_normalized()) && (loops || !e.is_loop()))
    }
}
