use crate::{DiscreteLog, MAX_SEARCH_STEPS};
use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::traits::Identity;
use liftcrypt_traits::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Debug, Formatter};

/// Largest number of baby steps a table may hold.
pub const MAX_TABLE_SIZE: u64 = 1 << 24;

/// Shanks' baby-step giant-step algorithm over the message space `[0, bound)`.
///
/// The table stores $j \cdot G$ for all $0 \leq j < s$, where $s$ is the step size. To solve
/// $P = m \cdot G$, the solver looks up $P - i s \cdot G$ for $i = 0, 1, \ldots$ until a hit
/// $j$ gives $m = i s + j$. With $s = \lceil \sqrt{\text{bound}} \rceil$ both the memory and the
/// decoding time scale with the square root of the bound.
#[derive(Clone)]
pub struct BabyStepGiantStep {
    bound: u64,
    step: u64,
    giant_steps: u64,
    giant_stride: RistrettoPoint,
    table: HashMap<[u8; 32], u64>,
}

impl BabyStepGiantStep {
    /// Builds a table with a step size of $\lceil \sqrt{\text{bound}} \rceil$.
    pub fn new(bound: u64) -> Result<Self> {
        Self::with_step(bound, ceil_sqrt(bound).max(1))
    }

    /// Builds a table with `step` baby steps. Larger steps use more memory but need fewer giant
    /// steps to decode.
    pub fn with_step(bound: u64, step: u64) -> Result<Self> {
        if step == 0 {
            return Err(Error::InvalidParameters(
                "the baby-step table needs at least one entry".to_string(),
            ));
        }
        if step > MAX_TABLE_SIZE {
            return Err(Error::InvalidParameters(format!(
                "a baby-step table of {} entries exceeds the maximum of {}",
                step, MAX_TABLE_SIZE
            )));
        }

        let giant_steps = bound / step + u64::from(bound % step != 0);
        if giant_steps > MAX_SEARCH_STEPS {
            return Err(Error::InvalidParameters(format!(
                "decoding below {} with {} baby steps needs {} giant steps, more than the maximum of {}",
                bound, step, giant_steps, MAX_SEARCH_STEPS
            )));
        }

        let mut table = HashMap::with_capacity(step as usize);
        let mut baby = RistrettoPoint::identity();
        for j in 0..step {
            table.insert(baby.compress().to_bytes(), j);
            baby += &RISTRETTO_BASEPOINT_POINT;
        }

        Ok(BabyStepGiantStep {
            bound,
            step,
            giant_steps,
            giant_stride: baby,
            table,
        })
    }

    /// The number of baby steps in the table.
    pub fn step(&self) -> u64 {
        self.step
    }

    /// The number of precomputed points held in memory.
    pub fn table_size(&self) -> usize {
        self.table.len()
    }
}

impl DiscreteLog for BabyStepGiantStep {
    fn bound(&self) -> u64 {
        self.bound
    }

    fn solve(&self, point: &RistrettoPoint) -> Option<u64> {
        let mut gamma = *point;
        for giant in 0..self.giant_steps {
            if let Some(&baby) = self.table.get(gamma.compress().as_bytes()) {
                // Logarithms are unique modulo the group order, so a hit beyond the bound means
                // there is no solution inside it.
                return giant
                    .checked_mul(self.step)
                    .and_then(|offset| offset.checked_add(baby))
                    .filter(|exponent| *exponent < self.bound);
            }
            gamma -= &self.giant_stride;
        }

        None
    }
}

impl Debug for BabyStepGiantStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BabyStepGiantStep")
            .field("bound", &self.bound)
            .field("step", &self.step)
            .field("giant_steps", &self.giant_steps)
            .finish()
    }
}

fn ceil_sqrt(value: u64) -> u64 {
    let square = |root: u64| u128::from(root) * u128::from(root);

    let mut root = (value as f64).sqrt() as u64;
    while square(root) > u128::from(value) {
        root -= 1;
    }
    while square(root) < u128::from(value) {
        root += 1;
    }

    root
}
