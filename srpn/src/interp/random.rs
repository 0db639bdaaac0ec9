//! Deterministic random number generator
//!
//! Additive lagged-Fibonacci generator seeded the way glibc's `random()` is
//! with seed 1, kept in a 31-slot ring. The legacy SRPN calculator replays its
//! first 22 outputs once before moving on, and that replay leaves a stale slot
//! behind which later outputs depend on; both quirks are reproduced here.

/// Ring size (the long lag of the generator)
const RING_LEN: usize = 31;
/// Short lag
const SHORT_LAG: u64 = 3;
/// Generation at which output starts
const STARTING_POINT: u64 = 344;
/// Number of outputs replayed once
const REPEAT_LEN: u64 = 22;
/// Multiplier of the seeding recurrence
const SEED_MULTIPLIER: i64 = 16807;
/// Modulus of the seeding recurrence, `2^31 - 1`
const SEED_MODULUS: i64 = 2_147_483_647;

/// Generator state: ring buffer, generation counter and one-shot repeat flag
#[derive(Debug, Clone)]
pub struct RandomState {
    ring: [i64; RING_LEN],
    counter: u64,
    repeat_pending: bool,
}

impl RandomState {
    /// Seed the ring and advance it to the starting generation
    pub fn new() -> Self {
        let mut ring = [0i64; RING_LEN];
        ring[0] = 1;
        for i in 1..RING_LEN {
            let mut next = (SEED_MULTIPLIER * ring[i - 1]) % SEED_MODULUS;
            if next < 0 {
                next += SEED_MODULUS;
            }
            ring[i] = next;
        }

        let mut state = RandomState {
            ring,
            counter: STARTING_POINT,
            repeat_pending: true,
        };
        for n in (RING_LEN as u64 + SHORT_LAG)..STARTING_POINT {
            state.ring[slot(n)] = state.generate(n);
        }
        state
    }

    /// Next emitted value, always in `0..=i32::MAX`
    pub fn next_value(&mut self) -> i64 {
        let replay_end = STARTING_POINT + REPEAT_LEN;
        if self.repeat_pending && self.counter == replay_end {
            self.counter = STARTING_POINT;
            self.repeat_pending = false;
        }
        if self.counter > replay_end || self.repeat_pending {
            self.ring[slot(self.counter)] = self.generate(self.counter);
        }
        self.counter += 1;

        let mut raw = self.ring[slot(self.counter - 1)];
        if raw < 0 {
            raw += 1 << 32;
        }
        raw >> 1
    }

    /// Value of generation `n` from the two lagged slots, wrapped to 32 bits
    fn generate(&self, n: u64) -> i64 {
        let sum = self.ring[slot(n)] + self.ring[slot(n - SHORT_LAG)];
        sum as i32 as i64
    }
}

impl Default for RandomState {
    fn default() -> Self {
        Self::new()
    }
}

fn slot(n: u64) -> usize {
    (n % RING_LEN as u64) as usize
}
