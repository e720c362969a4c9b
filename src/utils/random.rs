// Copyright 2025 Fondazione LINKS

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use rand::{CryptoRng, RngCore};
use rug::{integer::Order, Integer};

/// Draws a uniform integer from the inclusive range `[lo, hi]` by rejection
/// sampling over `fill_bytes`. The generator must be cryptographically
/// secure; protocol nonces and challenges are drawn through this function.
pub fn random_in_range<R: RngCore + CryptoRng>(rng: &mut R, lo: &Integer, hi: &Integer) -> Integer {
    assert!(lo <= hi, "empty range");

    let width = Integer::from(hi - lo) + 1u32;
    let bits = width.significant_bits();
    let nbytes = ((bits + 7) / 8) as usize;
    let excess = nbytes as u32 * 8 - bits;

    let mut buf = vec![0u8; nbytes];
    loop {
        rng.fill_bytes(&mut buf);
        buf[0] &= 0xff >> excess;
        let candidate = Integer::from_digits(&buf, Order::MsfBe);
        if candidate < width {
            return candidate + lo;
        }
    }
}

/// Uniform exponent in `[1, order-1]`: the range of secret keys, session
/// nonces and interactive challenges.
pub fn random_exponent<R: RngCore + CryptoRng>(rng: &mut R, order: &Integer) -> Integer {
    let upper = Integer::from(order - 1u32);
    random_in_range(rng, &Integer::from(1), &upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn stays_within_bounds() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let lo = Integer::from(1);
        let hi = Integer::from(21);
        for _ in 0..200 {
            let v = random_in_range(&mut rng, &lo, &hi);
            assert!(v >= lo && v <= hi);
        }
    }

    #[test]
    fn deterministic_under_fixed_seed() {
        let order = Integer::from(1u8) << 127;
        let mut a = ChaCha20Rng::seed_from_u64(99);
        let mut b = ChaCha20Rng::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(
                random_exponent(&mut a, &order),
                random_exponent(&mut b, &order)
            );
        }
    }

    #[test]
    fn degenerate_range_returns_bound() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let lo = Integer::from(5);
        assert_eq!(random_in_range(&mut rng, &lo, &lo), lo);
    }
}
