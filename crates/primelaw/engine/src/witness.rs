//! Exact primality witness and candidate walk
//!
//! No sieve and no randomness. Each candidate is tested with the
//! deterministic Miller-Rabin base set that is exact for every `u64`
//! input, and the next prime is found by walking candidates upward from
//! the previous one: 2 -> 3, then odd numbers only.

/// Witness bases exact for all n below 3.3 * 10^24, which covers `u64`.
const WITNESS_BASES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Exact primality test for any `u64`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for p in WITNESS_BASES {
        if n == p {
            return true;
        }
        if n % p == 0 {
            return false;
        }
    }

    // n is odd and above every base; write n - 1 = d * 2^s.
    let s = (n - 1).trailing_zeros();
    let d = (n - 1) >> s;

    'witness: for a in WITNESS_BASES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Next prime strictly greater than `after`, examining at most `span`
/// candidates. Returns `None` when the span is exhausted or the walk
/// would overflow `u64`.
pub fn next_prime_after(after: u64, span: u64) -> Option<u64> {
    if after < 2 {
        return Some(2);
    }
    if after == 2 {
        return Some(3);
    }
    let mut candidate = if after % 2 == 0 {
        after.checked_add(1)?
    } else {
        after.checked_add(2)?
    };
    for _ in 0..span {
        if is_prime(candidate) {
            return Some(candidate);
        }
        candidate = candidate.checked_add(2)?;
    }
    None
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut acc = 1u64;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    acc
}
