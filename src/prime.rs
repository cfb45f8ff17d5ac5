//! Table sizing: round a requested capacity up to a prime.

/// Smallest prime `p >= n`, by trial division. Values below 2 map to 2.
pub fn smallest_prime_at_least(n: usize) -> usize {
    (n.max(2)..)
        .find(|&c| is_prime(c))
        .expect("there is always a larger prime")
}

pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn small_values() {
        assert_eq!(smallest_prime_at_least(0), 2);
        assert_eq!(smallest_prime_at_least(1), 2);
        assert_eq!(smallest_prime_at_least(2), 2);
        assert_eq!(smallest_prime_at_least(3), 3);
        assert_eq!(smallest_prime_at_least(4), 5);
        assert_eq!(smallest_prime_at_least(10), 11);
        assert_eq!(smallest_prime_at_least(113), 113);
        assert_eq!(smallest_prime_at_least(114), 127);
    }

    #[test]
    fn primality() {
        let primes: Vec<usize> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(!is_prime(49));
        assert!(is_prime(7919));
    }

    // Property: the result is prime, not below `n`, and nothing in between is prime.
    proptest! {
        #[test]
        fn prop_smallest_prime(n in 0usize..20_000) {
            let p = smallest_prime_at_least(n);
            prop_assert!(p >= n);
            prop_assert!(is_prime(p));
            for c in n..p {
                prop_assert!(!is_prime(c));
            }
        }
    }
}
