use serde::{Deserialize, Serialize};

/// Tag attached to a classified number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Armstrong,
    Even,
    Odd,
}

impl Property {
    pub fn as_str(&self) -> &'static str {
        match self {
            Property::Armstrong => "armstrong",
            Property::Even => "even",
            Property::Odd => "odd",
        }
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything we can say about a number without talking to the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<Property>,
    pub digit_sum: u64,
}

/// Response body for a successful classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<Property>,
    pub digit_sum: u64,
    pub fun_fact: String,
}

impl Classification {
    /// Attach the (possibly empty) fun fact and produce the response body.
    pub fn with_fun_fact(self, fun_fact: String) -> ClassificationResult {
        ClassificationResult {
            number: self.number,
            is_prime: self.is_prime,
            is_perfect: self.is_perfect,
            properties: self.properties,
            digit_sum: self.digit_sum,
            fun_fact,
        }
    }
}

/// Run every predicate against `n`.
pub fn classify(n: i64) -> Classification {
    Classification {
        number: n,
        is_prime: is_prime(n),
        is_perfect: is_perfect(n),
        properties: properties(n),
        digit_sum: digit_sum(n),
    }
}

/// Trial division up to the integer square root.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    let mut i = 2;
    // `i <= n / i` is `i * i <= n` without the overflow.
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }

    true
}

/// Whether `n` equals the sum of its proper divisors.
///
/// Divisors are collected in pairs (`i`, `n / i`) while `i` stays at or below
/// the square root, so the loop is O(√n). The sum is accumulated in `u128`
/// since it can exceed `i64::MAX` for abundant numbers near the top of the range.
pub fn is_perfect(n: i64) -> bool {
    if n < 1 {
        return false;
    }

    let mut sum: u128 = if n > 1 { 1 } else { 0 };
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            let pair = n / i;
            sum += i as u128;
            if i != pair {
                sum += pair as u128;
            }
        }
        i += 1;
    }

    sum == n as u128
}

/// Armstrong check on |n|; the sign is ignored.
pub fn is_armstrong(n: i64) -> bool {
    let magnitude = n.unsigned_abs();
    let digits = digits(magnitude);
    let power = digits.len() as u32;

    let total: u128 = digits.iter().map(|&d| (d as u128).pow(power)).sum();

    total == magnitude as u128
}

/// Sum of the decimal digits of |n|.
pub fn digit_sum(n: i64) -> u64 {
    digits(n.unsigned_abs()).iter().map(|&d| d as u64).sum()
}

/// Parity tag, preceded by `armstrong` when it applies.
pub fn properties(n: i64) -> Vec<Property> {
    let parity = if n % 2 == 0 {
        Property::Even
    } else {
        Property::Odd
    };

    if is_armstrong(n) {
        vec![Property::Armstrong, parity]
    } else {
        vec![parity]
    }
}

/// Decimal digits, most significant first. Zero has the single digit `0`.
fn digits(mut value: u64) -> Vec<u8> {
    if value == 0 {
        return vec![0];
    }

    let mut out = Vec::new();
    while value > 0 {
        out.push((value % 10) as u8);
        value /= 10;
    }
    out.reverse();
    out
}
