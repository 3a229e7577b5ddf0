use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Mostly printable ASCII, with a few multi-byte characters so hashing sees
/// real UTF-8 input.
const PASSWORD_ALPHABET: &[char] = &[
    'a', 'e', 'k', 'q', 'z', 'A', 'M', 'Z', '0', '1', '7', '9', '!', '#', '_', '.', ' ', 'ß', 'é',
    'ж', '密', '🔑',
];

/// Seeded so every run hashes the same inputs.
pub fn generate_random_passwords(count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(0x5BAA6);
    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        let chars = rng.gen_range(6..=40);
        let password: String = (0..chars)
            .map(|_| PASSWORD_ALPHABET[rng.gen_range(0..PASSWORD_ALPHABET.len())])
            .collect();
        passwords.push(password);
    }
    passwords
}

/// Builds a sorted, CRLF separated range body of `entries` random suffixes,
/// the size of a typical `/range/{prefix}` response, with `extra` mixed in.
pub fn generate_range_body(entries: usize, extra: &[&str]) -> String {
    let mut rng = StdRng::seed_from_u64(7);
    let mut suffixes: Vec<String> = (0..entries)
        .map(|_| (0..35).map(|_| HEX[rng.gen_range(0..16)] as char).collect())
        .collect();
    suffixes.extend(extra.iter().map(|s| s.to_string()));
    suffixes.sort();

    suffixes
        .iter()
        .map(|suffix| format!("{suffix}:{}", rng.gen_range(1..100_000)))
        .collect::<Vec<_>>()
        .join("\r\n")
}
