//! Opaque tokens handed out at signup: `verify_token` for the email
//! verification link and `access_token` for the session cookie.

use chrono::Utc;
use rand::Rng;

// 62 symbols; generated tokens never contain '9' or '0'.
const TOKEN_CHARSET: &[u8] = b"_!abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ12345678";

const TOKEN_LEN: usize = 16;

/// Builds a token of the form `<unix millis>_<16 random symbols>`. The
/// prefix makes tokens sortable by creation time; the suffix carries the
/// randomness.
pub fn generate_token(rng: &mut impl Rng) -> String {
    format!(
        "{}_{}",
        Utc::now().timestamp_millis(),
        generate_temp_token(rng)
    )
}

/// Builds just the 16-symbol random part, without the timestamp prefix.
pub fn generate_temp_token(rng: &mut impl Rng) -> String {
    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..TOKEN_CHARSET.len());
            TOKEN_CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use regex::Regex;

    #[test]
    fn charset_has_sixty_two_symbols() {
        assert_eq!(TOKEN_CHARSET.len(), 62);
    }

    #[test]
    fn temp_token_is_sixteen_symbols_from_the_charset() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let token = generate_temp_token(&mut rng);
            assert_eq!(token.chars().count(), 16);
            assert!(token.bytes().all(|b| TOKEN_CHARSET.contains(&b)));
        }
    }

    #[test]
    fn token_is_millis_then_separator_then_suffix() {
        let mut rng = StdRng::seed_from_u64(11);

        let before = Utc::now().timestamp_millis();
        let token = generate_token(&mut rng);
        let after = Utc::now().timestamp_millis();

        let re = Regex::new(r"^(\d+)_(.{16})$").unwrap();
        let caps = re.captures(&token).expect("token should match the shape");
        let millis: i64 = caps[1].parse().unwrap();

        assert!(millis >= before && millis <= after);
        assert!(caps[2].bytes().all(|b| TOKEN_CHARSET.contains(&b)));
    }

    #[test]
    fn works_with_the_ambient_thread_rng() {
        let token = generate_temp_token(&mut rand::thread_rng());
        assert_eq!(token.chars().count(), 16);
        assert!(token.bytes().all(|b| TOKEN_CHARSET.contains(&b)));
    }

    #[test]
    fn same_seed_reproduces_the_suffix() {
        let a = generate_temp_token(&mut StdRng::seed_from_u64(99));
        let b = generate_temp_token(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn consecutive_tokens_differ() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = generate_temp_token(&mut rng);
        let b = generate_temp_token(&mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn suffix_never_contains_nine_or_zero() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let token = generate_temp_token(&mut rng);
            assert!(!token.contains('9'));
            assert!(!token.contains('0'));
        }
    }
}
