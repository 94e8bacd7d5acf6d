//! Hamper id and timestamp helpers

use uuid::Uuid;

/// Current time as epoch milliseconds.
pub fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Generates a unique hamper id: `hamper-<millis>-<random>`.
///
/// The embedded millisecond run doubles as the numeric id source when the
/// hamper is later turned into a cart row.
pub fn generate_hamper_id() -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("hamper-{}-{}", now_millis(), &random[..9])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hamper_ids_carry_a_digit_run_and_differ() {
        let a = generate_hamper_id();
        let b = generate_hamper_id();

        assert!(a.starts_with("hamper-"));
        assert!(a.chars().any(|c| c.is_ascii_digit()));
        assert_ne!(a, b);
    }
}
