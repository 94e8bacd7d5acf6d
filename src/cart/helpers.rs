//! Shopping Cart Business Logic Helpers

use super::models::CartItem;
use crate::hamper::helpers::now_millis;

/// Derives the numeric cart id for a hamper from its string id.
///
/// The first contiguous digit run inside the id (the embedded timestamp for
/// generated ids) becomes the cart row id. When the id carries no usable
/// digits, a fresh time-based id is used instead.
pub fn derive_hamper_numeric_id(hamper_id: &str) -> i64 {
    let digits: String = hamper_id
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse().unwrap_or_else(|_| now_millis() as i64)
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"2x Custom Mug, 1x Photo Lamp"`.
pub fn format_item_summary(items: &[CartItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.quantity, i.product_name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_id_comes_from_the_first_digit_run() {
        assert_eq!(derive_hamper_numeric_id("hamper-1722000000123-a3f9c2d41"), 1722000000123);
        assert_eq!(derive_hamper_numeric_id("basket42xyz7"), 42);
    }

    #[test]
    fn digitless_id_falls_back_to_a_time_based_id() {
        let id = derive_hamper_numeric_id("no-digits-here");
        assert!(id > 0);
    }

    #[test]
    fn summary_lists_quantities_and_names() {
        let items = vec![
            CartItem {
                product_id: 4,
                product_name: "Custom Mug".into(),
                price: 349.0,
                quantity: 2,
                image_url: None,
                is_hamper: false,
                hamper_details: None,
            },
            CartItem {
                product_id: 2,
                product_name: "Photo Lamp".into(),
                price: 999.0,
                quantity: 1,
                image_url: None,
                is_hamper: false,
                hamper_details: None,
            },
        ];

        assert_eq!(format_item_summary(&items), "2x Custom Mug, 1x Photo Lamp");
    }
}
