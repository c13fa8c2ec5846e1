//! Typed cart input with quantity coercion at the serde boundary.
//!
//! The SPA historically sent quantity as a number, a numeric string, or not
//! at all. Rather than ad-hoc runtime property access, coercion is a typed
//! deserializer: anything non-numeric becomes 1, and the result is floored
//! at 1.

use serde::{Deserialize, Deserializer, Serialize};

use customkeeps_core::ProductId;

/// One line of a submitted cart. Serialization is used for the cart
/// snapshot attached to payment-intent metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineInput {
    pub product_id: ProductId,
    #[serde(default = "default_quantity", deserialize_with = "coerce_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

fn coerce_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(quantity_from_value(&value))
}

/// Coerce a JSON value to an integer quantity >= 1.
fn quantity_from_value(value: &serde_json::Value) -> u32 {
    let numeric = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match numeric {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some(q) if q.is_finite() && q >= 1.0 => q.min(f64::from(u32::MAX)) as u32,
        _ => 1,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(json: &str) -> CartLineInput {
        serde_json::from_str(json).unwrap()
    }

    const TEE_ID: &str = "\"b5f7c1e2-9f2a-4a3d-8e1b-2c4d6e8f0a1b\"";

    #[test]
    fn test_numeric_quantity() {
        let line = parse(&format!("{{\"productId\": {TEE_ID}, \"quantity\": 3}}"));
        assert_eq!(line.quantity, 3);
    }

    #[test]
    fn test_string_quantity() {
        let line = parse(&format!("{{\"productId\": {TEE_ID}, \"quantity\": \"12\"}}"));
        assert_eq!(line.quantity, 12);
    }

    #[test]
    fn test_missing_quantity_defaults_to_one() {
        let line = parse(&format!("{{\"productId\": {TEE_ID}}}"));
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_non_numeric_quantity_defaults_to_one() {
        let line = parse(&format!("{{\"productId\": {TEE_ID}, \"quantity\": \"lots\"}}"));
        assert_eq!(line.quantity, 1);

        let line = parse(&format!("{{\"productId\": {TEE_ID}, \"quantity\": null}}"));
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_fractional_and_negative_quantities_floor_at_one() {
        let line = parse(&format!("{{\"productId\": {TEE_ID}, \"quantity\": 2.7}}"));
        assert_eq!(line.quantity, 2);

        let line = parse(&format!("{{\"productId\": {TEE_ID}, \"quantity\": -4}}"));
        assert_eq!(line.quantity, 1);

        let line = parse(&format!("{{\"productId\": {TEE_ID}, \"quantity\": 0}}"));
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_invalid_product_id_is_rejected() {
        let result: Result<CartLineInput, _> =
            serde_json::from_str("{\"productId\": \"not-a-uuid\", \"quantity\": 1}");
        assert!(result.is_err());
    }
}
