//! Wire types for the payment gateway API.

use serde::Deserialize;

/// Remote plan object.
#[derive(Debug, Clone, Deserialize)]
pub struct Plan {
    /// Plan ID.
    pub id: String,
    /// Amount in minor currency units.
    #[serde(default)]
    pub amount: i64,
    /// Currency (e.g., "usd").
    #[serde(default)]
    pub currency: String,
    /// Billing interval ("month" or "year").
    #[serde(default)]
    pub interval: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Trial period in days.
    #[serde(default)]
    pub trial_period_days: Option<u32>,
}

/// Remote customer object.
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    /// Customer ID.
    pub id: String,
    /// Customer email.
    #[serde(default)]
    pub email: Option<String>,
    /// ID of the default payment source.
    #[serde(default)]
    pub default_source: Option<String>,
    /// Payment sources attached to this customer.
    #[serde(default)]
    pub sources: Option<StripeList<Card>>,
    /// Created timestamp (Unix).
    #[serde(default)]
    pub created: i64,
}

impl Customer {
    /// The card this customer's charges default to, if any.
    ///
    /// Resolves `default_source` against the attached source list.
    #[must_use]
    pub fn default_card(&self) -> Option<&Card> {
        let default_id = self.default_source.as_deref()?;
        self.sources
            .as_ref()?
            .data
            .iter()
            .find(|card| card.id == default_id)
    }
}

/// A card payment source.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Card {
    /// Card ID.
    pub id: String,
    /// Card brand (e.g., "Visa").
    #[serde(default)]
    pub brand: String,
    /// Last four digits.
    #[serde(default)]
    pub last4: String,
    /// Expiration month.
    #[serde(default)]
    pub exp_month: i64,
    /// Expiration year.
    #[serde(default)]
    pub exp_year: i64,
}

/// Remote subscription object.
#[derive(Debug, Clone, Deserialize)]
pub struct Subscription {
    /// Subscription ID.
    pub id: String,
    /// Status (active, trialing, canceled, etc.).
    #[serde(default)]
    pub status: String,
    /// Customer ID.
    #[serde(default)]
    pub customer: Option<String>,
    /// The plan this subscription is on.
    #[serde(default)]
    pub plan: Option<Plan>,
}

/// Remote charge object.
#[derive(Debug, Clone, Deserialize)]
pub struct Charge {
    /// Charge ID.
    pub id: String,
    /// Amount in minor currency units.
    #[serde(default)]
    pub amount: i64,
    /// Currency (e.g., "usd").
    #[serde(default)]
    pub currency: String,
    /// Description attached to the charge.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the charge was captured immediately.
    #[serde(default)]
    pub captured: bool,
    /// Status (succeeded, pending, failed).
    #[serde(default)]
    pub status: String,
}

/// A one-time payment-method token.
///
/// Obtained from the gateway and consumed at most once, either during
/// customer registration or a token-based charge.
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    /// Token ID.
    pub id: String,
    /// Whether the token has already been consumed.
    #[serde(default)]
    pub used: bool,
    /// The card the token represents.
    #[serde(default)]
    pub card: Option<Card>,
}

/// Confirmation of a deleted resource.
#[derive(Debug, Clone, Deserialize)]
pub struct Deleted {
    /// ID of the deleted resource.
    pub id: String,
    /// Always true on success.
    #[serde(default)]
    pub deleted: bool,
}

/// Gateway list response wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeList<T> {
    /// Object type (always "list").
    #[serde(default)]
    pub object: String,
    /// Data items.
    #[serde(default)]
    pub data: Vec<T>,
    /// Whether there are more items.
    #[serde(default)]
    pub has_more: bool,
}

/// Gateway error response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorResponse {
    /// Error details.
    pub error: StripeErrorDetail,
}

/// Gateway error detail.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorDetail {
    /// Error type.
    #[serde(rename = "type", default)]
    pub error_type: String,
    /// Error message.
    #[serde(default)]
    pub message: String,
    /// Error code.
    #[serde(default)]
    pub code: Option<String>,
    /// Parameter that caused the error.
    #[serde(default)]
    pub param: Option<String>,
}

/// Card details for creating a one-time token.
///
/// Test tooling: production integrations obtain tokens from the gateway's
/// client-side libraries so card numbers never transit the host application.
#[derive(Debug, Clone)]
pub struct CardParams {
    /// Card number.
    pub number: String,
    /// Expiration month (e.g., "10").
    pub exp_month: String,
    /// Expiration year (e.g., "2063").
    pub exp_year: String,
    /// Card verification code.
    pub cvc: Option<String>,
    /// Cardholder name.
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_default_card_resolves_from_source_list() {
        let json = serde_json::json!({
            "id": "cus_1",
            "email": "erik@code.com",
            "default_source": "card_2",
            "sources": {
                "object": "list",
                "data": [
                    {"id": "card_1", "brand": "Visa", "last4": "1111", "exp_month": 1, "exp_year": 2063},
                    {"id": "card_2", "brand": "Visa", "last4": "4242", "exp_month": 10, "exp_year": 2063}
                ],
                "has_more": false
            }
        });

        let customer: Customer = serde_json::from_value(json).unwrap();
        let card = customer.default_card().unwrap();
        assert_eq!(card.id, "card_2");
        assert_eq!(card.last4, "4242");
    }

    #[test]
    fn customer_without_sources_has_no_default_card() {
        let customer: Customer =
            serde_json::from_value(serde_json::json!({"id": "cus_1"})).unwrap();
        assert!(customer.default_card().is_none());
    }

    #[test]
    fn error_envelope_deserializes() {
        let json = serde_json::json!({
            "error": {
                "type": "invalid_request_error",
                "message": "No such plan: gold",
                "code": "resource_missing"
            }
        });

        let envelope: StripeErrorResponse = serde_json::from_value(json).unwrap();
        assert_eq!(envelope.error.error_type, "invalid_request_error");
        assert_eq!(envelope.error.code.as_deref(), Some("resource_missing"));
    }
}
