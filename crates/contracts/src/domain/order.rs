use serde::{Deserialize, Serialize};

/// Delivery provider accepted by the order endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Courier {
    #[serde(rename = "steadfast")]
    Steadfast,
    #[serde(rename = "pathao")]
    Pathao,
    #[serde(rename = "e-courier")]
    ECourier,
}

impl Default for Courier {
    fn default() -> Self {
        Courier::Steadfast
    }
}

impl Courier {
    pub fn wire_value(&self) -> &'static str {
        match self {
            Courier::Steadfast => "steadfast",
            Courier::Pathao => "pathao",
            Courier::ECourier => "e-courier",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Courier::Steadfast => "Steadfast",
            Courier::Pathao => "Pathao",
            Courier::ECourier => "E-Courier",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "steadfast" => Some(Courier::Steadfast),
            "pathao" => Some(Courier::Pathao),
            "e-courier" => Some(Courier::ECourier),
            _ => None,
        }
    }

    pub fn all() -> [Courier; 3] {
        [Courier::Steadfast, Courier::Pathao, Courier::ECourier]
    }
}

/// Raw order form state, exactly as typed by the user.
///
/// All fields are kept as strings until submit; coercion to the wire
/// payload happens in [`OrderDraft::to_request`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    /// Comma-joined product ids, e.g. "1,5,9"
    pub product_ids: String,
    /// Comma-joined quantities, parallel to `product_ids`
    pub s_product_qty: String,
    pub c_name: String,
    pub c_phone: String,
    pub address: String,
    pub cod_amount: String,
    pub delivery_charge: String,
    pub advance: String,
    pub discount_amount: String,
    pub courier: Courier,
}

/// JSON body for the order-creation endpoint.
///
/// Ids and quantities stay comma-joined strings on the wire; money
/// fields are numbers, with the optional ones serialized as null when
/// the user left them blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub product_ids: String,
    pub s_product_qty: String,
    pub c_name: String,
    pub c_phone: String,
    pub address: String,
    pub courier: Courier,
    pub cod_amount: f64,
    pub delivery_charge: f64,
    pub advance: Option<f64>,
    pub discount_amount: Option<f64>,
}

pub const MISSING_FIELDS_ERROR: &str = "Please fill in all required fields.";

impl OrderDraft {
    /// The seven required fields must be non-blank before anything is
    /// sent. The courier always has a value and is not checked.
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            &self.product_ids,
            &self.s_product_qty,
            &self.c_name,
            &self.c_phone,
            &self.address,
            &self.cod_amount,
            &self.delivery_charge,
        ];
        if required.iter().any(|f| f.trim().is_empty()) {
            return Err(MISSING_FIELDS_ERROR.to_string());
        }
        Ok(())
    }

    /// Validate and coerce into the wire payload. Non-numeric text in
    /// a money field is a validation error naming the field; nothing
    /// is sent in that case.
    pub fn to_request(&self) -> Result<CreateOrderRequest, String> {
        self.validate()?;
        Ok(CreateOrderRequest {
            product_ids: self.product_ids.trim().to_string(),
            s_product_qty: self.s_product_qty.trim().to_string(),
            c_name: self.c_name.trim().to_string(),
            c_phone: self.c_phone.trim().to_string(),
            address: self.address.trim().to_string(),
            courier: self.courier,
            cod_amount: parse_money("COD Amount", &self.cod_amount)?,
            delivery_charge: parse_money("Delivery Charge", &self.delivery_charge)?,
            advance: parse_optional_money("Advance Payment", &self.advance)?,
            discount_amount: parse_optional_money("Discount Amount", &self.discount_amount)?,
        })
    }
}

fn parse_money(label: &str, raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("{} must be a number.", label))
}

fn parse_optional_money(label: &str, raw: &str) -> Result<Option<f64>, String> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_money(label, raw).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> OrderDraft {
        OrderDraft {
            product_ids: "1,5".to_string(),
            s_product_qty: "2,1".to_string(),
            c_name: "Rahim Uddin".to_string(),
            c_phone: "01712345678".to_string(),
            address: "House 12, Road 3, Dhanmondi".to_string(),
            cod_amount: "1490".to_string(),
            delivery_charge: "80".to_string(),
            advance: String::new(),
            discount_amount: String::new(),
            courier: Courier::Steadfast,
        }
    }

    #[test]
    fn each_missing_required_field_fails_validation() {
        let blank_one = |f: fn(&mut OrderDraft)| {
            let mut d = filled_draft();
            f(&mut d);
            d
        };
        let drafts = [
            blank_one(|d| d.product_ids.clear()),
            blank_one(|d| d.s_product_qty.clear()),
            blank_one(|d| d.c_name.clear()),
            blank_one(|d| d.c_phone.clear()),
            blank_one(|d| d.address.clear()),
            blank_one(|d| d.cod_amount.clear()),
            blank_one(|d| d.delivery_charge.clear()),
        ];
        for draft in drafts {
            assert_eq!(draft.validate(), Err(MISSING_FIELDS_ERROR.to_string()));
            assert!(draft.to_request().is_err());
        }
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut draft = filled_draft();
        draft.c_name = "   ".to_string();
        assert_eq!(draft.validate(), Err(MISSING_FIELDS_ERROR.to_string()));
    }

    #[test]
    fn full_draft_coerces_field_types() {
        let mut draft = filled_draft();
        draft.advance = "500".to_string();
        let request = draft.to_request().unwrap();
        assert_eq!(request.cod_amount, 1490.0);
        assert_eq!(request.delivery_charge, 80.0);
        assert_eq!(request.advance, Some(500.0));
        assert_eq!(request.discount_amount, None);

        let body = serde_json::to_value(&request).unwrap();
        assert!(body["product_ids"].is_string());
        assert!(body["s_product_qty"].is_string());
        assert!(body["cod_amount"].is_number());
        assert!(body["delivery_charge"].is_number());
        assert!(body["advance"].is_number());
        assert!(body["discount_amount"].is_null());
        assert_eq!(body["courier"], "steadfast");
    }

    #[test]
    fn non_numeric_money_field_is_rejected() {
        let mut draft = filled_draft();
        draft.cod_amount = "lots".to_string();
        assert_eq!(
            draft.to_request(),
            Err("COD Amount must be a number.".to_string())
        );
    }

    #[test]
    fn courier_wire_values_round_trip() {
        for courier in Courier::all() {
            let wire = serde_json::to_value(courier).unwrap();
            assert_eq!(wire, courier.wire_value());
            assert_eq!(Courier::from_wire(courier.wire_value()), Some(courier));
            let back: Courier = serde_json::from_value(wire).unwrap();
            assert_eq!(back, courier);
        }
        assert_eq!(Courier::from_wire("dhl"), None);
        assert_eq!(Courier::default(), Courier::Steadfast);
    }
}
