//! Customer Model

use serde::{Deserialize, Serialize};

/// Label shown when an order references a customer that no longer exists
pub const UNKNOWN_CUSTOMER: &str = "Neznámý";

/// Customer entity (event client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    /// Company name
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
}

/// Create customer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreate {
    pub name: String,
    pub contact_person: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl CustomerCreate {
    /// Attach an id, producing the stored record
    pub fn into_customer(self, id: String) -> Customer {
        Customer {
            id,
            name: self.name,
            contact_person: self.contact_person,
            phone: self.phone,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_camel_case() {
        let customer = CustomerCreate {
            name: "Casino Royale s.r.o.".to_string(),
            contact_person: "Jan Novák".to_string(),
            phone: "+420 123 456 789".to_string(),
            email: "jan.novak@casinoroyale.cz".to_string(),
        }
        .into_customer("cust_1".to_string());

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["id"], "cust_1");
        assert_eq!(json["contactPerson"], "Jan Novák");
        assert!(json.get("contact_person").is_none());
    }

    #[test]
    fn test_create_payload_optional_contact_fields() {
        let payload: CustomerCreate =
            serde_json::from_str(r#"{"name":"Event Agency Prague","contactPerson":"Eva"}"#).unwrap();
        assert_eq!(payload.phone, "");
        assert_eq!(payload.email, "");
    }
}
