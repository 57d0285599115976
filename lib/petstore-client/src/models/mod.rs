//! Data types exchanged with the pet-store service.
//!
//! All models serialize with camelCase field names to match the wire format;
//! optional fields are omitted from the payload when unset.

mod category;
pub use self::category::Category;

mod tag;
pub use self::tag::Tag;

mod pet;
pub use self::pet::{Pet, PetStatus};

mod order;
pub use self::order::{Order, OrderStatus};

mod user;
pub use self::user::User;

mod api_response;
pub use self::api_response::ApiResponse;

pub use crate::client::HttpFile;

#[cfg(test)]
mod tests {
    use chrono::{TimeZone as _, Utc};

    use super::*;

    #[test]
    fn test_pet_serializes_with_camel_case_names() {
        let pet = Pet::new("doggie", vec!["https://example.com/dog.png".to_string()]);

        let value = serde_json::to_value(&pet).expect("serializable");

        assert_eq!(
            value,
            serde_json::json!({
                "name": "doggie",
                "photoUrls": ["https://example.com/dog.png"],
            })
        );
    }

    #[test]
    fn test_unset_optional_fields_are_absent_not_null() {
        let pet = Pet::new("doggie", vec![]);

        let value = serde_json::to_value(&pet).expect("serializable");
        let object = value.as_object().expect("an object");

        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("category"));
        assert!(!object.contains_key("tags"));
        assert!(!object.contains_key("status"));
    }

    #[test]
    fn test_pet_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(PetStatus::Available).expect("serializable"),
            serde_json::json!("available")
        );
        assert_eq!(
            serde_json::to_value(PetStatus::Pending).expect("serializable"),
            serde_json::json!("pending")
        );
        assert_eq!(
            serde_json::to_value(PetStatus::Sold).expect("serializable"),
            serde_json::json!("sold")
        );
    }

    #[test]
    fn test_pet_deserializes_from_service_payload() {
        let payload = serde_json::json!({
            "id": 5,
            "category": {"id": 1, "name": "dogs"},
            "name": "rex",
            "photoUrls": ["https://example.com/rex.png"],
            "tags": [{"id": 2, "name": "friendly"}],
            "status": "sold",
        });

        let pet: Pet = serde_json::from_value(payload).expect("deserializable");

        assert_eq!(pet.id, Some(5));
        assert_eq!(pet.name, "rex");
        assert_eq!(pet.status, Some(PetStatus::Sold));
        assert_eq!(
            pet.category,
            Some(Category {
                id: Some(1),
                name: Some("dogs".to_string())
            })
        );
    }

    #[test]
    fn test_order_ship_date_round_trips_as_rfc3339() {
        let ship_date = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();
        let order = Order {
            id: Some(3),
            pet_id: Some(5),
            quantity: Some(1),
            ship_date: Some(ship_date),
            status: Some(OrderStatus::Placed),
            complete: Some(false),
        };

        let value = serde_json::to_value(&order).expect("serializable");
        assert_eq!(value["shipDate"], "2024-05-17T09:30:00Z");
        assert_eq!(value["petId"], 5);
        assert_eq!(value["status"], "placed");

        let decoded: Order = serde_json::from_value(value).expect("deserializable");
        assert_eq!(decoded, order);
    }

    #[test]
    fn test_api_response_type_field_wire_name() {
        let response = ApiResponse {
            code: Some(200),
            kind: Some("unknown".to_string()),
            message: Some("ok".to_string()),
        };

        let value = serde_json::to_value(&response).expect("serializable");

        assert_eq!(
            value,
            serde_json::json!({"code": 200, "type": "unknown", "message": "ok"})
        );
    }
}
