use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} {id} was not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A path identifier that does not parse as an integer.
    #[error("{0} ID must be an integer.")]
    InvalidId(&'static str),

    /// First missing key of a create payload, reported individually.
    #[error("Request body must include {0}.")]
    MissingField(&'static str),

    /// Any missing key of an update payload, reported as one combined message.
    #[error("Request body must include title, release_date, and total_inventory.")]
    MissingFields,

    /// A required key is present but its value cannot be stored.
    #[error("{field} must be {expected}.")]
    InvalidValue {
        field: &'static str,
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Video",
            id: 42,
        };
        assert_eq!(err.to_string(), "Video 42 was not found");
    }

    #[test]
    fn invalid_id_message() {
        assert_eq!(
            CoreError::InvalidId("Video").to_string(),
            "Video ID must be an integer."
        );
    }

    #[test]
    fn missing_field_messages_differ_between_single_and_combined() {
        assert_eq!(
            CoreError::MissingField("release_date").to_string(),
            "Request body must include release_date."
        );
        assert_eq!(
            CoreError::MissingFields.to_string(),
            "Request body must include title, release_date, and total_inventory."
        );
    }

    #[test]
    fn invalid_value_message_names_field() {
        let err = CoreError::InvalidValue {
            field: "total_inventory",
            expected: "an integer",
        };
        assert_eq!(err.to_string(), "total_inventory must be an integer.");
    }
}
