use serde::{Deserialize, Serialize};

/// Prompt sent to the generation service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub message: String,
}

impl GenerateRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(GenerateRequest::new("a cube")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "a cube" }));
    }
}
