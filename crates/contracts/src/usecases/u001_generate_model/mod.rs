pub mod request;
pub mod response;

pub use request::GenerateRequest;
pub use response::GenerateReply;

use crate::usecases::common::UseCaseMetadata;

/// Path of the generation endpoint, relative to the service base URL
pub const GENERATE_PATH: &str = "/chat";

pub struct GenerateModel;

impl UseCaseMetadata for GenerateModel {
    fn usecase_index() -> &'static str {
        "u001"
    }

    fn usecase_name() -> &'static str {
        "generate_model"
    }

    fn display_name() -> &'static str {
        "3D Model Generator"
    }

    fn description() -> &'static str {
        "Describe an object in plain words and get back a printable STL model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(GenerateModel::full_name(), "u001_generate_model");
    }
}
