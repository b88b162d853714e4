/// Identification metadata of a UseCase
pub trait UseCaseMetadata {
    /// UseCase index (e.g. "u001")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "generate_model")
    fn usecase_name() -> &'static str;

    /// Display name for the UI
    fn display_name() -> &'static str;

    /// Short description shown next to the display name
    fn description() -> &'static str {
        ""
    }

    /// Full name like "u001_generate_model"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
