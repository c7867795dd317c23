/// Identification metadata of a UseCase
pub trait UseCaseMetadata {
    /// UseCase index (for example "u601")
    fn usecase_index() -> &'static str;

    /// Technical name (for example "pdf_qa")
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    /// Free-form description
    fn description() -> &'static str {
        ""
    }

    /// Full name like "u601_pdf_qa"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
