/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod buyer_profile_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod vendor_catalog_reader;

pub use buyer_profile_reader::BuyerProfileReader;
pub use formatter::ResultsFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use vendor_catalog_reader::VendorCatalogReader;
