/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod comparison_request;
mod comparison_response;
mod output_format;

pub use comparison_request::ComparisonRequest;
pub use comparison_response::ComparisonResponse;
pub use output_format::OutputFormat;
