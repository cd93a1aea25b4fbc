/// Use cases module containing application business logic orchestration
mod compare_vendors;

pub use compare_vendors::CompareVendorsUseCase;
