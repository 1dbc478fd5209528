mod page_dto;

pub use page_dto::{DashboardResponseDto, HomeResponseDto};
