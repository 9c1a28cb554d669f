pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod date_filter;
pub mod id_generator;
