pub mod attendance_service;
pub use attendance_service::AttendanceService;
pub mod campaign_service;
pub use campaign_service::CampaignService;
pub mod contact_service;
pub use contact_service::ContactService;
pub mod pipeline_service;
pub use pipeline_service::PipelineService;
pub mod profile_service;
pub use profile_service::ProfileService;
pub mod report_service;
pub use report_service::ReportService;
pub mod settings_service;
pub use settings_service::SettingsService;
