pub mod attendance_repo;
pub use attendance_repo::AttendanceRepository;
pub mod campaign_repo;
pub use campaign_repo::CampaignRepository;
pub mod contact_repo;
pub use contact_repo::ContactRepository;
pub mod lead_repo;
pub use lead_repo::LeadRepository;
pub mod profile_repo;
pub use profile_repo::ProfileRepository;
pub mod report_repo;
pub use report_repo::ReportRepository;
pub mod settings_repo;
pub use settings_repo::SettingsRepository;
