// src/config.rs

use std::env;

use crate::{
    services::{
        AttendanceService, CampaignService, ContactService, PipelineService, ProfileService,
        ReportService, SettingsService,
    },
    store::{
        AttendanceRepository, CampaignRepository, ContactRepository, LeadRepository,
        ProfileRepository, ReportRepository, SettingsRepository,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub pipeline_service: PipelineService,
    pub contact_service: ContactService,
    pub attendance_service: AttendanceService,
    pub campaign_service: CampaignService,
    pub report_service: ReportService,
    pub settings_service: SettingsService,
    pub profile_service: ProfileService,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        // --- Monta o gráfico de dependências ---
        // Cada tela tem seu próprio repositório em memória, já com a
        // carga de demonstração. Nenhum repositório enxerga o outro.
        let pipeline_service = PipelineService::new(LeadRepository::seeded());
        let contact_service = ContactService::new(ContactRepository::seeded());
        let attendance_service = AttendanceService::new(AttendanceRepository::seeded());
        let campaign_service = CampaignService::new(CampaignRepository::seeded());
        let report_service = ReportService::new(ReportRepository::seeded());
        let settings_service = SettingsService::new(SettingsRepository::seeded());
        let profile_service = ProfileService::new(ProfileRepository::seeded());

        tracing::info!("✅ Estado em memória carregado com os dados de demonstração!");

        Ok(Self {
            pipeline_service,
            contact_service,
            attendance_service,
            campaign_service,
            report_service,
            settings_service,
            profile_service,
        })
    }
}

/// Endereço do listener: BIND_ADDR no ambiente, com padrão local.
pub fn bind_addr() -> String {
    env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}
