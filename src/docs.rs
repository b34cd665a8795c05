// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Atendimentos ---
        handlers::attendance::list_conversations,
        handlers::attendance::get_conversation,
        handlers::attendance::send_message,
        handlers::attendance::toggle_recording,
        handlers::attendance::set_status,
        handlers::attendance::transfer,
        handlers::attendance::conclude,

        // --- Contatos ---
        handlers::contacts::list_contacts,
        handlers::contacts::list_tags,
        handlers::contacts::create_contact,
        handlers::contacts::update_contact,
        handlers::contacts::add_tag,
        handlers::contacts::remove_tag,
        handlers::contacts::set_custom_field,
        handlers::contacts::remove_custom_field,
        handlers::contacts::toggle_selection,
        handlers::contacts::select_all,
        handlers::contacts::clear_selection,
        handlers::contacts::delete_selected,
        handlers::contacts::request_removal,
        handlers::contacts::cancel_removal,
        handlers::contacts::confirm_removal,

        // --- CRM ---
        handlers::crm::list_leads,
        handlers::crm::get_board,
        handlers::crm::get_catalogs,
        handlers::crm::create_lead,
        handlers::crm::update_lead,
        handlers::crm::move_lead,

        // --- Campanhas ---
        handlers::campaigns::list_campaigns,
        handlers::campaigns::get_options,
        handlers::campaigns::create_campaign,
        handlers::campaigns::update_campaign,
        handlers::campaigns::delete_campaign,

        // --- Relatórios ---
        handlers::reports::get_summary,
        handlers::reports::get_chart,
        handlers::reports::get_handling_time,
        handlers::reports::get_team_performance,
        handlers::reports::get_ranking,

        // --- Configurações ---
        handlers::settings::list_users,
        handlers::settings::create_user,
        handlers::settings::update_user,
        handlers::settings::delete_user,
        handlers::settings::list_teams,
        handlers::settings::create_team,
        handlers::settings::update_team,
        handlers::settings::delete_team,
        handlers::settings::get_account,
        handlers::settings::update_account,
        handlers::settings::get_hours,
        handlers::settings::update_hours,

        // --- Perfil ---
        handlers::profile::get_profile,
        handlers::profile::update_profile,
    ),
    components(
        schemas(
            // --- Atendimentos ---
            models::attendance::Fila,
            models::attendance::ConversationStatus,
            models::attendance::Sender,
            models::attendance::MessageKind,
            models::attendance::Message,
            models::attendance::Conversation,
            models::attendance::ConversationSummary,
            models::attendance::SendMessagePayload,
            models::attendance::SetStatusPayload,
            models::attendance::ActionReceipt,
            models::attendance::RecordingReceipt,

            // --- Contatos ---
            models::contacts::Contact,
            models::contacts::ContactPayload,
            models::contacts::TagPayload,
            models::contacts::CustomFieldPayload,
            models::contacts::SelectionState,
            models::contacts::BulkDeleteResult,

            // --- CRM ---
            models::crm::LeadStatus,
            models::crm::Lead,
            models::crm::LeadPayload,
            models::crm::MoveLeadPayload,
            models::crm::BoardColumn,
            models::crm::CrmCatalogs,

            // --- Campanhas ---
            models::campaigns::CampaignStatus,
            models::campaigns::Campaign,
            models::campaigns::CampaignPayload,
            models::campaigns::CampaignOptions,

            // --- Relatórios ---
            models::reports::ReportPeriod,
            models::reports::AttendanceSummary,
            models::reports::PeriodEntry,
            models::reports::HandlingTimeBucket,
            models::reports::HandlingTimeReport,
            models::reports::TeamPerformance,
            models::reports::AgentRanking,

            // --- Configurações ---
            models::settings::Role,
            models::settings::SystemUser,
            models::settings::SystemUserPayload,
            models::settings::Team,
            models::settings::TeamPayload,
            models::settings::AccountInfo,
            models::settings::UpdateAccountPayload,
            models::settings::DaySchedule,
            models::settings::BusinessHours,

            // --- Perfil ---
            models::profile::Profile,
            models::profile::UpdateProfilePayload,
        )
    ),
    tags(
        (name = "Atendimentos", description = "Caixa de entrada de conversas e chat"),
        (name = "Contatos", description = "Agenda de contatos, etiquetas e exclusões"),
        (name = "CRM", description = "Pipeline de vendas (quadro Kanban de leads)"),
        (name = "Campanhas", description = "Agendamento de campanhas de disparo"),
        (name = "Relatórios", description = "Indicadores e ranking de atendimento"),
        (name = "Configurações", description = "Usuários, equipes, conta e horários"),
        (name = "Perfil", description = "Dados do atendente logado")
    )
)]
pub struct ApiDoc;
