// src/handlers/reports.rs

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::error::AppError,
    config::AppState,
    models::reports::{
        AgentRanking, AttendanceSummary, HandlingTimeReport, PeriodEntry, ReportPeriod,
        TeamPerformance,
    },
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct PeriodQuery {
    /// Recorte de período: hoje, 7dias, 30dias ou personalizado.
    pub periodo: Option<ReportPeriod>,
}

// GET /api/relatorios/summary
#[utoipa::path(
    get,
    path = "/api/relatorios/summary",
    tag = "Relatórios",
    params(PeriodQuery),
    responses(
        (status = 200, description = "Cards do topo: fila, ativos, concluídos e total", body = AttendanceSummary)
    )
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    Query(params): Query<PeriodQuery>,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state
        .report_service
        .summary(params.periodo.unwrap_or_default())
        .await?;

    Ok((StatusCode::OK, Json(summary)))
}

// GET /api/relatorios/chart
#[utoipa::path(
    get,
    path = "/api/relatorios/chart",
    tag = "Relatórios",
    responses(
        (status = 200, description = "Atendimentos por período do dia", body = Vec<PeriodEntry>)
    )
)]
pub async fn get_chart(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let chart = app_state.report_service.chart().await?;
    Ok((StatusCode::OK, Json(chart)))
}

// GET /api/relatorios/handling-time
#[utoipa::path(
    get,
    path = "/api/relatorios/handling-time",
    tag = "Relatórios",
    responses(
        (status = 200, description = "Tempo médio de atendimento e distribuição", body = HandlingTimeReport)
    )
)]
pub async fn get_handling_time(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let report = app_state.report_service.handling_time().await?;
    Ok((StatusCode::OK, Json(report)))
}

// GET /api/relatorios/teams
#[utoipa::path(
    get,
    path = "/api/relatorios/teams",
    tag = "Relatórios",
    responses(
        (status = 200, description = "Performance por equipe", body = Vec<TeamPerformance>)
    )
)]
pub async fn get_team_performance(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let teams = app_state.report_service.teams().await?;
    Ok((StatusCode::OK, Json(teams)))
}

// GET /api/relatorios/ranking
#[utoipa::path(
    get,
    path = "/api/relatorios/ranking",
    tag = "Relatórios",
    responses(
        (status = 200, description = "Ranking dos atendentes", body = Vec<AgentRanking>)
    )
)]
pub async fn get_ranking(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let ranking = app_state.report_service.ranking().await?;
    Ok((StatusCode::OK, Json(ranking)))
}
