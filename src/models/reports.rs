// src/models/reports.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Recorte de período aceito pela tela de relatórios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ReportPeriod {
    #[serde(rename = "hoje")]
    Hoje,
    #[serde(rename = "7dias")]
    SeteDias,
    #[serde(rename = "30dias")]
    TrintaDias,
    #[serde(rename = "personalizado")]
    Personalizado,
}

impl Default for ReportPeriod {
    fn default() -> Self {
        ReportPeriod::Hoje
    }
}

// 1. Resumo do Dia (Os Cards do Topo)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    pub period: ReportPeriod,
    pub queue: u32,     // Na fila, aguardando atendimento
    pub active: u32,    // Conversas ativas
    pub completed: u32, // Concluídos hoje
    pub total: u32,     // Atendimentos hoje
}

// 2. Gráfico de Atendimentos por Período
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeriodEntry {
    #[schema(example = "14:00")]
    pub period: String,
    pub chats: u32,
}

// 3. Distribuição do Tempo Médio de Atendimento
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HandlingTimeBucket {
    #[schema(example = "Rápido (10-20m)")]
    pub label: String,
    #[schema(example = 45)]
    pub share: u32, // percentual
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HandlingTimeReport {
    #[schema(example = "16m")]
    pub overall_average: String,
    pub buckets: Vec<HandlingTimeBucket>,
}

// 4. Performance por Equipe
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamPerformance {
    pub team: String,
    pub attendances: u32,
}

// 5. Ranking dos Atendentes
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgentRanking {
    pub position: u32,
    pub name: String,
    pub chats: u32,
    #[schema(example = "12m")]
    pub avg_time: String,
    #[schema(example = 4.8)]
    pub satisfaction: f32,
}
