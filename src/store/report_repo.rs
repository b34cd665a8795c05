// src/store/report_repo.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    models::reports::{
        AgentRanking, AttendanceSummary, HandlingTimeBucket, HandlingTimeReport, PeriodEntry,
        ReportPeriod, TeamPerformance,
    },
};

// Indicadores do painel. São dados de demonstração congelados: a tela
// só lê, nada aqui sofre mutação.
struct ReportData {
    queue: u32,
    active: u32,
    completed: u32,
    total: u32,
    chart: Vec<PeriodEntry>,
    handling_time: HandlingTimeReport,
    teams: Vec<TeamPerformance>,
    ranking: Vec<AgentRanking>,
}

#[derive(Clone)]
pub struct ReportRepository {
    data: Arc<ReportData>,
}

impl ReportRepository {
    pub fn seeded() -> Self {
        Self {
            data: Arc::new(seed_reports()),
        }
    }

    pub async fn summary(&self, period: ReportPeriod) -> Result<AttendanceSummary, AppError> {
        Ok(AttendanceSummary {
            period,
            queue: self.data.queue,
            active: self.data.active,
            completed: self.data.completed,
            total: self.data.total,
        })
    }

    pub async fn chart(&self) -> Result<Vec<PeriodEntry>, AppError> {
        Ok(self.data.chart.clone())
    }

    pub async fn handling_time(&self) -> Result<HandlingTimeReport, AppError> {
        Ok(self.data.handling_time.clone())
    }

    pub async fn teams(&self) -> Result<Vec<TeamPerformance>, AppError> {
        Ok(self.data.teams.clone())
    }

    pub async fn ranking(&self) -> Result<Vec<AgentRanking>, AppError> {
        Ok(self.data.ranking.clone())
    }
}

fn entry(period: &str, chats: u32) -> PeriodEntry {
    PeriodEntry {
        period: period.to_string(),
        chats,
    }
}

fn bucket(label: &str, share: u32) -> HandlingTimeBucket {
    HandlingTimeBucket {
        label: label.to_string(),
        share,
    }
}

fn ranked(position: u32, name: &str, chats: u32, avg_time: &str, satisfaction: f32) -> AgentRanking {
    AgentRanking {
        position,
        name: name.to_string(),
        chats,
        avg_time: avg_time.to_string(),
        satisfaction,
    }
}

fn seed_reports() -> ReportData {
    ReportData {
        queue: 8,
        active: 15,
        completed: 42,
        total: 65,
        chart: vec![
            entry("08:00", 12),
            entry("10:00", 19),
            entry("12:00", 25),
            entry("14:00", 32),
            entry("16:00", 28),
            entry("18:00", 15),
        ],
        handling_time: HandlingTimeReport {
            overall_average: "16m".to_string(),
            buckets: vec![
                bucket("Muito rápido (<10m)", 23),
                bucket("Rápido (10-20m)", 45),
                bucket("Médio (20-30m)", 22),
                bucket("Lento (>30m)", 10),
            ],
        },
        teams: vec![
            TeamPerformance {
                team: "Vendas".to_string(),
                attendances: 45,
            },
            TeamPerformance {
                team: "Suporte".to_string(),
                attendances: 32,
            },
            TeamPerformance {
                team: "Cobrança".to_string(),
                attendances: 18,
            },
        ],
        ranking: vec![
            ranked(1, "João Silva", 28, "12m", 4.8),
            ranked(2, "Maria Santos", 24, "15m", 4.7),
            ranked(3, "Pedro Costa", 22, "18m", 4.6),
            ranked(4, "Ana Oliveira", 19, "20m", 4.5),
            ranked(5, "Carlos Lima", 16, "22m", 4.4),
        ],
    }
}
