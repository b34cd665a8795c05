// src/services/report_service.rs

use crate::{
    common::error::AppError,
    models::reports::{
        AgentRanking, AttendanceSummary, HandlingTimeReport, PeriodEntry, ReportPeriod,
        TeamPerformance,
    },
    store::ReportRepository,
};

// Tela só de leitura: o serviço repassa os indicadores do repositório.
#[derive(Clone)]
pub struct ReportService {
    repo: ReportRepository,
}

impl ReportService {
    pub fn new(repo: ReportRepository) -> Self {
        Self { repo }
    }

    pub async fn summary(&self, period: ReportPeriod) -> Result<AttendanceSummary, AppError> {
        self.repo.summary(period).await
    }

    pub async fn chart(&self) -> Result<Vec<PeriodEntry>, AppError> {
        self.repo.chart().await
    }

    pub async fn handling_time(&self) -> Result<HandlingTimeReport, AppError> {
        self.repo.handling_time().await
    }

    pub async fn teams(&self) -> Result<Vec<TeamPerformance>, AppError> {
        self.repo.teams().await
    }

    pub async fn ranking(&self) -> Result<Vec<AgentRanking>, AppError> {
        self.repo.ranking().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_service() -> ReportService {
        ReportService::new(ReportRepository::seeded())
    }

    #[tokio::test]
    async fn resumo_fecha_com_o_total() {
        let service = seeded_service();
        let summary = service.summary(ReportPeriod::Hoje).await.unwrap();

        assert_eq!(summary.queue + summary.active + summary.completed, summary.total);
        assert_eq!(summary.period, ReportPeriod::Hoje);
    }

    #[tokio::test]
    async fn ranking_vem_ordenado_por_posicao() {
        let service = seeded_service();
        let ranking = service.ranking().await.unwrap();

        assert_eq!(ranking.len(), 5);
        for (index, agent) in ranking.iter().enumerate() {
            assert_eq!(agent.position as usize, index + 1);
        }
    }

    #[tokio::test]
    async fn distribuicao_de_tempo_soma_cem_por_cento() {
        let service = seeded_service();
        let report = service.handling_time().await.unwrap();

        let total: u32 = report.buckets.iter().map(|bucket| bucket.share).sum();
        assert_eq!(total, 100);
    }
}
