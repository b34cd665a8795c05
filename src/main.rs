//src/main.rs

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod docs;
mod handlers;
mod models;
mod services;
mod store;

use crate::config::AppState;
use crate::docs::ApiDoc;

/// Monta o router completo sobre o estado em memória.
fn app(app_state: AppState) -> Router {
    let attendance_routes = Router::new()
        .route("/", get(handlers::attendance::list_conversations))
        .route("/{id}", get(handlers::attendance::get_conversation))
        .route("/{id}/messages", post(handlers::attendance::send_message))
        .route(
            "/{id}/recording",
            post(handlers::attendance::toggle_recording),
        )
        .route("/{id}/status", put(handlers::attendance::set_status))
        .route("/{id}/transfer", post(handlers::attendance::transfer))
        .route("/{id}/conclude", post(handlers::attendance::conclude));

    let contact_routes = Router::new()
        .route(
            "/",
            post(handlers::contacts::create_contact).get(handlers::contacts::list_contacts),
        )
        .route("/tags", get(handlers::contacts::list_tags))
        // A seleção múltipla mora no servidor junto com a coleção.
        .route(
            "/selection",
            post(handlers::contacts::select_all).delete(handlers::contacts::clear_selection),
        )
        .route("/selection/delete", post(handlers::contacts::delete_selected))
        .route(
            "/{id}",
            put(handlers::contacts::update_contact).delete(handlers::contacts::confirm_removal),
        )
        .route("/{id}/selection", post(handlers::contacts::toggle_selection))
        .route(
            "/{id}/removal",
            post(handlers::contacts::request_removal).delete(handlers::contacts::cancel_removal),
        )
        .route("/{id}/tags", post(handlers::contacts::add_tag))
        .route("/{id}/tags/{tag}", delete(handlers::contacts::remove_tag))
        .route("/{id}/fields", post(handlers::contacts::set_custom_field))
        .route(
            "/{id}/fields/{key}",
            delete(handlers::contacts::remove_custom_field),
        );

    let crm_routes = Router::new()
        .route(
            "/leads",
            post(handlers::crm::create_lead).get(handlers::crm::list_leads),
        )
        .route("/leads/{id}", put(handlers::crm::update_lead))
        .route("/leads/{id}/move", post(handlers::crm::move_lead))
        .route("/board", get(handlers::crm::get_board))
        .route("/catalogs", get(handlers::crm::get_catalogs));

    let campaign_routes = Router::new()
        .route(
            "/",
            post(handlers::campaigns::create_campaign).get(handlers::campaigns::list_campaigns),
        )
        .route("/options", get(handlers::campaigns::get_options))
        .route(
            "/{id}",
            put(handlers::campaigns::update_campaign)
                .delete(handlers::campaigns::delete_campaign),
        );

    let report_routes = Router::new()
        .route("/summary", get(handlers::reports::get_summary))
        .route("/chart", get(handlers::reports::get_chart))
        .route("/handling-time", get(handlers::reports::get_handling_time))
        .route("/teams", get(handlers::reports::get_team_performance))
        .route("/ranking", get(handlers::reports::get_ranking));

    let settings_routes = Router::new()
        .route(
            "/users",
            post(handlers::settings::create_user).get(handlers::settings::list_users),
        )
        .route(
            "/users/{id}",
            put(handlers::settings::update_user).delete(handlers::settings::delete_user),
        )
        .route(
            "/teams",
            post(handlers::settings::create_team).get(handlers::settings::list_teams),
        )
        .route(
            "/teams/{id}",
            put(handlers::settings::update_team).delete(handlers::settings::delete_team),
        )
        .route(
            "/account",
            get(handlers::settings::get_account).put(handlers::settings::update_account),
        )
        .route(
            "/hours",
            get(handlers::settings::get_hours).put(handlers::settings::update_hours),
        );

    let profile_routes = Router::new().route(
        "/",
        get(handlers::profile::get_profile).put(handlers::profile::update_profile),
    );

    // Combina tudo no router principal
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/atendimentos", attendance_routes)
        .nest("/api/contatos", contact_routes)
        .nest("/api/crm", crm_routes)
        .nest("/api/campanhas", campaign_routes)
        .nest("/api/relatorios", report_routes)
        .nest("/api/configuracoes", settings_routes)
        .nest("/api/perfil", profile_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state)
}

#[tokio::main]
async fn main() {
    // Inicializa o logger.
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");

    // Inicia o servidor
    let addr = config::bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());
    axum::serve(listener, app(app_state))
        .await
        .expect("Erro no servidor Axum");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    fn test_app() -> Router {
        app(AppState::new().unwrap())
    }

    #[tokio::test]
    async fn health_responde_ok() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn quadro_filtrado_traz_o_total_formatado() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/crm/board?q=maria")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("R$15.000,00"));
    }

    #[tokio::test]
    async fn lead_sem_email_vira_400_com_detalhes() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/crm/leads")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name": "Fulano", "email": "   "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["details"]["email"].is_array());
    }

    #[tokio::test]
    async fn conversas_listam_por_fila() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/atendimentos?fila=novos")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 3);
    }
}
