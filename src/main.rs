use std::net::SocketAddr;
use std::process;
use std::sync::Arc;

use warp::Filter;

use zordly_chat::config::AppConfig;
use zordly_chat::knowledge::KnowledgeBase;
use zordly_chat::llm::cohere::{CohereClient, CohereModel};
use zordly_chat::llm::Completer;
use zordly_chat::routes::{configure_routes, handle_rejection};
use zordly_chat::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("startup failed: {}", e);
            process::exit(1);
        }
    };

    let knowledge = match KnowledgeBase::load(&config.knowledge_path) {
        Ok(knowledge) => knowledge,
        Err(e) => {
            log::error!("startup failed: {}", e);
            process::exit(1);
        }
    };
    log::info!(
        "loaded {} knowledge documents from {}",
        knowledge.len(),
        config.knowledge_path.display()
    );

    let client = match CohereClient::new(config.api_key.clone(), CohereModel::CommandRPlus) {
        Ok(client) => client,
        Err(e) => {
            log::error!("startup failed: {}", e);
            process::exit(1);
        }
    };

    let completer = Completer::new(Arc::new(client), Arc::new(knowledge));
    let state = AppState::new(completer);

    let cors = warp::cors()
        .allow_origins(config.allowed_origins.iter().map(String::as_str))
        .allow_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_headers(vec!["content-type"])
        .allow_credentials(true);

    let routes = configure_routes(state).recover(handle_rejection).with(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    log::info!("Starting server on http://{}", addr);
    warp::serve(routes).run(addr).await;
}
