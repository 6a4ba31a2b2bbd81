mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::middleware::from_fn_with_state;
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config, middleware::auth::require_auth, startup, state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        startup::seed_categories(&db).await?;
        let ai_client = startup::setup_ai_client(&config)?;

        tracing::info!("Starting server");

        let state = AppState::new(db, ai_client, config.cookie_secure);

        let router = dioxus::server::router(App)
            .merge(server::router::router().with_state(state.clone()))
            .layer(from_fn_with_state(state, require_auth));

        Ok(router)
    })
}
