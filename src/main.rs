pub mod modules;
pub mod shared;
pub use modules::contact;
pub use modules::content;
pub use modules::email;
pub use modules::portfolio;
pub mod health;

use crate::contact::adapter::incoming::web::routes::{contact_page_handler, submit_contact_handler};
use crate::contact::adapter::outgoing::EmailContactRelay;
use crate::contact::application::ports::incoming::use_cases::SubmitContactMessageUseCase;
use crate::contact::application::services::SubmitContactMessageService;
use crate::content::adapter::outgoing::ContentSource;
use crate::content::application::ports::outgoing::ContentClient;
use crate::email::adapter::outgoing::MailSettings;
use crate::portfolio::adapter::incoming::web::routes::{
    about_page_handler, certifications_page_handler, experience_page_handler, home_page_handler,
    project_detail_page_handler, projects_page_handler, redirect_home, skills_page_handler,
};
use crate::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::shared::config::{parse_var, process_env, var_or};
use crate::shared::site_profile::SiteProfile;
use crate::shared::web::custom_form_config;

use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
    pub submit_contact_message_use_case: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    pub site: SiteProfile,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let host = var_or(&process_env, "HOST", "127.0.0.1");
    let port: u16 = parse_var(&process_env, "PORT", 8080)?;
    let site = SiteProfile::from_lookup(&process_env);

    // CONTENT STORE
    let content_client: Arc<dyn ContentClient> =
        ContentSource::from_lookup(&process_env)?.connect()?;
    let portfolio = PortfolioUseCases::new(Arc::clone(&content_client));

    // CONTACT
    let mail_settings = MailSettings::from_lookup(&process_env, &site.owner_email)?;
    let email_sender = mail_settings
        .build_sender()
        .context("Failed to build SMTP transport")?;
    let contact_relay = EmailContactRelay::new(email_sender, &mail_settings.inbox);
    let submit_contact_message_use_case: Arc<dyn SubmitContactMessageUseCase + Send + Sync> =
        Arc::new(SubmitContactMessageService::new(contact_relay));

    let state = AppState {
        portfolio,
        submit_contact_message_use_case,
        site,
    };

    let server_url = format!("{host}:{port}");
    info!("Listening on http://{}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&content_client)))
            .app_data(custom_form_config())
            .configure(init_routes)
            .default_service(web::to(redirect_home))
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Pages
    cfg.service(home_page_handler);
    cfg.service(about_page_handler);
    cfg.service(skills_page_handler);
    cfg.service(projects_page_handler);
    cfg.service(project_detail_page_handler);
    cfg.service(experience_page_handler);
    cfg.service(certifications_page_handler);
    // Contact
    cfg.service(contact_page_handler);
    cfg.service(submit_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
