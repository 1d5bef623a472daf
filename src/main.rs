use actix_web::{App, HttpServer, middleware, web};

use attendance_app::config::AppConfig;
use attendance_app::routes;
use attendance_app::store::WorkspaceRegistry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let registry = WorkspaceRegistry::with_limits(config.workspace_idle, config.max_workspaces);
    let bind_addr = config.bind_addr.clone();

    log::info!("Starting {} at http://{}", config.app_name, bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(routes::session_middleware(&config))
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(registry.clone()))
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            .configure(routes::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(routes::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
