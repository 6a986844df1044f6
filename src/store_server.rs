use std::net::TcpListener;

use actix_web::{dev::Server, middleware::NormalizePath, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{routes::configure_routes, store::InMemorySkillStore};

/// Builds the development store server on an already bound listener.
///
/// All workers share the same `store`, so records created through one
/// connection are visible to every other.
pub fn run(
    listener: TcpListener,
    store: web::Data<InMemorySkillStore>,
    workers: usize,
) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .listen(listener)?
    .workers(workers)
    .run();

    Ok(server)
}
