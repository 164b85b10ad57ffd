use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use futures::future::FutureExt;
use tokio::sync::mpsc;
use warp::Filter;

use log::{info, initialize_logger};
use recipebook::config::{get_variable, get_variable_or, parse_list};
use recipebook::db::SqliteDb;
use recipebook::environment::{Config, Environment};
use recipebook::store::DiskStore;
use recipebook::{i18n, routes, seed};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let logger = initialize_logger();

    debug_assert!(i18n::in_parity(), "translation dictionaries out of step");

    let main_port: u16 = get_variable("RECIPEBOOK_PORT")
        .parse()
        .expect("parse RECIPEBOOK_PORT as u16");
    let admin_port: u16 = get_variable("RECIPEBOOK_ADMIN_PORT")
        .parse()
        .expect("parse RECIPEBOOK_ADMIN_PORT as u16");

    info!(logger, "Starting..."; "main_port" => main_port, "admin_port" => admin_port);
    let logger = Arc::new(logger);

    let static_dir = PathBuf::from(get_variable_or("RECIPEBOOK_STATIC_DIR", "static"));
    let upload_dir = static_dir.join("uploads");
    fs::create_dir_all(&upload_dir).expect("ensure upload directory exists");

    info!(logger, "Creating database pool...");
    let connection_string = get_variable("RECIPEBOOK_DB_CONNECTION_STRING");
    let pool = sqlx::Pool::connect(&connection_string)
        .await
        .expect("create database pool from RECIPEBOOK_DB_CONNECTION_STRING");
    let db = Arc::new(SqliteDb::new(pool));

    seed::bootstrap(logger.clone(), &*db)
        .await
        .expect("initialize database schema and seed data");

    let store = Arc::new(DiskStore::new(upload_dir, "uploads"));

    let config = Arc::new(Config::new(
        get_variable("RECIPEBOOK_SESSION_SECRET"),
        get_variable_or("RECIPEBOOK_SESSION_TTL_DAYS", "30")
            .parse::<i64>()
            .expect("parse RECIPEBOOK_SESSION_TTL_DAYS as i64")
            * 24
            * 60
            * 60,
        parse_list(&get_variable_or(
            "RECIPEBOOK_PHOTO_EXTENSIONS",
            "png,jpg,jpeg,gif",
        )),
    ));

    let environment = Environment::new(logger.clone(), db, store, config);

    let (termination_sender, mut termination_receiver) = mpsc::channel::<()>(1);

    let terminate = Arc::new(move || {
        let termination_sender = termination_sender.clone();

        async move {
            let termination_sender = termination_sender.clone();
            termination_sender.send(()).await.unwrap();
        }
        .boxed()
    });

    let should_terminate = async move {
        termination_receiver.recv().await;
    }
    .shared();

    let ctrlc = {
        let should_terminate = should_terminate.clone();
        let terminate = terminate.clone();

        let signal = tokio::signal::ctrl_c();

        async move {
            let terminate = terminate.clone();

            tokio::select! {
                _ = should_terminate => {},
                _ = signal => {
                    terminate().await;
                }
            }
        }
    };

    let main_server = {
        let should_terminate = should_terminate.clone();

        let logger2 = logger.clone();

        let index_route = routes::make_index_route(environment.clone());
        let set_language_route = routes::make_set_language_route(environment.clone());
        let register_route = routes::make_register_route(environment.clone());
        let login_route = routes::make_login_route(environment.clone());
        let logout_route = routes::make_logout_route(environment.clone());
        let profile_route = routes::make_profile_route(environment.clone());
        let add_review_route = routes::make_add_review_route(environment.clone());
        let static_route = routes::make_static_route(static_dir);

        let routes = index_route
            .or(set_language_route)
            .or(register_route)
            .or(login_route)
            .or(logout_route)
            .or(profile_route)
            .or(add_review_route)
            .or(static_route)
            .recover(move |r| routes::format_rejection(logger2.clone(), r));

        let (_, main_server) =
            warp::serve(routes).bind_with_graceful_shutdown(([0, 0, 0, 0], main_port), async {
                should_terminate.await;
            });

        main_server
    };

    let admin_server = {
        let should_terminate = should_terminate.clone();
        let terminate = terminate.clone();

        let routes = routes::admin::make_healthz_route(environment.clone()).or(
            routes::admin::make_termination_route(environment.clone(), terminate),
        );

        let (_, admin_server) =
            warp::serve(routes).bind_with_graceful_shutdown(([0, 0, 0, 0], admin_port), async {
                should_terminate.await;
            });

        admin_server
    };

    tokio::join!(ctrlc, main_server, admin_server);

    info!(logger, "Exiting gracefully...");

    Ok(())
}
