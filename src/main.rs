use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Responder};
use dotenv::dotenv;
use std::env;

mod convert;
mod domain;
mod models;

use crate::convert::{to_bep_response, to_eoq_response, to_lp_response, to_queue_response};
use crate::domain::breakeven::{self, BepInput};
use crate::domain::eoq::{self, EoqInput};
use crate::domain::lp::{self, LpProblem};
use crate::domain::queueing::{self, QueueInput};
use crate::domain::solver::LpSolver;
use crate::domain::solver_factory::{create_solver, SolverType};
use crate::domain::validate::{self, CalcError};
use crate::models::{BepRequest, EoqRequest, ErrorBody, LpRequest, QueueRequest};

// ---------- App configuration ----------

#[derive(Clone)]
struct AppConfig {
    /// When set, /solve/* requires a matching X-API-Key header.
    api_key: Option<String>,
}

fn authorized(config: &AppConfig, req: &HttpRequest) -> bool {
    match &config.api_key {
        None => true,
        Some(key) => req
            .headers()
            .get("X-API-Key")
            .and_then(|value| value.to_str().ok())
            .map(|value| value == key)
            .unwrap_or(false),
    }
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(serde_json::json!({ "error": "missing or invalid API key" }))
}

fn failure(error: CalcError) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ErrorBody::from(error))
}

// ---------- Route handlers ----------

/// POST /solve/lp
async fn solve_lp(
    config: web::Data<AppConfig>,
    solver: web::Data<Box<dyn LpSolver>>,
    req: HttpRequest,
    body: web::Json<LpRequest>,
) -> impl Responder {
    if !authorized(&config, &req) {
        return unauthorized();
    }
    let body = body.into_inner();
    let problem = LpProblem {
        c1: body.c1,
        c2: body.c2,
        a1: body.a1,
        a2: body.a2,
        b1: body.b1,
        a3: body.a3,
        a4: body.a4,
        b2: body.b2,
    };
    if let Err(error) = validate::check_lp(&problem) {
        return failure(error);
    }
    match solver.solve(&problem) {
        Ok(solution) => {
            HttpResponse::Ok().json(to_lp_response(solution, lp::region_series(&problem)))
        }
        Err(error) => failure(error),
    }
}

/// POST /solve/eoq
async fn solve_eoq(
    config: web::Data<AppConfig>,
    req: HttpRequest,
    body: web::Json<EoqRequest>,
) -> impl Responder {
    if !authorized(&config, &req) {
        return unauthorized();
    }
    let body = body.into_inner();
    let input = EoqInput {
        demand: body.demand,
        ordering_cost: body.ordering_cost,
        holding_cost: body.holding_cost,
    };
    match eoq::compute(&input) {
        Ok(result) => HttpResponse::Ok().json(to_eoq_response(result)),
        Err(error) => failure(error),
    }
}

/// POST /solve/queue
async fn solve_queue(
    config: web::Data<AppConfig>,
    req: HttpRequest,
    body: web::Json<QueueRequest>,
) -> impl Responder {
    if !authorized(&config, &req) {
        return unauthorized();
    }
    let body = body.into_inner();
    let input = QueueInput {
        arrival_rate: body.arrival_rate,
        service_rate: body.service_rate,
    };
    match queueing::compute(&input) {
        Ok(result) => HttpResponse::Ok().json(to_queue_response(result)),
        Err(error) => failure(error),
    }
}

/// POST /solve/bep
async fn solve_bep(
    config: web::Data<AppConfig>,
    req: HttpRequest,
    body: web::Json<BepRequest>,
) -> impl Responder {
    if !authorized(&config, &req) {
        return unauthorized();
    }
    let body = body.into_inner();
    let input = BepInput {
        fixed_cost: body.fixed_cost,
        variable_cost: body.variable_cost,
        selling_price: body.selling_price,
    };
    match breakeven::compute(&input) {
        Ok(result) => HttpResponse::Ok().json(to_bep_response(result)),
        Err(error) => failure(error),
    }
}

/// GET /health
async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

/// GET /docs
async fn docs() -> impl Responder {
    let docs_html = include_str!("../static/docs.html");
    HttpResponse::Ok().content_type("text/html").body(docs_html)
}

/// GET / - Redirect to docs
async fn root_redirect() -> impl Responder {
    HttpResponse::Found()
        .append_header(("Location", "/docs"))
        .finish()
}

// ---------- Server bootstrap ----------
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let _sentry_guard = env::var("SENTRY_DSN").ok().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(9000);

    let json_limit = env::var("JSON_PAYLOAD_LIMIT")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(2 * 1024 * 1024); // default 2 MB

    let solver_type = SolverType::from_env();
    let config = AppConfig {
        api_key: env::var("API_KEY").ok(),
    };

    println!(
        "Starting server on http://127.0.0.1:{} ({} solver)",
        port,
        create_solver(solver_type).name()
    );
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(sentry_actix::Sentry::new())
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(create_solver(solver_type)))
            .app_data(
                web::JsonConfig::default()
                    .limit(json_limit)
                    .error_handler(|err, _| {
                        let err_string = err.to_string();
                        actix_web::error::InternalError::from_response(
                            err,
                            HttpResponse::BadRequest()
                                .json(serde_json::json!({ "error": err_string })),
                        )
                        .into()
                    }),
            )
            .route("/", web::get().to(root_redirect))
            .route("/solve/lp", web::post().to(solve_lp))
            .route("/solve/eoq", web::post().to(solve_eoq))
            .route("/solve/queue", web::post().to(solve_queue))
            .route("/solve/bep", web::post().to(solve_bep))
            .route("/health", web::get().to(health_check))
            .route("/docs", web::get().to(docs))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
