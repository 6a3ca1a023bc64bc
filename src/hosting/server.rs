use super::*;
use crate::api::*;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use serde::Serialize;

/// Address served when `BIND_ADDR` is unset.
const DEFAULT_BIND: &str = "127.0.0.1:8080";

pub struct Server;

impl Server {
    pub async fn run() -> Result<(), std::io::Error> {
        let state = web::Data::new(Casino::default());
        let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND.to_string());
        log::info!("starting hosting server on {}", bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .route("/strategies", web::post().to(register))
                .route("/initialize", web::post().to(initialize))
                .route("/move", web::post().to(play))
                .route("/step", web::post().to(advance))
                .route("/ai_move", web::post().to(ai_move))
                .route("/simulate", web::post().to(simulate))
                .route("/batch_simulate", web::post().to(batch_simulate))
                .route("/tournament", web::post().to(tournament))
                .route("/analyze_strategy", web::post().to(analyze_strategy))
                .route("/analyze_arena", web::post().to(analyze_arena))
                .route("/find_best", web::post().to(find_best))
                .route("/sessions", web::post().to(open))
                .route("/sessions/{game_id}", web::get().to(state_of))
                .route("/sessions/{game_id}", web::delete().to(close))
                .route("/sessions/{game_id}/move", web::post().to(session_move))
                .route("/sessions/{game_id}/step", web::post().to(step))
                .route("/sessions/{game_id}/undo", web::post().to(undo))
                .route("/sessions/{game_id}/reset", web::post().to(reset))
                .route("/sessions/{game_id}/abandon", web::post().to(abandon))
        })
        .workers(4)
        .bind(bind)?
        .run()
        .await
    }
}

/// 404 for things that do not exist, 400 for everything the caller got wrong
fn reply<T: Serialize>(result: anyhow::Result<T>) -> HttpResponse {
    match result {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) if e.is::<Vacant>() => HttpResponse::NotFound().body(e.to_string()),
        Err(e) if e.downcast_ref::<ApiError>().is_some_and(ApiError::is_missing) => {
            HttpResponse::NotFound().body(e.to_string())
        }
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
    }
}

async fn register(casino: web::Data<Casino>, body: web::Json<RegisterRequest>) -> impl Responder {
    reply(
        casino
            .register(body.into_inner())
            .await
            .map(|_| serde_json::json!({ "status": "registered" })),
    )
}

async fn initialize(casino: web::Data<Casino>, body: web::Json<InitializeRequest>) -> impl Responder {
    let request = body.into_inner();
    reply(casino.compute(move |s| s.initialize(request)).await)
}

async fn play(casino: web::Data<Casino>, body: web::Json<MoveRequest>) -> impl Responder {
    let request = body.into_inner();
    reply(casino.compute(move |s| s.play(request)).await)
}

async fn advance(casino: web::Data<Casino>, body: web::Json<StepRequest>) -> impl Responder {
    let request = body.into_inner();
    reply(casino.compute(move |s| s.step(request)).await)
}

async fn ai_move(casino: web::Data<Casino>, body: web::Json<AiMoveRequest>) -> impl Responder {
    let request = body.into_inner();
    reply(casino.compute(move |s| s.ai_move(request)).await)
}

async fn simulate(casino: web::Data<Casino>, body: web::Json<SimulateRequest>) -> impl Responder {
    let request = body.into_inner();
    reply(casino.compute(move |s| s.simulate(request)).await)
}

async fn batch_simulate(casino: web::Data<Casino>, body: web::Json<BatchRequest>) -> impl Responder {
    let request = body.into_inner();
    reply(casino.compute(move |s| s.batch_simulate(request)).await)
}

async fn tournament(casino: web::Data<Casino>, body: web::Json<TournamentRequest>) -> impl Responder {
    let request = body.into_inner();
    reply(casino.compute(move |s| s.tournament(request)).await)
}

async fn analyze_strategy(
    casino: web::Data<Casino>,
    body: web::Json<AnalyzeStrategyRequest>,
) -> impl Responder {
    let request = body.into_inner();
    reply(casino.compute(move |s| s.analyze_strategy(request)).await)
}

async fn analyze_arena(
    casino: web::Data<Casino>,
    body: web::Json<AnalyzeArenaRequest>,
) -> impl Responder {
    let request = body.into_inner();
    reply(casino.compute(move |s| s.analyze_arena(request)).await)
}

async fn find_best(casino: web::Data<Casino>, body: web::Json<FindBestRequest>) -> impl Responder {
    let request = body.into_inner();
    reply(casino.compute(move |s| s.find_best(request)).await)
}

async fn open(casino: web::Data<Casino>, body: web::Json<StartRequest>) -> impl Responder {
    reply(casino.open(body.into_inner()).await)
}

async fn state_of(casino: web::Data<Casino>, path: web::Path<String>) -> impl Responder {
    reply(casino.state(&path.into_inner()).await)
}

async fn close(casino: web::Data<Casino>, path: web::Path<String>) -> impl Responder {
    reply(
        casino
            .close(&path.into_inner())
            .await
            .map(|_| serde_json::json!({ "status": "closed" })),
    )
}

async fn session_move(
    casino: web::Data<Casino>,
    path: web::Path<String>,
    body: web::Json<SessionMove>,
) -> impl Responder {
    reply(casino.play(&path.into_inner(), &body.address).await)
}

async fn step(casino: web::Data<Casino>, path: web::Path<String>) -> impl Responder {
    reply(casino.step(&path.into_inner()).await)
}

async fn undo(casino: web::Data<Casino>, path: web::Path<String>) -> impl Responder {
    reply(casino.undo(&path.into_inner()).await)
}

async fn reset(casino: web::Data<Casino>, path: web::Path<String>) -> impl Responder {
    reply(casino.reset(&path.into_inner()).await)
}

async fn abandon(casino: web::Data<Casino>, path: web::Path<String>) -> impl Responder {
    reply(casino.abandon(&path.into_inner()).await)
}
