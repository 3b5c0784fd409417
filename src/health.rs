use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::{redis::AsyncCommands, Pool};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
/// - No DB
/// - No Redis
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Checks critical dependencies
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    redis: web::Data<Arc<Pool>>,
) -> impl Responder {
    let db_status = match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await
    {
        Ok(_) => "ok",
        Err(_) => "unavailable",
    };

    let redis_status = match redis.get().await {
        Ok(mut conn) => match conn.ping::<String>().await {
            Ok(_) => "ok",
            Err(_) => "unavailable",
        },
        Err(_) => "unavailable",
    };

    let all_ok = db_status == "ok" && redis_status == "ok";

    let body = ReadinessResponse {
        status: if all_ok { "ready" } else { "degraded" },
        database: db_status,
        redis: redis_status,
    };

    if all_ok {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
