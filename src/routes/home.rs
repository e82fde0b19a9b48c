use actix_web::HttpResponse;

/// Static descriptor of the service and its endpoints.
pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Submission Backend API",
        "status": "running",
        "endpoints": {
            "/api": "GET - Get all submissions",
            "/api/count": "GET - Count all submissions",
            "/submit": "POST - Submit new data",
            "/health": "GET - Health check",
        }
    }))
}
