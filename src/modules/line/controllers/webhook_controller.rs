use actix_web::{post, web, HttpResponse};
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Acknowledgement body for inbound LINE events
#[derive(Debug, Serialize, Deserialize)]
pub struct WebhookAck {
    pub status: String,
}

/// Receive LINE Messaging API events
///
/// POST /api/line/webhook
///
/// Events are acknowledged without parsing or signature verification;
/// bot features are not implemented yet. The body is drained chunk by chunk,
/// so no payload size limit applies.
#[post("/webhook")]
async fn receive_webhook(mut payload: web::Payload) -> HttpResponse {
    let mut bytes = 0usize;
    while let Some(chunk) = payload.next().await {
        match chunk {
            Ok(chunk) => bytes += chunk.len(),
            Err(e) => {
                warn!(error = %e, "LINE webhook body ended early");
                break;
            }
        }
    }

    info!(bytes, "Received LINE webhook");

    HttpResponse::Ok().json(WebhookAck {
        status: "received".to_string(),
    })
}

/// Configure LINE webhook routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/line").service(receive_webhook));
}
