use actix_session::SessionExt;
use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    web,
};

use crate::auth::gate::{AccessGate, GateDecision, RouteRules};
use crate::auth::identity::claim_from;

/// Middleware function applying the access gate to every request.
/// Must be wrapped inside the session middleware so the cookie is readable.
pub async fn access_gate(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let path = req.path().to_owned();

    let decision = match req.app_data::<web::Data<AccessGate>>() {
        Some(gate) => {
            let gate = gate.clone();
            let claim = claim_from(&req.get_session());
            gate.evaluate(&path, claim).await
        }
        None => {
            log::error!("AccessGate missing from app data, treating {path} as signed out");
            let rules = RouteRules::default();
            if rules.is_excluded(&path) {
                GateDecision::Continue
            } else {
                rules.decide(&path, false)
            }
        }
    };

    match decision {
        GateDecision::Continue => next.call(req).await.map(|res| res.map_into_left_body()),
        GateDecision::RedirectTo(location) => {
            let response = HttpResponse::SeeOther()
                .insert_header(("Location", location))
                .finish();
            Ok(req.into_response(response).map_into_right_body())
        }
    }
}
