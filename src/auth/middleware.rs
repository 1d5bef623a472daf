use actix_session::SessionExt;
use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
};

use super::guard::{Access, authorize, is_protected};
use super::session::current_identity;

/// Middleware function that checks for an authenticated session.
/// Redirects to the entry view if no identity is found. Unknown paths pass
/// through so they reach the not-found view.
pub async fn require_auth(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if !is_protected(req.path()) {
        return next.call(req).await.map(|res| res.map_into_left_body());
    }
    let identity = current_identity(&req.get_session());

    if let Access::Redirect(target) = authorize(None, identity.as_ref()) {
        let response = HttpResponse::SeeOther()
            .insert_header(("Location", target))
            .finish();
        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}
