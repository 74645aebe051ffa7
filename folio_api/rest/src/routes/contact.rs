use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::{ContactReceipt, ContactSendMessageError, ContactService};
use folio_models::contact::ContactMessage;
use tracing::{debug, warn};

use crate::{
    errors::{
        error, error_with_details, internal_server_error, CONFIGURATION_ERROR, FIELD_TOO_LONG,
        INVALID_EMAIL_ADDRESS, INVALID_REQUEST_BODY, MISSING_REQUIRED_FIELDS, SEND_FAILED,
    },
    models::contact::{ApiContactMessage, ApiContactMessageError, ApiSendMessageResponse},
};

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/send-message", routing::post(send_message))
        .with_state(service)
}

async fn send_message(
    service: State<Arc<impl ContactService>>,
    body: Result<Json<ApiContactMessage>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            debug!("rejecting contact message: {rejection}");
            return error_with_details(
                StatusCode::BAD_REQUEST,
                INVALID_REQUEST_BODY,
                rejection.body_text(),
            );
        }
    };

    let message = match ContactMessage::try_from(body) {
        Ok(message) => message,
        Err(err) => return validation_error(err),
    };

    match service.send_message(message).await {
        Ok(ContactReceipt::Sent(email_id)) => Json(ApiSendMessageResponse {
            message: "Message sent successfully",
            email_id: Some(email_id),
        })
        .into_response(),
        Ok(ContactReceipt::Accepted) => Json(ApiSendMessageResponse {
            message: "Message received",
            email_id: None,
        })
        .into_response(),
        Err(err @ ContactSendMessageError::Configuration(_)) => error_with_details(
            StatusCode::INTERNAL_SERVER_ERROR,
            CONFIGURATION_ERROR,
            err.to_string(),
        ),
        Err(ContactSendMessageError::Send(err)) => {
            error_with_details(StatusCode::INTERNAL_SERVER_ERROR, SEND_FAILED, err.detail)
        }
        Err(ContactSendMessageError::Other(err)) => internal_server_error(err),
    }
}

fn validation_error(err: ApiContactMessageError) -> Response {
    warn!(?err, "rejecting invalid contact message");
    match err {
        ApiContactMessageError::Missing(fields) => error_with_details(
            StatusCode::BAD_REQUEST,
            MISSING_REQUIRED_FIELDS,
            format!("The following fields are required: {}", fields.join(", ")),
        ),
        ApiContactMessageError::InvalidEmail => {
            error(StatusCode::BAD_REQUEST, INVALID_EMAIL_ADDRESS)
        }
        ApiContactMessageError::TooLong(field) => error_with_details(
            StatusCode::BAD_REQUEST,
            FIELD_TOO_LONG,
            format!("The {field} field is too long"),
        ),
    }
}
