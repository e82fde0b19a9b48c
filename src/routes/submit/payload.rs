//! Decoding of the submit body.
//!
//! The declared content type picks exactly one decoder. A JSON body is never
//! retried as a form or the other way around.

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;

use crate::domain::new_submission::NewSubmission;
use crate::routes::submit::SubmitError;

/// The `name` and `email` fields as they arrived. Either may be absent.
#[derive(Debug, Default, serde::Deserialize)]
pub struct SubmissionFields {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl SubmissionFields {
    /// Collects decoded form pairs. A repeated key keeps its first value.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut fields = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut fields.name,
                "email" => &mut fields.email,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        fields
    }
}

#[derive(Debug)]
pub enum InboundSubmission {
    Json(SubmissionFields),
    Form(SubmissionFields),
}

impl InboundSubmission {
    #[cfg(test)]
    fn fields(&self) -> &SubmissionFields {
        match self {
            InboundSubmission::Json(fields) | InboundSubmission::Form(fields) => fields,
        }
    }

    pub fn into_fields(self) -> SubmissionFields {
        match self {
            InboundSubmission::Json(fields) | InboundSubmission::Form(fields) => fields,
        }
    }
}

impl TryFrom<InboundSubmission> for NewSubmission {
    type Error = String;

    fn try_from(payload: InboundSubmission) -> Result<Self, Self::Error> {
        let fields = payload.into_fields();
        NewSubmission::parse(fields.name, fields.email)
    }
}

enum BodyKind {
    Json,
    Form,
    Other,
}

/// `application/json` and any `application/*+json` count as JSON.
fn body_kind(req: &HttpRequest) -> BodyKind {
    let mime = match req.mime_type() {
        Ok(Some(mime)) => mime,
        _ => return BodyKind::Other,
    };

    if mime.essence_str() == "application/json" {
        return BodyKind::Json;
    }
    if mime.type_().as_str() == "application" && mime.suffix().map(|s| s.as_str()) == Some("json")
    {
        return BodyKind::Json;
    }
    if mime.essence_str() == "application/x-www-form-urlencoded" {
        return BodyKind::Form;
    }
    BodyKind::Other
}

impl FromRequest for InboundSubmission {
    type Error = SubmitError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        match body_kind(req) {
            BodyKind::Json => {
                let json = web::Json::<SubmissionFields>::from_request(req, payload);
                Box::pin(async move {
                    json.await
                        .map(|body| InboundSubmission::Json(body.into_inner()))
                        .map_err(|e| SubmitError::MalformedPayload(e.to_string()))
                })
            }
            BodyKind::Form => {
                let form = web::Form::<Vec<(String, String)>>::from_request(req, payload);
                Box::pin(async move {
                    form.await
                        .map(|pairs| {
                            let fields = SubmissionFields::from_pairs(pairs.into_inner());
                            InboundSubmission::Form(fields)
                        })
                        .map_err(|e| SubmitError::MalformedPayload(e.to_string()))
                })
            }
            // Any other body carries no form fields, so it fails the
            // presence check rather than being rejected as malformed.
            BodyKind::Other => Box::pin(async {
                Ok(InboundSubmission::Form(SubmissionFields::default()))
            }),
        }
    }
}
