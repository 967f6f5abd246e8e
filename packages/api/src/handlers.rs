use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::Json;

use homeowner_parser::config::has_allowed_extension;
use homeowner_parser::reader::read_rows;
use homeowner_parser::{parse_rows, ParserError};

use crate::models::{ErrorResponse, ParseResponse};

/// Error response for rejected uploads.
type Rejection = (StatusCode, Json<ErrorResponse>);

fn unprocessable(message: impl Into<String>) -> Rejection {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Accept a multipart upload of a homeowner CSV and parse every row.
///
/// The request must carry a `file` field with a `.csv` or `.txt`
/// filename. The whole batch is parsed or rejected: a row without a
/// recognized title fails the request with 422 and the offending segment.
pub async fn parse_upload(mut multipart: Multipart) -> Result<Json<ParseResponse>, Rejection> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::error!(error = %e, "multipart read failed");
        unprocessable("malformed multipart request")
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let Some(file_name) = field.file_name().map(str::to_string) else {
            return Err(unprocessable("'file' field has no filename"));
        };
        if !has_allowed_extension(&file_name) {
            return Err(unprocessable(format!(
                "unsupported file type: '{file_name}' (expected .csv or .txt)"
            )));
        }

        let bytes = field.bytes().await.map_err(|e| {
            tracing::error!(error = %e, "upload read failed");
            unprocessable("failed to read uploaded file")
        })?;
        upload = Some(bytes);
        break;
    }

    let Some(bytes) = upload else {
        return Err(unprocessable("missing 'file' field"));
    };

    let rows = read_rows(bytes.as_ref()).map_err(|e| {
        tracing::error!(error = %e, "CSV read failed");
        unprocessable(e.to_string())
    })?;

    let people = parse_rows(&rows).map_err(|e| match e {
        ParserError::MissingTitle(_) => unprocessable(e.to_string()),
        other => {
            tracing::error!(error = %other, "parse failed");
            unprocessable(other.to_string())
        }
    })?;

    Ok(Json(ParseResponse {
        total: people.len(),
        data: people,
    }))
}
