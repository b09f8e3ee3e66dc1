use axum::{
    body::Bytes,
    extract::{Multipart, State},
    http::StatusCode,
};

use crate::AppState;
use crate::error::AppErr;
use crate::storage;

struct UploadForm {
    file: Option<(String, Bytes)>,
    task_id: Option<i64>,
}

async fn read_form(mut multipart: Multipart) -> Result<UploadForm, AppErr> {
    let mut form = UploadForm {
        file: None,
        task_id: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppErr::bad_request(e.body_text()))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().to_owned();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppErr::bad_request(e.body_text()))?;
                // Browsers send an empty part when nothing was chosen.
                if !(file_name.is_empty() && bytes.is_empty()) {
                    form.file = Some((file_name, bytes));
                }
            }
            Some("task_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppErr::bad_request(e.body_text()))?;
                let text = text.trim();
                if !text.is_empty() {
                    let id = text
                        .parse()
                        .map_err(|_| AppErr::bad_request("task_id must be an integer"))?;
                    form.task_id = Some(id);
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

/// POST /upload — store an attachment, optionally linking it to a task.
///
/// Responds `201 Created` with the stored file name.
pub async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, String), AppErr> {
    let form = read_form(multipart).await?;
    let Some((client_name, bytes)) = form.file else {
        return Err(AppErr::bad_request("file is required"));
    };

    let stored = state
        .uploads
        .store(&client_name, &bytes)
        .map_err(AppErr::from_db("store upload"))?;

    if let Some(task_id) = form.task_id {
        let attached = {
            let conn = state.db.conn();
            storage::attach_file(&conn, state.config.user_id, task_id, &stored)
        };
        let attached = match attached {
            Ok(attached) => attached,
            Err(e) => {
                discard(&state, &stored);
                return Err(AppErr::from_db("attach upload")(e));
            }
        };
        if !attached {
            discard(&state, &stored);
            return Err(AppErr::not_found());
        }
        tracing::info!(task_id, file = %stored, "attached upload to task");
    }

    Ok((StatusCode::CREATED, stored))
}

fn discard(state: &AppState, stored: &str) {
    let path = state.uploads.dir().join(stored);
    if let Err(e) = std::fs::remove_file(&path) {
        tracing::warn!("removing {}: {e}", path.display());
    }
}
