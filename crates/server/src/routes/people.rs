use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};
use service::phonebook::{Person, PersonId, PersonInput};
use tracing::debug;

use crate::{errors::ApiError, state::ServerState};

fn parse_id(raw: &str) -> Result<PersonId, ApiError> {
    raw.parse::<PersonId>()
        .map_err(|e| ApiError::BadRequest(format!("invalid person id {raw:?}: {e}")))
}

// A body that is not a urlencoded form is a client error, like a missing field.
fn form_input(form: Result<Form<PersonInput>, FormRejection>) -> Result<PersonInput, ApiError> {
    form.map(|Form(input)| input)
        .map_err(|e| ApiError::BadRequest(e.body_text()))
}

/// `GET /people`: 200 with a JSON array, or 204 when the phonebook is empty.
pub async fn list(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let people = state.phonebook.list().await?;
    if people.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    debug!(count = people.len(), "list people");
    Ok(Json(people).into_response())
}

/// `POST /people` with form fields `name` and `phoneNr`.
pub async fn create(
    State(state): State<ServerState>,
    form: Result<Form<PersonInput>, FormRejection>,
) -> Result<StatusCode, ApiError> {
    let input = form_input(form)?;
    state.phonebook.create(input).await?;
    Ok(StatusCode::CREATED)
}

pub async fn get(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Person>, ApiError> {
    let id = parse_id(&raw_id)?;
    let person = state.phonebook.get(id).await?;
    Ok(Json(person))
}

/// `PUT /people/{id}`: full replace. The id is checked before the body.
pub async fn update(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
    form: Result<Form<PersonInput>, FormRejection>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    let input = form_input(form)?;
    state.phonebook.update(id, input).await?;
    Ok(StatusCode::OK)
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    state.phonebook.delete(id).await?;
    Ok(StatusCode::OK)
}
