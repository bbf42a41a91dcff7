use crate::errors::AppError;
use crate::models::{PrizeStateResponse, ProgressResponse, ToggleRequest, ToggleResponse};
use crate::progress;
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use tracing::{error, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let data = state.data.lock().await;
    Html(render_index(&data))
}

pub async fn get_progress(State(state): State<AppState>) -> Result<Json<ProgressResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(progress::snapshot(&data)))
}

pub async fn get_prize(State(state): State<AppState>) -> Json<PrizeStateResponse> {
    let data = state.data.lock().await;
    Json(PrizeStateResponse {
        claimed: data.prize_claimed,
    })
}

pub async fn toggle(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let id = payload.id.trim();
    // The claim decision, flag write, and persist all happen under the lock;
    // the upstream fetch must not, or a hung request would block every other
    // handler. A failed fetch still counts as claimed and is never retried.
    let (snapshot, claiming) = {
        let mut data = state.data.lock().await;
        if data.get(id).is_none() {
            return Err(AppError::bad_request(format!("unknown tip id '{id}'")));
        }

        data.set(id, u8::from(payload.done));
        let mut snapshot = progress::snapshot(&data);

        let claiming = !data.prize_claimed && snapshot.ratio >= progress::PRIZE_THRESHOLD;
        if claiming {
            data.prize_claimed = true;
            snapshot.prize_claimed = true;
        }
        persist_data(&state.data_path, &data).await?;
        (snapshot, claiming)
    };

    let mut prize = None;
    let mut alert = None;
    if claiming {
        info!("prize threshold reached at {}", snapshot.label);
        match state.prizes.fetch_prize().await {
            Ok(image) => prize = Some(image),
            Err(err) => {
                error!("prize fetch failed: {}", err.message);
                alert = Some(format!("Could not fetch your prize image: {}", err.message));
            }
        }
    }

    Ok(Json(ToggleResponse {
        checked: payload.done,
        progress: snapshot,
        prize,
        alert,
    }))
}
