//! Image rotation feeds for hero cards and slides
//!
//! A client subscribes once per tile and receives the resolved images followed by
//! one `rotate` event per interval. The timer belongs to the connection; it stops
//! when the client goes away.

use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::{self, Stream, StreamExt};
use serde::Serialize;
use std::{convert::Infallible, sync::Arc, time::Duration};
use uuid::Uuid;

use crate::app::AppState;
use crate::content::fallback::ApplyDefaults;
use crate::content::images::{intervals, next_fallback, rotation_ticks, Rotation};
use crate::content::pages::{HERO_CARD_DEFAULTS, HERO_SLIDE_DEFAULTS};
use crate::domain::hero::{HeroCard, HeroSlide};
use crate::domain::{Entity, Record};
use crate::error::ApiError;
use crate::services::Query;

#[derive(Debug, Serialize)]
struct ImagesFrame<'a> {
    images: &'a [String],
    fallbacks: &'a [String],
    index: usize,
    interval_ms: u64,
}

#[derive(Debug, Serialize)]
struct RotateFrame<'a> {
    index: usize,
    image: &'a str,
    /// What to show if `image` fails to load
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback: Option<&'a str>,
}

fn frame(name: &str, payload: &impl Serialize) -> Result<Event, Infallible> {
    Ok(Event::default()
        .event(name)
        .data(serde_json::to_string(payload).unwrap_or_default()))
}

/// Initial `images` event, then a `rotate` event every `period`.
fn tile_feed(
    images: Vec<String>,
    fallbacks: Vec<String>,
    period: Duration,
) -> impl Stream<Item = Result<Event, Infallible>> {
    let initial = frame(
        "images",
        &ImagesFrame {
            images: &images,
            fallbacks: &fallbacks,
            index: Rotation::new(images.len()).index(),
            interval_ms: period.as_millis() as u64,
        },
    );

    let ticks = rotation_ticks(images.len(), period).map(move |index| {
        let image = images.get(index).map(String::as_str).unwrap_or_default();
        frame(
            "rotate",
            &RotateFrame {
                index,
                image,
                fallback: next_fallback(&fallbacks, image),
            },
        )
    });

    stream::once(async move { initial }).chain(ticks)
}

fn sse<S>(feed: S) -> Sse<S>
where
    S: Stream<Item = Result<Event, Infallible>> + Send + 'static,
{
    Sse::new(feed).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

async fn load_tile<E: Entity>(state: &AppState, id: Uuid) -> Result<Record<E>, ApiError> {
    let query = Query::new().eq("id", id).flag("active");
    state
        .backend
        .select_one::<Record<E>>(E::TABLE, &query)
        .await?
        .ok_or_else(|| ApiError::not_found("Tile not found"))
}

/// GET /hero-cards/:id/rotation
pub async fn hero_card_rotation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    let card = load_tile::<HeroCard>(&state, id)
        .await?
        .apply_defaults(&HERO_CARD_DEFAULTS);

    Ok(sse(tile_feed(
        card.images.to_vec(),
        card.fallbacks,
        intervals::HERO_CARD,
    )))
}

/// GET /hero-slides/:id/rotation
pub async fn hero_slide_rotation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    let slide = load_tile::<HeroSlide>(&state, id)
        .await?
        .apply_defaults(&HERO_SLIDE_DEFAULTS);

    Ok(sse(tile_feed(
        slide.images.to_vec(),
        slide.fallbacks,
        intervals::HERO_SLIDE,
    )))
}
