/// Business logic services layer
use crate::clients::{AlmanacClient, ApodClient};
use crate::domain::Snapshot;
use crate::errors::{ApiError, ApiResult};
use crate::store::SnapshotStore;
use crate::utils::{event_time, str_field};
use chrono::{FixedOffset, NaiveDate, Utc};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// Builds snapshots from the two upstream APIs and installs them in
/// the store.
pub struct SnapshotService {
    store: Arc<SnapshotStore>,
    almanac: AlmanacClient,
    apod: ApodClient,
    offset: FixedOffset,
}

impl SnapshotService {
    pub fn new(
        store: Arc<SnapshotStore>,
        almanac: AlmanacClient,
        apod: ApodClient,
        offset: FixedOffset,
    ) -> Self {
        Self {
            store,
            almanac,
            apod,
            offset,
        }
    }

    /// Today's calendar date at the observer's fixed UTC offset
    pub fn local_today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }

    /// Assemble a snapshot for `today`. Each upstream is tried once;
    /// any failure is logged and leaves that upstream's fields at
    /// their defaults. The two sources fail independently.
    pub async fn build(&self, today: NaiveDate) -> Snapshot {
        let mut snap = Snapshot::default();

        match self.almanac.fetch_oneday(today).await {
            Ok(body) => {
                if let Err(e) = apply_almanac(&mut snap, &body) {
                    warn!("Almanac response missing data: {e}");
                }
            }
            Err(e) => warn_fetch("almanac", &e),
        }

        match self.apod.fetch_apod().await {
            Ok(body) => apply_apod(&mut snap, &body),
            Err(e) => warn_fetch("APOD", &e),
        }

        snap
    }

    /// Build a snapshot for today and atomically install it. Cannot
    /// fail; on total API unavailability an all-defaults snapshot is
    /// installed.
    pub async fn refresh(&self) -> Arc<Snapshot> {
        let today = self.local_today();
        let snap = self.build(today).await;
        let installed = self.store.install(snap);
        info!("Snapshot refreshed for {today}");
        installed
    }
}

fn warn_fetch(source: &str, err: &ApiError) {
    match err {
        ApiError::ExternalApi(e) if e.is_timeout() => {
            warn!("Timed out accessing {source} API");
        }
        ApiError::ExternalApi(e) if e.is_decode() => {
            warn!("Error decoding {source} JSON response");
        }
        _ => warn!("{source} request failed: {err}"),
    }
}

/// Copy rise/set/phase fields out of an almanac payload.
///
/// The payload root must contain `properties.data`; if it does not,
/// the whole extraction is abandoned and every almanac field keeps its
/// default. Within `data`, absent fields and absent event lists leave
/// their snapshot fields untouched without disturbing the rest.
fn apply_almanac(snap: &mut Snapshot, body: &Value) -> ApiResult<()> {
    let data = body
        .get("properties")
        .and_then(|p| p.get("data"))
        .ok_or_else(|| ApiError::MissingData("properties.data".to_string()))?;

    if let Some(phase) = str_field(data, "curphase") {
        snap.phase = phase;
    }
    if let Some(fracillum) = str_field(data, "fracillum") {
        snap.fracillum = fracillum;
    }

    if let Some(events) = data.get("sundata").and_then(Value::as_array) {
        if let Some(time) = event_time(events, "Rise") {
            snap.sunrise = time;
        }
        if let Some(time) = event_time(events, "Set") {
            snap.sunset = time;
        }
    }

    if let Some(events) = data.get("moondata").and_then(Value::as_array) {
        if let Some(time) = event_time(events, "Rise") {
            snap.moonrise = time;
        }
        if let Some(time) = event_time(events, "Set") {
            snap.moonset = time;
        }
    }

    Ok(())
}

/// Copy picture metadata out of an APOD payload. Absent fields keep
/// their defaults; the image becomes an embeddable reference only when
/// a url is supplied.
fn apply_apod(snap: &mut Snapshot, body: &Value) {
    if let Some(title) = str_field(body, "title") {
        snap.apod_title = title;
    }
    if let Some(copyright) = str_field(body, "copyright") {
        snap.apod_copyright = copyright;
    }
    if let Some(explanation) = str_field(body, "explanation") {
        snap.apod_explanation = explanation;
    }
    if let Some(date) = str_field(body, "date") {
        snap.apod_date = date;
    }
    if let Some(url) = str_field(body, "url") {
        snap.apod_image = format!("<img src=\"{url}\">");
    }
}
