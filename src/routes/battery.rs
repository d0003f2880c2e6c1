use crate::http::response::Response;
use crate::telemetry::TelemetrySource;

pub const BATTERY_ERROR_MESSAGE: &str = "404 - Unable to retrieve battery status";

/// Collects a snapshot and renders it, or a 404 when the utility fails.
///
/// A failed collection never yields a JSON body.
pub fn battery_response<T>(source: &T) -> Response
where
    T: TelemetrySource + ?Sized,
{
    match source.collect() {
        Ok(snapshot) => Response::json(snapshot.to_json()),
        Err(e) => {
            tracing::warn!(error = %e, "Battery status unavailable");
            Response::not_found(BATTERY_ERROR_MESSAGE)
        }
    }
}
