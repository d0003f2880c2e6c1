//! Request routing.
//!
//! There are exactly two destinations: the battery telemetry route and the
//! static file fallback. [`dispatch`] picks one and hands the request to the
//! matching capability of the handler set, or decides to answer nothing at all.
//!
//! # Matching rules
//!
//! - The battery route is a **prefix** test: any path beginning with
//!   `/battery` matches, so `/battery`, `/battery/`, `/battery/extra` and
//!   `/batteryfoo` are all served telemetry. The optional trailing `/` in the
//!   route pattern therefore never changes the outcome.
//! - A raw request target ending in `.ico` gets no response. The client sees
//!   the connection close without a status line.
//! - Everything else is a static file path.

pub mod battery;
pub mod static_files;

use crate::http::request::Request;
use crate::http::response::Response;
use crate::telemetry::TelemetrySource;

pub use static_files::StaticFileResolver;

/// Prefix selecting the telemetry route.
pub const BATTERY_PREFIX: &str = "/battery";

/// Where a request path goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    Battery,
    /// Path to resolve under the serving root.
    Static(String),
}

/// What the connection should do with a request.
#[derive(Debug)]
pub enum Dispatch {
    Respond(Response),
    /// Write nothing and close.
    Silent,
}

/// Serves the telemetry route.
pub trait BatteryHandler {
    fn battery(&self, req: &Request) -> Response;
}

/// Serves everything that is not telemetry.
pub trait StaticHandler {
    fn static_file(&self, req: &Request, path: &str) -> Response;
}

pub fn match_route(path: &str) -> RouteMatch {
    if path.starts_with(BATTERY_PREFIX) {
        RouteMatch::Battery
    } else {
        RouteMatch::Static(path.to_string())
    }
}

/// Browsers ask for favicons on their own; those requests are ignored.
pub fn is_suppressed(target: &str) -> bool {
    target.ends_with(".ico")
}

pub fn dispatch<H>(req: &Request, handlers: &H) -> Dispatch
where
    H: BatteryHandler + StaticHandler + ?Sized,
{
    if is_suppressed(&req.target()) {
        return Dispatch::Silent;
    }

    let response = match match_route(&req.path) {
        RouteMatch::Battery => handlers.battery(req),
        RouteMatch::Static(path) => handlers.static_file(req, &path),
    };
    Dispatch::Respond(response)
}

/// Production handler set: a telemetry source plus a serving root.
pub struct Routes<T> {
    telemetry: T,
    files: StaticFileResolver,
}

impl<T: TelemetrySource> Routes<T> {
    pub fn new(telemetry: T, files: StaticFileResolver) -> Self {
        Self { telemetry, files }
    }
}

impl<T: TelemetrySource> BatteryHandler for Routes<T> {
    fn battery(&self, _req: &Request) -> Response {
        battery::battery_response(&self.telemetry)
    }
}

impl<T> StaticHandler for Routes<T> {
    fn static_file(&self, _req: &Request, path: &str) -> Response {
        static_files::file_response(&self.files, path)
    }
}
