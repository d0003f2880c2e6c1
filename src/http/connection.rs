use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::parser::{parse_http_request, ParseError};
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::routes::{dispatch, BatteryHandler, Dispatch, StaticHandler};

const READ_CHUNK: usize = 4096;

/// A single client connection. It carries one request and at most one response.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

enum Incoming {
    Request(Request),
    Malformed(ParseError),
    Eof,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(READ_CHUNK),
            state: ConnectionState::Reading,
        }
    }

    pub async fn run<H>(&mut self, handlers: &H) -> anyhow::Result<()>
    where
        H: BatteryHandler + StaticHandler + ?Sized,
    {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Incoming::Request(req) => ConnectionState::Processing(req),
                        Incoming::Malformed(e) => {
                            tracing::warn!(error = ?e, "Malformed request");
                            ConnectionState::Writing(ResponseWriter::new(&Response::bad_request()))
                        }
                        Incoming::Eof => ConnectionState::Closed,
                    };
                }

                ConnectionState::Processing(req) => {
                    self.state = match Self::handle_request(req, handlers) {
                        Some(response) => ConnectionState::Writing(ResponseWriter::new(&response)),
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        self.stream.shutdown().await.ok();
        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<Incoming> {
        loop {
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    let _ = self.buffer.split_to(consumed);
                    return Ok(Incoming::Request(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data
                }

                Err(e) => return Ok(Incoming::Malformed(e)),
            }

            self.buffer.reserve(READ_CHUNK);
            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                // Client closed before a full request arrived
                return Ok(Incoming::Eof);
            }
        }
    }

    /// `None` means nothing is written back.
    fn handle_request<H>(req: &Request, handlers: &H) -> Option<Response>
    where
        H: BatteryHandler + StaticHandler + ?Sized,
    {
        if req.method != Method::GET {
            let response = Response::not_implemented(req.method.as_str());
            log_response(req, &response);
            return Some(response);
        }

        match dispatch(req, handlers) {
            Dispatch::Respond(response) => {
                log_response(req, &response);
                Some(response)
            }
            Dispatch::Silent => {
                tracing::debug!(path = %req.path, "Ignoring icon request");
                None
            }
        }
    }
}

fn log_response(req: &Request, response: &Response) {
    tracing::info!(
        method = %req.method,
        path = %req.target(),
        status = response.status.as_u16(),
        "Request served"
    );
}
