use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;
use ureq::{Agent, AgentBuilder, Request};

pub const USER_AGENT: &str = "travel-guide/0.1";
const TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(#[from] std::io::Error),
}

pub fn agent() -> Agent {
    AgentBuilder::new()
        .user_agent(USER_AGENT)
        .timeout(TIMEOUT)
        .build()
}

/// Anything but a 200 with a body that decodes into `T` is an error.
pub fn get_json<T: DeserializeOwned>(request: Request) -> Result<T, FetchError> {
    let response = match request.call() {
        Ok(x) => x,
        Err(ureq::Error::Status(code, _)) => return Err(FetchError::Status(code)),
        Err(ureq::Error::Transport(err)) => return Err(FetchError::Transport(err.to_string())),
    };
    if response.status() != 200 {
        return Err(FetchError::Status(response.status()));
    }
    Ok(response.into_json()?)
}

#[cfg(test)]
pub mod testing {
    use std::{
        io::{Read, Write},
        net::TcpListener,
        thread,
    };

    /// Answers a single request with `status` and `body`, returns the base url.
    pub fn serve_once(status: u16, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let body = body.to_string();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|x| x == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{addr}")
    }

    /// A local port nothing is listening on.
    pub fn closed_port() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::{testing::*, *};

    #[derive(Debug, Deserialize)]
    struct Body {
        ok: bool,
    }

    #[test]
    fn decodes_200() {
        let url = serve_once(200, r#"{"ok": true}"#);
        let body: Body = get_json(agent().get(&url)).unwrap();
        assert!(body.ok);
    }

    #[test]
    fn status_errors() {
        let url = serve_once(500, "{}");
        let err = get_json::<Body>(agent().get(&url)).unwrap_err();
        assert!(matches!(err, FetchError::Status(500)));

        let url = serve_once(204, "");
        let err = get_json::<Body>(agent().get(&url)).unwrap_err();
        assert!(matches!(err, FetchError::Status(204)));
    }

    #[test]
    fn decode_errors() {
        let url = serve_once(200, "not json");
        let err = get_json::<Body>(agent().get(&url)).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn transport_errors() {
        let err = get_json::<Body>(agent().get(&closed_port())).unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
