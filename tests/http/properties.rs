//! Randomized checks of the parsing limits

use crate::support::{Collector, MockClock, MockSocket, Recorder};
use nanohttp::network::application::http::{
    Client, HOSTNAME_MAX, REQUEST_MAX, Request, Server, Url,
};
use nanohttp::network::error::Error;
use rand::Rng;
use rand::distributions::Alphanumeric;

const ROUNDS: usize = 200;

fn token(rng: &mut impl Rng, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

#[test]
fn test_valid_request_lines_round_trip() {
    let mut rng = rand::thread_rng();
    for _ in 0..ROUNDS {
        let method_len = rng.gen_range(1..8);
        let method = token(&mut rng, method_len);
        let path_len = rng.gen_range(0..20);
        let path = format!("/{}", token(&mut rng, path_len));
        let query = if rng.gen_bool(0.5) {
            Some(format!("{}={}", token(&mut rng, 4), token(&mut rng, 6)))
        } else {
            None
        };
        let line = match &query {
            Some(query) => format!("{} {}?{} HTTP/1.0", method, path, query),
            None => format!("{} {} HTTP/1.0", method, path),
        };
        assert!(line.len() < REQUEST_MAX);

        let request = Request::parse(&line).unwrap();
        assert_eq!(request.method, method);
        assert_eq!(request.path, path);
        assert_eq!(request.query, query.as_deref().unwrap_or(""));
        assert_eq!(request.version, "HTTP/1.0");
    }
}

#[test]
fn test_oversized_request_lines_are_rejected() {
    let mut rng = rand::thread_rng();
    for _ in 0..ROUNDS {
        let len = rng.gen_range(REQUEST_MAX..REQUEST_MAX * 3);
        let path = token(&mut rng, len);
        let line = format!("GET /{} HTTP/1.0", path);
        assert_eq!(Request::parse(&line), Err(Error::ProtocolError));

        let data = format!("{}\r\n\r\n", line);
        let mut sock = MockSocket::new().with_client(data.as_bytes());
        let mut server = Server::new(MockClock::default(), Recorder::default());
        server.begin(&mut sock).unwrap();
        assert_eq!(server.run(10), Err(Error::ProtocolError));
        assert!(server.handler().requests.is_empty());
    }
}

#[test]
fn test_oversized_hostnames_never_connect() {
    let mut rng = rand::thread_rng();
    let mut sock = MockSocket::new();
    let mut client = Client::new(MockClock::default(), Collector::default());
    client.begin(&mut sock).unwrap();

    for _ in 0..ROUNDS {
        let len = rng.gen_range(HOSTNAME_MAX..HOSTNAME_MAX * 4);
        let host = token(&mut rng, len);
        let url = format!("http://{}/{}", host, token(&mut rng, 8));
        assert_eq!(Url::parse(&url), Err(Error::InvalidUrl));
        assert_eq!(client.get(&url, 10), Err(Error::InvalidUrl));
    }

    assert!(client.socket().unwrap().connects.is_empty());
    assert_eq!(client.handler().calls, 0);
}

#[test]
fn test_short_hostnames_are_kept() {
    let mut rng = rand::thread_rng();
    for _ in 0..ROUNDS {
        let len = rng.gen_range(1..HOSTNAME_MAX);
        let host = token(&mut rng, len);
        let url = format!("http://{}", host);
        let parsed = Url::parse(&url).unwrap();
        assert_eq!(parsed.hostname.as_str(), host);
        assert_eq!(parsed.path, "/");
    }
}
