//! In-process HTTP server serving fixed bodies for the fetch tests.

use std::{
    io::{Read, Write},
    net::TcpListener,
    thread::spawn,
};

use tiny_http::{Response, Server};

/// Starts a server on an ephemeral port and returns its base URL, e.g.
/// `http://127.0.0.1:40123`. It runs until the test process exits.
pub fn start() -> String {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    spawn(move || run(server));
    format!("http://{addr}")
}

fn run(server: Server) {
    for req in server.incoming_requests() {
        let res = match req.url() {
            "/lines" => Response::from_string("a\nb\nc"),
            "/empty" => Response::from_string(""),
            "/mixed" => Response::from_string("one\r\ntwo\rthree\n\nfive\n"),
            "/basins" => Response::from_string("[{\"name\":\"Kanawha River\"}]\n"),
            _ => Response::from_string("Not Found").with_status_code(404),
        };

        req.respond(res).unwrap();
    }
}

/// Starts a raw server that promises a 100-byte body, sends `one\ntw` and
/// hangs up. Returns its URL.
pub fn start_truncated() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    spawn(move || {
        for mut stream in listener.incoming().flatten() {
            let mut buf = [0u8; 4096];
            _ = stream.read(&mut buf);
            _ = stream.write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 100\r\n\r\none\ntw");
            _ = stream.flush();
        }
    });
    format!("http://{addr}/")
}
