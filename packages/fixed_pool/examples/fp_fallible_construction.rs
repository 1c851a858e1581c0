//! Demonstrates constructing pool items with a constructor that can fail.
//!
//! A failed construction never takes up a slot, so the pool stays usable afterwards.

use fixed_pool::{Error, FixedPool};

#[derive(Debug)]
struct Connection {
    port: u16,
}

#[derive(Debug)]
enum ConnectError {
    Pool(Error),
    InvalidPort(String),
}

impl From<Error> for ConnectError {
    fn from(error: Error) -> Self {
        Self::Pool(error)
    }
}

fn connect(port: &str) -> Result<Connection, ConnectError> {
    port.parse()
        .map(|port| Connection { port })
        .map_err(|e| ConnectError::InvalidPort(format!("{port} ({e})")))
}

fn main() {
    let mut pool = FixedPool::<Connection, 2>::new();

    for port in ["8080", "not-a-port", "9090", "7070"] {
        match pool.try_create_with(|| connect(port)) {
            Ok(connection) => println!("Connected on port {}", connection.port),
            Err(ConnectError::InvalidPort(port)) => println!("Rejected invalid port {port}"),
            Err(ConnectError::Pool(e)) => println!("No room for port {port}: {e}"),
        }
    }

    println!(
        "Pool holds {} of {} connections",
        pool.count(),
        pool.capacity()
    );

    // A handle keeps identifying one specific connection even after its slot is reused.
    let first = pool.handle_of(pool.get(0).unwrap()).unwrap();
    pool.destroy_by_handle(first).unwrap();
    pool.create(Connection { port: 6060 }).unwrap();

    match pool.get_by_handle(first) {
        Ok(connection) => println!("Handle still resolves to port {}", connection.port),
        Err(e) => println!("Handle no longer valid: {e}"),
    }
}
