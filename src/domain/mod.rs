//! Domain types shared by the server and the client.

pub mod lookup;
pub mod tableware;

pub use lookup::Lookup;
pub use tableware::Tableware;
