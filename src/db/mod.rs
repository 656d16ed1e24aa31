pub mod schema;
pub mod submissions;
