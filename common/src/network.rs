pub mod record;
pub mod target;
