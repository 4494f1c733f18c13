pub mod bid;
pub mod vehicle;
