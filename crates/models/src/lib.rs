pub mod errors;
pub mod db;
pub mod day;
pub mod category;
pub mod user;
pub mod food;
pub mod food_availability;
pub mod vote;

#[cfg(test)]
mod tests;
