pub mod health;
pub mod responses;
pub mod results;
pub mod surveys;
