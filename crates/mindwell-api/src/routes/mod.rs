pub mod assessments;
pub mod contact;
pub mod health;
pub mod mood;
pub mod resources;
pub mod team;
