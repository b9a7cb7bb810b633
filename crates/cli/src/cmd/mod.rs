pub mod doctor;
pub mod zola;
