pub mod profiles;
pub mod replicate;
