pub mod convert;
pub mod formats;
pub mod guess;
pub mod zones;
