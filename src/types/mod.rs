pub mod descriptor;
pub mod record;
pub mod workout;
