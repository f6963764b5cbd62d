pub mod cell;
pub mod outline;
pub mod r2;
