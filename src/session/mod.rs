pub mod feedback;
pub mod learning;
