pub mod concepts;
pub mod feedback;
pub mod topology;
