pub mod submission;

pub use submission::{CreateSubmission, Submission};
