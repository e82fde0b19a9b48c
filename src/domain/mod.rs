pub mod application;
pub mod new_submission;
pub mod submission;
pub mod submitter_email;
pub mod submitter_name;
