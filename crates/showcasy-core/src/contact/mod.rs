mod form;
mod transport;

pub use form::{ContactForm, Field, FieldErrors, SubmitOutcome};
pub use transport::{
    transport_from_config, NoopTransport, OutboxTransport, Submission, SubmissionTransport,
};
