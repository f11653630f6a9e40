// Career quiz: tag tally, profile matching, role selection and the two-stage
// session state machine. Everything except `handlers` and `store` is pure.

pub mod engine;
pub mod handlers;
pub mod matching;
pub mod roles;
pub mod session;
pub mod store;
pub mod tally;
