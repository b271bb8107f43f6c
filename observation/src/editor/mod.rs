//! Observation form document store: root module wiring the state container
//! with submodules for messages, update logic, and helpers.
//!
//! Responsibilities
//! - Re-export the public types (`Msg`, `ObservationFormProps`, `ObservationForm`).
//! - Keep the document-replacement discipline in one place: callers never
//!   mutate the document tree, they send a full replacement through `update`.

pub(crate) mod helpers;
mod messages;
mod props;
mod state;
mod update;

pub use messages::Msg;
pub use props::ObservationFormProps;
pub use state::ObservationForm;
pub use update::update;
