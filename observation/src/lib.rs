//! Engine for assembling field observation submissions.
//!
//! The crate merges three independent input sources into one validated
//! payload: a schema-driven editor document, native location/date/time
//! values, and five fixed file-upload slots. It holds no UI: the surrounding
//! layer renders whatever it likes, feeds changes in through [`editor::Msg`],
//! and calls [`submit::submit`] on submit intent. A small sibling concern,
//! [`map_links`], keeps the active map-layer set canonical in URL query
//! strings.

pub mod dispatch;
pub mod editor;
pub mod map_links;
pub mod stations;
pub mod submit;
pub mod validate;

pub use dispatch::{send_observation, submit_observation, DispatchState};
pub use editor::{update, Msg, ObservationForm, ObservationFormProps};
pub use submit::{submit, SubmitInput};
pub use validate::{DataValidator, ErrorMap, Validation};
