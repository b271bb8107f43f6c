use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum DispatchStatus {
    Pending,
    Sent,
    Failed(String),
}
