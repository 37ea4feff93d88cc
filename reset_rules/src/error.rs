use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResetError {
    // a rule must never read an absent field as "condition is false"
    #[error("{rule} rule requires state field `{field}`, which is absent from the snapshot")]
    MissingStateField {
        rule: &'static str,
        field: &'static str,
    },
    #[error("unknown episode status `{0}`")]
    UnknownStatus(String),
}
