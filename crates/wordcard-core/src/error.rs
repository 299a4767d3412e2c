#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("No deck selected")]
    NoDeckSelected,
}
