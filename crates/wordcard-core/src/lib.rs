pub mod card;
pub mod draft;
pub mod error;
pub mod form;
pub mod preprocess;

pub use card::Card;
pub use draft::Draft;
pub use error::FormError;
pub use form::{CardForm, EnrichmentTicket, PendingCard};
pub use preprocess::normalize_word;
