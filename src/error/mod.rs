//! Error handling for folio.
//!
//! - **Error Categories**: classification for handling decisions
//! - **Domain errors**: content loading, email relay, system
//! - **Unified type**: `FolioError` with `FolioResult<T>`
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Relay unreachable or timed out | Yes |
//! | Server | Relay 5xx | Yes |
//! | User | Relay rejected the message | No |
//! | System | OS/filesystem errors | No |
//! | Configuration | Missing relay keys, broken document | No |

mod category;
mod content;
mod folio_error;
mod relay;
mod result;
mod system;

pub use category::ErrorCategory;
pub use content::ContentError;
pub use folio_error::FolioError;
pub use relay::RelayError;
pub use result::FolioResult;
pub use system::SystemError;
