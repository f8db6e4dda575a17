pub use config::EditorConfig;
pub use decorations::{decorate, DecorationCategory, Decorations};
pub use error::{ServiceError, ServiceResult};
pub use session::{Analysis, DocumentSession, Workspace};

mod config;
mod decorations;
mod error;
mod session;
