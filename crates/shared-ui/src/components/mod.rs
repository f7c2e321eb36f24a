// Standalone components (no primitives)
pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod page_header;
pub mod skeleton;

// Primitive wrappers
pub mod progress;

pub use alert::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use page_header::*;
pub use progress::*;
pub use skeleton::*;
