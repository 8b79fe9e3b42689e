pub mod enums;
pub mod patient;
pub mod reminder;

pub use enums::*;
pub use patient::*;
pub use reminder::*;
