pub mod button;
pub mod textarea;

pub use button::Button;
pub use textarea::Textarea;
