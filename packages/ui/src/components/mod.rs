mod banner;
pub use banner::{Banner, BannerVariant};

mod button;
pub use button::{Button, ButtonVariant};

mod field;
pub use field::{Label, TextField};
