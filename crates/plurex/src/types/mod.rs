mod category;
mod gender;
mod number;
mod value;

pub use category::PluralCategory;
pub use gender::Gender;
pub use number::Number;
pub use value::Value;
