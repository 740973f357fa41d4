pub mod account_code;
pub mod normal_balance;
pub mod template;

pub use account_code::*;
pub use normal_balance::*;
pub use template::*;
