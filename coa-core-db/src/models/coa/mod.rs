pub mod account_class;
pub mod account_subclass;
pub mod account_type;
pub mod account_subtype;
pub mod coa_template;
pub mod coa_template_rule;
pub mod coa_template_item;

pub use account_class::*;
pub use account_subclass::*;
pub use account_type::*;
pub use account_subtype::*;
pub use coa_template::*;
pub use coa_template_rule::*;
pub use coa_template_item::*;
