pub mod db_init;
pub mod hierarchy;
pub mod template;
