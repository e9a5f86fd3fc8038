pub mod check;
pub mod gen;
pub mod list;
pub mod new;
