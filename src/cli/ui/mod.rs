pub mod month_view;
pub mod table;

pub use table::{Alignment, Table, TableColumn};
